//! Session state and the menu / play / game-over state machine.
//!
//! [`Game`] never touches the window: the frame loop hands it sampled
//! [`Input`]s and the frame delta, and the renderer reads it back.

use macroquad::math::Vec2;
use tracing::{info, warn};

use crate::difficulty::Difficulty;
use crate::food::Food;
use crate::grid::{self, Cell, Direction};
use crate::highscores::{HighScoreFile, HighScoreTable};
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    MainMenu,
    Playing,
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Input {
    Arrow(Direction),
    /// Enter or Space.
    Confirm,
    /// Left mouse button, in screen pixels.
    Click(Vec2),
}

/// What one simulation step did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    Died,
}

pub struct Game {
    state: GameState,
    difficulty: Difficulty,
    snake: Snake,
    food: Food,
    score: u32,
    since_tick: f32,
    high_scores: HighScoreTable,
    store: HighScoreFile,
}

impl Game {
    pub fn new(difficulty: Difficulty, store: HighScoreFile) -> Self {
        let high_scores = store.load();
        let snake = new_snake(difficulty);
        let food = Food::new(snake.body());
        Self {
            state: GameState::MainMenu,
            difficulty,
            snake,
            food,
            score: 0,
            since_tick: 0.0,
            high_scores,
            store,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food.position()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score for the selected difficulty.
    pub fn high_score(&self) -> u32 {
        self.high_scores.get(self.difficulty)
    }

    pub fn handle_input(&mut self, input: Input) {
        match (self.state, input) {
            (GameState::MainMenu, Input::Arrow(Direction::Right)) => {
                self.select_difficulty(self.difficulty.next())
            }
            (GameState::MainMenu, Input::Arrow(Direction::Left)) => {
                self.select_difficulty(self.difficulty.previous())
            }
            (GameState::MainMenu, Input::Confirm) => self.start(),
            (GameState::MainMenu, Input::Click(pos)) => {
                if grid::play_button().contains(pos) {
                    self.start();
                } else if grid::difficulty_button().contains(pos) {
                    self.select_difficulty(self.difficulty.next());
                }
            }
            (GameState::Playing, Input::Arrow(direction)) => self.snake.set_direction(direction),
            (GameState::GameOver, Input::Confirm | Input::Click(_)) => self.back_to_menu(),
            _ => {}
        }
    }

    /// Runs at most one tick once the difficulty's tick interval has passed.
    pub fn update(&mut self, dt: f32) -> Option<TickOutcome> {
        if self.state != GameState::Playing {
            return None;
        }
        let interval = self.difficulty.tick_interval();
        self.since_tick += dt;
        if self.since_tick < interval {
            return None;
        }
        // Carry the leftover so the rate does not depend on frame length
        self.since_tick = (self.since_tick - interval).clamp(0.0, interval);
        self.tick()
    }

    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.state != GameState::Playing {
            return None;
        }
        self.snake.advance();

        if self.snake.hits_wall() || self.snake.hits_self() {
            self.finish();
            return Some(TickOutcome::Died);
        }

        if self.snake.eats(self.food.position()) {
            self.score += 1;
            self.snake.grow();
            self.food.spawn(self.snake.body());
            return Some(TickOutcome::Ate);
        }

        Some(TickOutcome::Moved)
    }

    fn select_difficulty(&mut self, difficulty: Difficulty) {
        info!(from = self.difficulty.name(), to = difficulty.name(), "difficulty selected");
        self.difficulty = difficulty;
    }

    fn start(&mut self) {
        self.snake = new_snake(self.difficulty);
        self.food.spawn(self.snake.body());
        self.score = 0;
        self.since_tick = 0.0;
        self.state = GameState::Playing;
        info!(difficulty = self.difficulty.name(), "game started");
    }

    fn finish(&mut self) {
        self.state = GameState::GameOver;
        info!(difficulty = self.difficulty.name(), score = self.score, "game over");

        if self.high_scores.record(self.difficulty, self.score) {
            info!(difficulty = self.difficulty.name(), score = self.score, "new high score");
            if let Err(err) = self.store.save(&self.high_scores) {
                warn!("{err:#}");
            }
        }
    }

    fn back_to_menu(&mut self) {
        self.score = 0;
        self.state = GameState::MainMenu;
    }

    #[cfg(test)]
    fn place_food(&mut self, cell: Cell) {
        self.food.place(cell);
    }
}

fn new_snake(difficulty: Difficulty) -> Snake {
    Snake::new(Cell::center(), difficulty.initial_length(), Direction::Right)
}
