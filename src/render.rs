use std::path::Path;

use macroquad::prelude::*;
use tracing::{info, warn};

use crate::game::{Game, GameState};
use crate::grid::{self, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE};

const WALL: Color = Color::new(0.39, 0.39, 0.39, 1.0);
const HEAD: Color = YELLOW;
const BODY: Color = GREEN;
const FOOD: Color = RED;
const OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.6);

pub struct Renderer {
    font: Option<Font>,
}

impl Renderer {
    /// Loads the UI font, falling back to the built-in one when it is missing.
    pub async fn load(font_path: &Path) -> Self {
        let font = match load_ttf_font(&font_path.to_string_lossy()).await {
            Ok(font) => {
                info!(path = %font_path.display(), "font loaded");
                Some(font)
            }
            Err(err) => {
                warn!(path = %font_path.display(), ?err, "failed to load font, using default");
                None
            }
        };
        Self { font }
    }

    pub fn draw(&self, game: &Game) {
        clear_background(BLACK);
        for wall in grid::wall_rects() {
            draw_rectangle(wall.x, wall.y, wall.w, wall.h, WALL);
        }

        match game.state() {
            GameState::MainMenu => self.draw_menu(game),
            GameState::Playing => {
                draw_board(game);
                self.text(&format!("Score: {}", game.score()), 10.0, 10.0, 20, WHITE);
            }
            GameState::GameOver => {
                draw_board(game);
                self.draw_game_over(game);
            }
        }
    }

    fn draw_menu(&self, game: &Game) {
        let sw = SCREEN_WIDTH as f32;
        self.centered("Snake Game", Rect::new(0.0, 50.0, sw, 60.0), 50, GREEN);

        let play = grid::play_button();
        draw_rectangle_lines(play.x, play.y, play.w, play.h, 2.0, DARKGRAY);
        self.centered("Play", play, 30, WHITE);

        let difficulty = grid::difficulty_button();
        draw_rectangle_lines(difficulty.x, difficulty.y, difficulty.w, difficulty.h, 2.0, DARKGRAY);
        let label = format!("Difficulty: {}", game.difficulty().name());
        self.centered(&label, difficulty, 30, WHITE);

        let best = format!("High Score ({}): {}", game.difficulty().name(), game.high_score());
        self.centered(&best, Rect::new(0.0, 290.0, sw, 30.0), 20, YELLOW);

        let hint = "Left/Right: difficulty   Enter: play   Q: quit";
        self.centered(hint, Rect::new(0.0, 520.0, sw, 24.0), 16, GRAY);
    }

    fn draw_game_over(&self, game: &Game) {
        let sw = SCREEN_WIDTH as f32;
        let sh = SCREEN_HEIGHT as f32;
        draw_rectangle(0.0, 0.0, sw, sh, OVERLAY);

        let lines = [
            "Game Over!".to_string(),
            format!("Final Score: {}", game.score()),
            "Click to return to menu".to_string(),
        ];
        let mut top = sh * 0.5 - 60.0;
        for line in &lines {
            self.centered(line, Rect::new(0.0, top, sw, 40.0), 30, RED);
            top += 40.0;
        }
    }

    /// Draws `text` with its top-left corner at `(x, y)`.
    fn text(&self, text: &str, x: f32, y: f32, size: u16, color: Color) {
        let dims = measure_text(text, self.font.as_ref(), size, 1.0);
        draw_text_ex(text, x, y + dims.offset_y, self.params(size, color));
    }

    fn centered(&self, text: &str, area: Rect, size: u16, color: Color) {
        let dims = measure_text(text, self.font.as_ref(), size, 1.0);
        let x = area.x + (area.w - dims.width) * 0.5;
        let y = area.y + (area.h - dims.height) * 0.5 + dims.offset_y;
        draw_text_ex(text, x, y, self.params(size, color));
    }

    fn params(&self, size: u16, color: Color) -> TextParams<'_> {
        TextParams { font: self.font.as_ref(), font_size: size, color, ..Default::default() }
    }
}

fn draw_board(game: &Game) {
    for (i, cell) in game.snake().body().iter().enumerate().rev() {
        let r = cell.to_rect();
        let color = if i == 0 { HEAD } else { BODY };
        draw_rectangle(r.x, r.y, r.w, r.h, color);
    }

    let food = game.food().center_px();
    draw_circle(food.x, food.y, TILE_SIZE as f32 * 0.5, FOOD);
}
