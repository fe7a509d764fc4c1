use macroquad::math::{Rect, Vec2, vec2};

// Window and grid geometry
pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const TILE_SIZE: i32 = 20;
pub const GRID_WIDTH: i32 = SCREEN_WIDTH / TILE_SIZE;
pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / TILE_SIZE;

// Menu buttons, in screen pixels
const BUTTON_HEIGHT: f32 = 40.0;
const PLAY_BUTTON_WIDTH: f32 = 160.0;
const DIFFICULTY_BUTTON_WIDTH: f32 = 320.0;
const PLAY_BUTTON_TOP: f32 = 180.0;
const DIFFICULTY_BUTTON_TOP: f32 = 230.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Centre of the board, where every new snake puts its head.
    pub const fn center() -> Self {
        Self::new(GRID_WIDTH / 2, GRID_HEIGHT / 2)
    }

    pub fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell { x: self.x + dx, y: self.y + dy }
    }

    /// True for cells inside the wall ring.
    pub fn is_inner(self) -> bool {
        self.x >= 1 && self.x < GRID_WIDTH - 1 && self.y >= 1 && self.y < GRID_HEIGHT - 1
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(
            (self.x * TILE_SIZE) as f32,
            (self.y * TILE_SIZE) as f32,
            TILE_SIZE as f32,
            TILE_SIZE as f32,
        )
    }

    pub fn center_px(self) -> Vec2 {
        let half = TILE_SIZE as f32 * 0.5;
        vec2((self.x * TILE_SIZE) as f32 + half, (self.y * TILE_SIZE) as f32 + half)
    }
}

/// Top, bottom, left and right wall strips, one cell thick.
pub fn wall_rects() -> [Rect; 4] {
    let w = SCREEN_WIDTH as f32;
    let h = SCREEN_HEIGHT as f32;
    let t = TILE_SIZE as f32;
    [
        Rect::new(0.0, 0.0, w, t),
        Rect::new(0.0, h - t, w, t),
        Rect::new(0.0, 0.0, t, h),
        Rect::new(w - t, 0.0, t, h),
    ]
}

fn centered_button(top: f32, width: f32) -> Rect {
    Rect::new((SCREEN_WIDTH as f32 - width) * 0.5, top, width, BUTTON_HEIGHT)
}

pub fn play_button() -> Rect {
    centered_button(PLAY_BUTTON_TOP, PLAY_BUTTON_WIDTH)
}

pub fn difficulty_button() -> Rect {
    centered_button(DIFFICULTY_BUTTON_TOP, DIFFICULTY_BUTTON_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_playfield_excludes_the_wall_ring() {
        assert!(Cell::new(1, 1).is_inner());
        assert!(Cell::new(GRID_WIDTH - 2, GRID_HEIGHT - 2).is_inner());
        assert!(!Cell::new(0, 5).is_inner());
        assert!(!Cell::new(5, 0).is_inner());
        assert!(!Cell::new(GRID_WIDTH - 1, 5).is_inner());
        assert!(!Cell::new(5, GRID_HEIGHT - 1).is_inner());
        assert!(!Cell::new(-1, -1).is_inner());
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn menu_buttons_do_not_overlap() {
        assert!(play_button().intersect(difficulty_button()).is_none());
        assert!(play_button().contains(vec2(SCREEN_WIDTH as f32 * 0.5, PLAY_BUTTON_TOP + 1.0)));
    }
}
