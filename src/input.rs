use macroquad::prelude::*;

use crate::game::Input;
use crate::grid::Direction;

const ARROWS: [(KeyCode, Direction); 4] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
];

/// Inputs pressed since the last frame, in a fixed order.
pub fn poll() -> Vec<Input> {
    let mut inputs = Vec::new();
    for (key, direction) in ARROWS {
        if is_key_pressed(key) {
            inputs.push(Input::Arrow(direction));
        }
    }
    if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space) {
        inputs.push(Input::Confirm);
    }
    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        inputs.push(Input::Click(vec2(x, y)));
    }
    inputs
}

pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Q) || is_key_pressed(KeyCode::Escape)
}
