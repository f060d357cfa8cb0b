//! Keyboard input collection for one rendered frame.

use app::app_loop::AppInput;
use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

const MOVEMENT_KEYS: [KeyCode; 8] = [
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::Up,
    KeyCode::Left,
    KeyCode::Down,
    KeyCode::Right,
];

const COMMAND_KEYS: [KeyCode; 3] = [KeyCode::F1, KeyCode::R, KeyCode::K];

pub fn capture_frame_input() -> AppInput {
    let keys_down = MOVEMENT_KEYS.into_iter().filter(|&key| is_key_down(key)).collect();
    let keys_pressed = COMMAND_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect();
    AppInput { keys_down, keys_pressed }
}
