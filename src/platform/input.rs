//! macroquad input polling
//!
//! W/A/S/D or the arrow keys move the player, the left button holds the ray,
//! the right button paints walls. Escape or closing the window quits.

use glam::IVec2;
use macroquad::prelude::{
    KeyCode, MouseButton, is_key_pressed, is_key_released, is_mouse_button_pressed,
    is_mouse_button_released, is_quit_requested, mouse_position, prevent_quit,
};

use super::{InputBackend, Polled};
use crate::sim::{Direction, Intent, TickInput};

const MOVE_KEYS: [(KeyCode, Direction); 8] = [
    (KeyCode::W, Direction::Up),
    (KeyCode::A, Direction::Left),
    (KeyCode::S, Direction::Down),
    (KeyCode::D, Direction::Right),
    (KeyCode::Up, Direction::Up),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Right, Direction::Right),
];

/// Polls macroquad's per-frame input state into intents
#[derive(Debug, Default)]
pub struct MacroquadInput {
    last_pointer: Option<IVec2>,
}

impl MacroquadInput {
    /// Takes over the window close button so quitting goes through [`Polled::Quit`]
    pub fn new() -> Self {
        prevent_quit();
        Self::default()
    }

    fn pointer() -> IVec2 {
        let (x, y) = mouse_position();
        IVec2::new(x.floor() as i32, y.floor() as i32)
    }
}

impl InputBackend for MacroquadInput {
    fn poll(&mut self, input: &mut TickInput) -> Polled {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            log::info!("Quit requested");
            return Polled::Quit;
        }

        let pointer = Self::pointer();
        if self.last_pointer != Some(pointer) {
            self.last_pointer = Some(pointer);
            input.push(Intent::PointerMoved(pointer));
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            input.push(Intent::RayPressed);
        }
        if is_mouse_button_released(MouseButton::Left) {
            input.push(Intent::RayReleased);
        }
        if is_mouse_button_pressed(MouseButton::Right) {
            input.push(Intent::PaintPressed(pointer));
        }
        if is_mouse_button_released(MouseButton::Right) {
            input.push(Intent::PaintReleased);
        }

        for (key, dir) in MOVE_KEYS {
            if is_key_pressed(key) {
                input.push(Intent::Key { dir, pressed: true });
            }
            if is_key_released(key) {
                input.push(Intent::Key { dir, pressed: false });
            }
        }

        Polled::Continue
    }
}
