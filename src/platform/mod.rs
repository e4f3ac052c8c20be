//! Platform abstraction layer
//!
//! Input polling and primitive drawing on top of macroquad. The simulation
//! only sees [`Intent`]s coming in and a [`RenderBackend`] going out.
//!
//! [`Intent`]: crate::sim::Intent
//! [`RenderBackend`]: crate::render::RenderBackend

pub mod draw;
pub mod input;

pub use draw::MacroquadRenderer;
pub use input::MacroquadInput;

use crate::sim::TickInput;

/// Outcome of one input poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polled {
    Continue,
    /// Window close or quit key seen
    Quit,
}

/// Source of user input, polled once per frame
pub trait InputBackend {
    /// Append this frame's intents to `input`
    fn poll(&mut self, input: &mut TickInput) -> Polled;
}
