//! Input intents
//!
//! Platform input is translated into intents and buffered. The next tick
//! applies them in arrival order, so the scene is never touched from the
//! event polling pass.

use glam::IVec2;

use super::entity::Direction;

/// One edge-triggered user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Pointer moved to window pixel position
    PointerMoved(IVec2),
    /// Start casting the ray
    RayPressed,
    /// Stop casting the ray
    RayReleased,
    /// Begin a wall paint gesture at the pointer position
    PaintPressed(IVec2),
    /// End the wall paint gesture
    PaintReleased,
    /// Movement key edge
    Key { dir: Direction, pressed: bool },
}

/// Intents collected since the last tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub intents: Vec<Intent>,
}

impl TickInput {
    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Hand the buffered intents to one tick, leaving this buffer empty
    pub fn take(&mut self) -> TickInput {
        std::mem::take(self)
    }
}
