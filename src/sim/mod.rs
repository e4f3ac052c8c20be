//! Deterministic simulation module
//!
//! All demo logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Input arrives as buffered intents, applied inside the tick
//! - No rendering or platform dependencies

pub mod clock;
pub mod entity;
pub mod grid;
pub mod input;
pub mod raycast;
pub mod state;
pub mod tick;

pub use clock::SimulationClock;
pub use entity::{Direction, MobilePoint, TargetPoint};
pub use grid::{Cell, CellRect, Grid, OutOfBounds};
pub use input::{Intent, TickInput};
pub use raycast::{RayHit, Step, Traversal, cast};
pub use state::{ActivationFlags, PaintMode, RayState, Scene, Snapshot};
pub use tick::tick;
