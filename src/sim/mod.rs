//! Simulation module
//!
//! All gameplay logic lives here. This module must stay platform-free:
//! - One tick per animation frame, driven from the outside
//! - Randomness only through the injectable jitter source
//! - Fixed row-major brick scan order
//! - No rendering or DOM dependencies

pub mod collision;
pub mod grid;
pub mod jitter;
pub mod state;
pub mod tick;

pub use collision::{BounceAxis, circle_square_overlap};
pub use grid::{BrickGrid, Cell, HEART_PATTERN};
pub use jitter::{JitterSource, NoJitter, PcgJitter};
pub use state::{Ball, GamePhase, GameState, Paddle};
pub use tick::{TickInput, TickOutcome, tick};
