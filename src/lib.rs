//! Heartbreak - a heart-pattern brick-and-paddle game
//!
//! Core modules:
//! - `sim`: Simulation (ball physics, brick collisions, session state machine)
//! - `renderer`: Scene drawing over an abstract 2D surface (canvas on wasm)
//!
//! The platform driver (frame scheduling, keyboard wiring, overlay DOM)
//! lives in `main.rs`.

pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (must match the canvas element)
    pub const ARENA_WIDTH: f32 = 480.0;
    pub const ARENA_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Serve height above the bottom edge
    pub const BALL_SERVE_LIFT: f32 = 30.0;
    pub const BALL_SERVE_DX: f32 = 2.0;
    pub const BALL_SERVE_DY: f32 = -2.0;

    /// Paddle defaults - confined to the bottom edge of the arena
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Horizontal travel per tick while an intent is held
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Deflection per pixel of offset from the paddle center
    pub const PADDLE_DEFLECT: f32 = 0.1;

    /// Brick grid: square cells, centered, offset down from the top
    pub const BRICK_SIZE: f32 = 30.0;
    pub const BRICK_PADDING: f32 = 2.0;
    pub const BRICK_OFFSET_FRACTION: f32 = 0.15;

    /// Velocity jitter after any brick bounce, and on paddle-bounce dx
    pub const BOUNCE_JITTER: f32 = 0.05;
    /// Smaller dy jitter on paddle bounces
    pub const PADDLE_JITTER_DY: f32 = 0.025;

    pub const START_LIVES: u8 = 3;

    /// Life-indicator dots in the HUD
    pub const LIFE_DOT_RADIUS: f32 = 6.0;
    pub const LIFE_DOT_SPACING: f32 = 10.0;
    pub const LIFE_DOT_Y: f32 = 15.0;
}
