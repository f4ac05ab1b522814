//! Scene drawing over an abstract 2D surface
//!
//! The simulation never draws; once per tick the driver hands the current
//! `GameState` to `draw_frame`, which depicts it through the small `Surface`
//! trait. The wasm build backs the trait with the 2D canvas context; tests
//! use a recording double.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use crate::consts::*;
use crate::sim::GameState;

const BACKGROUND_COLOR: &str = "red";
const FOREGROUND_COLOR: &str = "white";
const HUD_FONT: &str = "14px sans-serif";

/// The drawing operations the game consumes. Coordinates are arena pixels.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    fn fill_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

/// Draw one frame: background, bricks, ball, paddle, score, life dots.
pub fn draw_frame(surface: &mut impl Surface, state: &GameState) {
    surface.clear();
    surface.fill_rect(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT, BACKGROUND_COLOR);

    draw_bricks(surface, state);
    draw_ball(surface, state);
    draw_paddle(surface, state);
    draw_score(surface, state);
    draw_lives(surface, state);
}

fn draw_bricks(surface: &mut impl Surface, state: &GameState) {
    let half = BRICK_SIZE / 2.0;
    for center in state.bricks.alive_centers() {
        surface.fill_rect(
            center.x - half,
            center.y - half,
            BRICK_SIZE,
            BRICK_SIZE,
            FOREGROUND_COLOR,
        );
    }
}

fn draw_ball(surface: &mut impl Surface, state: &GameState) {
    surface.fill_circle(
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.radius,
        FOREGROUND_COLOR,
    );
}

fn draw_paddle(surface: &mut impl Surface, state: &GameState) {
    surface.fill_rect(
        state.paddle.x,
        crate::sim::Paddle::top_y(),
        PADDLE_WIDTH,
        PADDLE_HEIGHT,
        FOREGROUND_COLOR,
    );
}

fn draw_score(surface: &mut impl Surface, state: &GameState) {
    surface.fill_text(
        &format!("Score: {}", state.score),
        8.0,
        20.0,
        HUD_FONT,
        FOREGROUND_COLOR,
    );
}

/// A centered row of dots, one per remaining life.
fn draw_lives(surface: &mut impl Surface, state: &GameState) {
    let count = state.lives as f32;
    let total_width = count * LIFE_DOT_RADIUS * 2.0 + (count - 1.0) * LIFE_DOT_SPACING;
    let mut x = (ARENA_WIDTH - total_width) / 2.0 + LIFE_DOT_RADIUS;
    for _ in 0..state.lives {
        surface.fill_circle(x, LIFE_DOT_Y, LIFE_DOT_RADIUS, FOREGROUND_COLOR);
        x += LIFE_DOT_RADIUS * 2.0 + LIFE_DOT_SPACING;
    }
}
