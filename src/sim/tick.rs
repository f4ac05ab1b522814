//! Per-frame simulation tick
//!
//! One tick runs the full resolution order: brick scan, wall bounces, the
//! paddle plane (bounce or life loss), position integration, then paddle
//! intent. A terminal transition returns immediately - nothing else mutates
//! that tick.

use super::collision::{
    BounceAxis, circle_square_overlap, crosses_paddle_plane, exits_side_walls, exits_top_wall,
};
use super::grid::Cell;
use super::jitter::JitterSource;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input intents for a single tick. Edge-triggered by the driver's
/// keydown/keyup handlers; read, not consumed, once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_right: bool,
    pub move_left: bool,
}

/// What a tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Won,
    Lost,
}

impl TickOutcome {
    /// Overlay text the driver must show after a terminal tick.
    pub fn terminal_message(&self) -> Option<&'static str> {
        match self {
            TickOutcome::Continue => None,
            TickOutcome::Won => Some("YOU WIN, CONGRATS!"),
            TickOutcome::Lost => Some("GAME OVER"),
        }
    }
}

/// Advance the session by one tick. A no-op unless the phase is `Playing`.
pub fn tick(state: &mut GameState, input: &TickInput, jitter: &mut impl JitterSource) -> TickOutcome {
    if state.phase != GamePhase::Playing {
        return TickOutcome::Continue;
    }

    if resolve_brick_hits(state, jitter) {
        state.phase = GamePhase::Won;
        return TickOutcome::Won;
    }

    // Wall bounces test the projected next position, so the reflection lands
    // before the ball ever leaves the arena.
    let next = state.ball.pos + state.ball.vel;

    if exits_side_walls(next.x, state.ball.radius, ARENA_WIDTH) {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if exits_top_wall(next.y, state.ball.radius) {
        state.ball.vel.y = -state.ball.vel.y;
    } else if crosses_paddle_plane(next.y, state.ball.radius, ARENA_HEIGHT) {
        if state.paddle.catches(state.ball.pos.x) {
            state.ball.vel.y = -state.ball.vel.y;
            // Deflection scales with the impact offset from the paddle center.
            state.ball.vel.x = (state.ball.pos.x - state.paddle.center_x()) * PADDLE_DEFLECT;
            state.ball.vel.x += jitter.sample(BOUNCE_JITTER);
            state.ball.vel.y += jitter.sample(PADDLE_JITTER_DY);
            // Snap above the paddle so the plane cannot re-trigger next tick.
            state.ball.pos.y = ARENA_HEIGHT - PADDLE_HEIGHT - state.ball.radius - 1.0;
        } else {
            state.lives -= 1;
            if state.lives == 0 {
                state.phase = GamePhase::Lost;
                return TickOutcome::Lost;
            }
            state.reset_ball_and_paddle();
        }
    }

    state.ball.pos += state.ball.vel;

    state.paddle.apply_intent(input.move_right, input.move_left);

    TickOutcome::Continue
}

/// Scan bricks in row-major order and resolve every overlap found.
/// Returns true when the hit that just resolved was the last brick.
fn resolve_brick_hits(state: &mut GameState, jitter: &mut impl JitterSource) -> bool {
    for row in 0..state.bricks.rows() {
        for col in 0..state.bricks.cols() {
            let Cell::Brick { alive: true, center } = state.bricks.cell(row, col) else {
                continue;
            };
            let Some(axis) =
                circle_square_overlap(state.ball.pos, state.ball.radius, center, BRICK_SIZE / 2.0)
            else {
                continue;
            };

            match axis {
                BounceAxis::Horizontal => state.ball.vel.x = -state.ball.vel.x,
                BounceAxis::Vertical => state.ball.vel.y = -state.ball.vel.y,
                BounceAxis::Corner => {
                    state.ball.vel.x = -state.ball.vel.x;
                    state.ball.vel.y = -state.ball.vel.y;
                }
            }
            state.ball.vel.x += jitter.sample(BOUNCE_JITTER);
            state.ball.vel.y += jitter.sample(BOUNCE_JITTER);

            state.bricks.destroy(row, col);
            state.score += 1;
            if state.score == state.bricks.total_bricks() {
                return true;
            }
            // No early return on a plain hit: bricks later in the scan that
            // also overlap this tick resolve in the same tick.
        }
    }
    false
}
