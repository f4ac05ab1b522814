//! Game state and core simulation types
//!
//! Everything the tick mutates lives in one owned `GameState` aggregate;
//! there are no ambient globals.

use glam::Vec2;

use super::grid::BrickGrid;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Constructed but not yet started
    Idle,
    /// Active gameplay
    Playing,
    /// Every brick destroyed
    Won,
    /// Last life lost
    Lost,
}

impl GamePhase {
    /// True while ticks should be scheduled.
    pub fn is_active(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// The ball: a moving point-circle with a per-tick velocity.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Immutable for the ball's lifetime
    pub radius: f32,
}

impl Ball {
    /// Ball at the serve position, heading up and to the right.
    pub fn serve() -> Self {
        Self {
            pos: Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT - BALL_SERVE_LIFT),
            vel: Vec2::new(BALL_SERVE_DX, BALL_SERVE_DY),
            radius: BALL_RADIUS,
        }
    }
}

/// The player's paddle, confined to the bottom edge of the arena.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Left edge; width/height/speed are constants
    pub x: f32,
}

impl Paddle {
    /// Paddle centered on the arena midline.
    pub fn centered() -> Self {
        Self {
            x: (ARENA_WIDTH - PADDLE_WIDTH) / 2.0,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.x + PADDLE_WIDTH / 2.0
    }

    /// Top edge of the paddle rectangle.
    pub fn top_y() -> f32 {
        ARENA_HEIGHT - PADDLE_HEIGHT
    }

    /// Is a ball at this x over the paddle?
    pub fn catches(&self, ball_x: f32) -> bool {
        ball_x >= self.x && ball_x <= self.x + PADDLE_WIDTH
    }

    /// Move one tick's worth in the held direction, clamped to the arena.
    /// Right wins when both intents are held.
    pub fn apply_intent(&mut self, move_right: bool, move_left: bool) {
        if move_right {
            self.x = (self.x + PADDLE_SPEED).min(ARENA_WIDTH - PADDLE_WIDTH);
        } else if move_left {
            self.x = (self.x - PADDLE_SPEED).max(0.0);
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Bricks destroyed this session; never exceeds the grid's total
    pub score: u32,
    pub lives: u8,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
}

impl GameState {
    /// Fresh session over the heart grid, waiting for `start`.
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            lives: START_LIVES,
            ball: Ball::serve(),
            paddle: Paddle::centered(),
            bricks: BrickGrid::heart(),
        }
    }

    /// Idle -> Playing. The freshly constructed state already has score 0
    /// and full lives, so nothing is reset here.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Playing;
        }
    }

    /// Terminal -> Playing with everything restored: score, lives, every
    /// brick, ball and paddle at serve geometry.
    pub fn restart(&mut self) {
        if !self.phase.is_terminal() {
            return;
        }
        self.score = 0;
        self.lives = START_LIVES;
        self.bricks.reset();
        self.reset_ball_and_paddle();
        self.phase = GamePhase::Playing;
    }

    /// Put the ball back at the serve position and re-center the paddle.
    /// Bricks and score are untouched (used on non-terminal life loss).
    pub fn reset_ball_and_paddle(&mut self) {
        self.ball = Ball::serve();
        self.paddle = Paddle::centered();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_state_is_idle_with_full_lives() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, START_LIVES);
        assert!(!state.phase.is_active());
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut state = GameState::new();
        state.start();
        assert_eq!(state.phase, GamePhase::Playing);

        state.phase = GamePhase::Lost;
        state.start();
        assert_eq!(state.phase, GamePhase::Lost);
    }

    #[test]
    fn test_restart_restores_everything() {
        let mut state = GameState::new();
        state.start();
        state.bricks.destroy(1, 1);
        state.bricks.destroy(1, 2);
        state.score = 2;
        state.lives = 0;
        state.ball.pos = Vec2::new(50.0, 50.0);
        state.paddle.x = 0.0;
        state.phase = GamePhase::Lost;

        state.restart();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.bricks.alive_bricks(), state.bricks.total_bricks());
        assert_eq!(
            state.ball.pos,
            Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT - BALL_SERVE_LIFT)
        );
        assert_eq!(state.ball.vel, Vec2::new(BALL_SERVE_DX, BALL_SERVE_DY));
        assert_eq!(state.paddle.x, (ARENA_WIDTH - PADDLE_WIDTH) / 2.0);
    }

    #[test]
    fn test_restart_is_a_no_op_outside_terminal_states() {
        let mut state = GameState::new();
        state.start();
        state.score = 5;
        state.restart();
        assert_eq!(state.score, 5);
    }

    #[test]
    fn test_paddle_catches_closed_interval() {
        let paddle = Paddle { x: 100.0 };
        assert!(paddle.catches(100.0));
        assert!(paddle.catches(100.0 + PADDLE_WIDTH));
        assert!(!paddle.catches(99.9));
        assert!(!paddle.catches(100.1 + PADDLE_WIDTH));
    }

    #[test]
    fn test_paddle_right_wins_when_both_held() {
        let mut paddle = Paddle::centered();
        let before = paddle.x;
        paddle.apply_intent(true, true);
        assert_eq!(paddle.x, before + PADDLE_SPEED);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(intents in proptest::collection::vec(any::<(bool, bool)>(), 0..200)) {
            let mut paddle = Paddle::centered();
            for (right, left) in intents {
                paddle.apply_intent(right, left);
                prop_assert!(paddle.x >= 0.0);
                prop_assert!(paddle.x <= ARENA_WIDTH - PADDLE_WIDTH);
            }
        }
    }
}
