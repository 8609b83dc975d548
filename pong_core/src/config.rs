use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub player_step: f32,
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            player_step: Params::PLAYER_STEP,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Ai => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Top edge of a paddle sitting at the vertical center
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.arena_height / 2.0).floor() - self.paddle_height / 2.0
    }

    /// Top-left corner of a freshly spawned paddle
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(self.paddle_x(side), self.paddle_spawn_y())
    }

    /// Top-left corner where the ball is served from
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.arena_width / 2.0).floor(),
            (self.arena_height / 2.0).floor(),
        )
    }
}
