//! Paddle controllers: keyboard-driven player and pursuit computer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::Paddle;
use super::state::Side;
use crate::config::{Field, GameConfig};

/// Held state of the two movement inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    /// -1 = up, 0 = stop, 1 = down. Opposite presses cancel.
    pub fn axis(&self) -> f32 {
        match (self.up, self.down) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Drive `paddle` (guarding `side`) after the ball: back to center while
/// the ball travels away, otherwise line the paddle center up with it.
/// The paddle's own speed cap limits each tick's move.
pub fn pursue(paddle: &mut Paddle, side: Side, ball: &Ball, field: &Field) {
    let dir = ball.direction();
    let moving_away = match side {
        Side::Left => dir.right(),
        Side::Right => dir.left(),
    };

    let target_y = if moving_away {
        field.height / 2.0
    } else {
        ball.pos.y
    };
    paddle.move_by(0.0, target_y - paddle.center_y(), field);
}

/// Human player on the left
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub paddle: Paddle,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            paddle: Paddle::new(
                Vec2::new(config.left_paddle_x(), config.paddle_start_y()),
                config.paddle.width,
                config.paddle.height,
                config.paddle.speed,
            ),
        }
    }

    pub fn update(&mut self, input: &PaddleInput, field: &Field) {
        let dy = input.axis() * self.paddle.speed;
        self.paddle.move_by(0.0, dy, field);
    }
}

/// Computer opponent on the right
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Computer {
    pub paddle: Paddle,
}

impl Computer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            paddle: Paddle::new(
                Vec2::new(config.right_paddle_x(), config.paddle_start_y()),
                config.paddle.width,
                config.paddle.height,
                config.paddle.speed,
            ),
        }
    }

    pub fn update(&mut self, ball: &Ball, field: &Field) {
        pursue(&mut self.paddle, Side::Right, ball, field);
    }
}
