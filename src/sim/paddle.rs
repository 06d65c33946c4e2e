//! Paddle state and bounded vertical movement

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Field;

/// A player's paddle (position is the top-left corner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Max displacement per tick on each axis
    pub speed: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, width: f32, height: f32, speed: f32) -> Self {
        Self {
            pos,
            width,
            height,
            speed,
        }
    }

    /// Cap each component to `speed`, then apply, keeping the paddle inside
    /// `[0, field.height - height]`. Hitting a bound pins `y` to it and
    /// drops the horizontal part of the move for this tick.
    pub fn move_by(&mut self, dx: f32, dy: f32, field: &Field) {
        let step = Vec2::new(
            dx.clamp(-self.speed, self.speed),
            dy.clamp(-self.speed, self.speed),
        );

        let max_y = field.height - self.height;
        let next_y = self.pos.y + step.y;

        if next_y <= 0.0 {
            self.pos.y = 0.0;
        } else if next_y >= max_y {
            self.pos.y = max_y;
        } else {
            self.pos += step;
        }
    }

    /// Vertical center
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }
}
