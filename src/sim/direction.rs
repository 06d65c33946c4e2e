//! Travel direction derived from the ball angle
//!
//! Computed once per tick and handed to every collision check so only the
//! walls and paddle the ball is heading toward are tested.

use serde::{Deserialize, Serialize};

use crate::normalize_angle;

/// Vertical travel component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vertical {
    Up,
    Down,
    /// Exactly 0 or 180 degrees
    Level,
}

/// Horizontal travel component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizontal {
    Left,
    Right,
    /// Exactly 90 or 270 degrees
    Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl Direction {
    /// Quadrant test; boundary angles are neutral on the affected axis
    pub fn from_angle(angle: f32) -> Self {
        let deg = normalize_angle(angle);

        let vertical = if deg > 0.0 && deg < 180.0 {
            Vertical::Up
        } else if deg > 180.0 && deg < 360.0 {
            Vertical::Down
        } else {
            Vertical::Level
        };

        let horizontal = if deg > 270.0 || deg < 90.0 {
            Horizontal::Right
        } else if deg > 90.0 && deg < 270.0 {
            Horizontal::Left
        } else {
            Horizontal::Level
        };

        Self {
            vertical,
            horizontal,
        }
    }

    #[inline]
    pub fn left(&self) -> bool {
        self.horizontal == Horizontal::Left
    }

    #[inline]
    pub fn right(&self) -> bool {
        self.horizontal == Horizontal::Right
    }

    #[inline]
    pub fn up(&self) -> bool {
        self.vertical == Vertical::Up
    }

    #[inline]
    pub fn down(&self) -> bool {
        self.vertical == Vertical::Down
    }
}
