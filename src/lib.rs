//! Canvas Pong - a two-paddle ball game simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball physics, round state)
//! - `config`: Field dimensions and tuning, validated at session start
//!
//! Angles are in degrees, normalized to `[0, 360)`. 0 points right and
//! angles grow counter-clockwise on screen, so integration subtracts the
//! vertical component from screen y.

pub mod config;
pub mod sim;

pub use config::{ConfigError, Field, GameConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default field dimensions
    pub const FIELD_WIDTH: f32 = 700.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 70.0;
    pub const PADDLE_SPEED: f32 = 4.0;
    /// Gap between a side wall and the back of its paddle
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_SPEED: f32 = 5.0;
    /// Serve angle (degrees)
    pub const SERVE_ANGLE: f32 = 20.0;

    /// Number of past positions kept for the motion trail
    pub const TRAIL_LENGTH: usize = 100;
    /// Trail mark radius range (oldest -> newest)
    pub const TRAIL_RADIUS_MIN: f32 = 2.0;
    pub const TRAIL_RADIUS_MAX: f32 = 5.0;
    /// Trail mark opacity range (oldest -> newest)
    pub const TRAIL_OPACITY_MIN: f32 = 0.01;
    pub const TRAIL_OPACITY_MAX: f32 = 0.3;

    /// Paddle checks only run this close to a side wall (fraction of width)
    pub const PADDLE_ZONE: f32 = 0.1;
    /// Slack beyond the top/bottom walls before the ball is force-reset
    pub const OUT_OF_BOUNDS_SLACK: f32 = 5.0;
}

/// Normalize angle to [0, 360)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Mirror across the vertical axis (left <-> right)
#[inline]
pub fn reflect_y_axis(angle: f32) -> f32 {
    normalize_angle(180.0 - angle)
}

/// Mirror across the horizontal axis (up <-> down)
#[inline]
pub fn reflect_x_axis(angle: f32) -> f32 {
    normalize_angle(360.0 - angle)
}

/// Unit displacement for an angle in math orientation (y up)
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    let rad = angle.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}
