//! Field dimensions and game tuning
//!
//! Supplied once at session start and read-only afterwards. Malformed
//! values are rejected up front rather than producing undefined physics.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fixed-size playing field (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Paddle tuning shared by both sides
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Max displacement per tick
    pub speed: f32,
    /// Gap between the side wall and the back of the paddle
    pub margin: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            margin: PADDLE_MARGIN,
        }
    }
}

/// Ball tuning and serve placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallConfig {
    pub radius: f32,
    /// Distance per tick
    pub speed: f32,
    /// Serve angle in degrees
    pub serve_angle: f32,
    /// Serve position; `None` places the ball in front of the left paddle
    #[serde(default)]
    pub serve_pos: Option<Vec2>,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
            serve_angle: SERVE_ANGLE,
            serve_pos: None,
        }
    }
}

/// Complete session configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub field: Field,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
}

/// Rejected configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit a field of height {field}")]
    PaddleTooTall { paddle: f32, field: f32 },

    #[error("paddle speed {speed} must stay below half the field height ({limit})")]
    PaddleTooFast { speed: f32, limit: f32 },

    #[error("ball diameter {diameter} does not fit a field of height {field}")]
    BallTooLarge { diameter: f32, field: f32 },

    #[error("paddles overlap: field width {field} is too narrow")]
    PaddleOverlap { field: f32 },

    #[error("ball contact point {reach} lies outside the paddle zone ({zone})")]
    PaddleOutsideZone { reach: f32, zone: f32 },

    #[error("serve angle must be finite, got {angle}")]
    ServeAngleNotFinite { angle: f32 },

    #[error("serve position ({x}, {y}) lies outside the field")]
    ServeOutsideField { x: f32, y: f32 },
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

impl GameConfig {
    /// Check every caller contract the physics relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field width", self.field.width)?;
        positive("field height", self.field.height)?;
        positive("paddle width", self.paddle.width)?;
        positive("paddle height", self.paddle.height)?;
        positive("paddle speed", self.paddle.speed)?;
        positive("ball radius", self.ball.radius)?;
        positive("ball speed", self.ball.speed)?;

        if !self.paddle.margin.is_finite() || self.paddle.margin < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "paddle margin",
                value: self.paddle.margin,
            });
        }

        if self.paddle.height >= self.field.height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle.height,
                field: self.field.height,
            });
        }

        let limit = self.field.height / 2.0;
        if self.paddle.speed >= limit {
            return Err(ConfigError::PaddleTooFast {
                speed: self.paddle.speed,
                limit,
            });
        }

        let diameter = self.ball.radius * 2.0;
        if diameter >= self.field.height {
            return Err(ConfigError::BallTooLarge {
                diameter,
                field: self.field.height,
            });
        }

        if self.left_paddle_x() + self.paddle.width >= self.right_paddle_x() {
            return Err(ConfigError::PaddleOverlap {
                field: self.field.width,
            });
        }

        // Paddle hits are only tested inside the outer zone, so the ball
        // center at first contact must still fall within it
        let reach = self.paddle.margin + self.paddle.width + self.ball.radius;
        let zone = self.field.width * PADDLE_ZONE;
        if reach >= zone {
            return Err(ConfigError::PaddleOutsideZone { reach, zone });
        }

        if !self.ball.serve_angle.is_finite() {
            return Err(ConfigError::ServeAngleNotFinite {
                angle: self.ball.serve_angle,
            });
        }

        if let Some(pos) = self.ball.serve_pos {
            let inside = (0.0..=self.field.width).contains(&pos.x)
                && (0.0..=self.field.height).contains(&pos.y);
            if !inside {
                return Err(ConfigError::ServeOutsideField { x: pos.x, y: pos.y });
            }
        }

        Ok(())
    }

    /// Left edge of the left paddle
    pub fn left_paddle_x(&self) -> f32 {
        self.paddle.margin
    }

    /// Left edge of the right paddle
    pub fn right_paddle_x(&self) -> f32 {
        self.field.width - (self.paddle.margin + self.paddle.width)
    }

    /// Top edge that vertically centers a paddle
    pub fn paddle_start_y(&self) -> f32 {
        self.field.height / 2.0 - self.paddle.height / 2.0
    }

    /// Where the ball is served from at the start of every round
    pub fn serve_pos(&self) -> Vec2 {
        self.ball.serve_pos.unwrap_or_else(|| {
            Vec2::new(
                self.paddle.margin + self.paddle.width + self.ball.radius,
                self.field.height / 2.0,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_layout() {
        let config = GameConfig::default();
        assert_eq!(config.left_paddle_x(), 20.0);
        assert_eq!(config.right_paddle_x(), 700.0 - 35.0);
        assert_eq!(config.paddle_start_y(), 165.0);
        assert_eq!(config.serve_pos(), Vec2::new(42.0, 200.0));
    }

    #[test]
    fn test_zero_ball_speed_rejected() {
        let mut config = GameConfig::default();
        config.ball.speed = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "ball speed",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_nan_rejected() {
        let mut config = GameConfig::default();
        config.field.width = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "field width",
                ..
            })
        ));
    }

    #[test]
    fn test_fast_paddle_rejected() {
        let mut config = GameConfig::default();
        config.paddle.speed = 200.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooFast { .. })
        ));
    }

    #[test]
    fn test_tall_paddle_rejected() {
        let mut config = GameConfig::default();
        config.paddle.height = 400.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_narrow_field_rejected() {
        let mut config = GameConfig::default();
        config.field.width = 60.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleOverlap { .. })
        ));
    }

    #[test]
    fn test_paddle_outside_zone_rejected() {
        let mut config = GameConfig::default();
        config.paddle.margin = 80.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleOutsideZone { reach, .. }) if reach == 102.0
        ));

        config.paddle.margin = 48.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleOutsideZone { .. })
        ));

        config.paddle.margin = 47.0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_nan_serve_angle_rejected() {
        let mut config = GameConfig::default();
        config.ball.serve_angle = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ServeAngleNotFinite { .. })
        ));

        config.ball.serve_angle = f32::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serve_pos_outside_field_rejected() {
        let mut config = GameConfig::default();
        config.ball.serve_pos = Some(Vec2::new(350.0, 450.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::ServeOutsideField { x: 350.0, y: 450.0 })
        );

        config.ball.serve_pos = Some(Vec2::new(-1.0, 200.0));
        assert!(config.validate().is_err());

        config.ball.serve_pos = Some(Vec2::new(f32::NAN, 200.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_serve_pos_accepted() {
        let mut config = GameConfig::default();
        config.ball.serve_pos = Some(Vec2::new(350.0, 200.0));
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.serve_pos(), Vec2::new(350.0, 200.0));
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
