//! Ball physics: angle-based motion, collisions, trail and round exits

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{self, WallContact};
use super::direction::{Direction, Horizontal};
use super::paddle::Paddle;
use super::state::Side;
use crate::config::{Field, GameConfig};
use crate::consts::*;
use crate::{heading, normalize_angle, reflect_x_axis, reflect_y_axis};

/// Emitted by `Ball::update` when the ball leaves through a side wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEnd {
    /// Side awarded the point (opposite the wall that was crossed)
    pub winner: Side,
}

/// Trail entry styled for rendering (older entries are smaller and fainter)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailMark {
    pub pos: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

/// Where and how the ball starts each round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Serve {
    pos: Vec2,
    angle: f32,
    speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    /// Travel angle in degrees, always within [0, 360)
    pub angle: f32,
    /// Distance per tick
    pub speed: f32,
    /// Screen-space displacement applied on the last move
    pub vel: Vec2,
    /// Recent positions, newest first
    #[serde(skip)]
    pub trail: Vec<Vec2>,
    serve: Serve,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, speed: f32, angle: f32) -> Self {
        let serve = Serve {
            pos,
            angle: normalize_angle(angle),
            speed,
        };
        let mut ball = Self {
            pos,
            radius,
            angle: serve.angle,
            speed,
            vel: Vec2::ZERO,
            trail: Vec::with_capacity(TRAIL_LENGTH),
            serve,
        };
        ball.set_initial_angle();
        ball
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.serve_pos(),
            config.ball.radius,
            config.ball.speed,
            config.ball.serve_angle,
        )
    }

    pub fn set_initial_angle(&mut self) {
        self.angle = self.serve.angle;
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = normalize_angle(angle);
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::from_angle(self.angle)
    }

    /// Advance one tick.
    ///
    /// Runs paddle and wall detection before moving. When a full-speed step
    /// would jump the leading edge across the facing edge of the paddle ahead,
    /// the tick is split into unit steps with detection before each one.
    /// Returns the round end as soon as the ball exits a side wall; the rest
    /// of the tick is skipped in that case.
    pub fn update(&mut self, left: &Paddle, right: &Paddle, field: &Field) -> Option<RoundEnd> {
        let dir = self.direction();
        let ahead = match dir.horizontal {
            Horizontal::Left => Some((left, Side::Left)),
            Horizontal::Right => Some((right, Side::Right)),
            Horizontal::Level => None,
        };
        let substep = ahead.is_some_and(|(paddle, side)| {
            collision::would_tunnel(self.pos, self.radius, self.angle, self.speed, paddle, side)
        });

        if substep {
            log::debug!("Sub-stepping tick at {:?} (speed {})", self.pos, self.speed);
            let whole = self.speed.floor();
            for _ in 0..whole as u32 {
                let dir = self.direction();
                if let Some(end) = self.step(dir, 1.0, left, right, field) {
                    return Some(end);
                }
            }
            let rest = self.speed - whole;
            if rest > 0.0 {
                let dir = self.direction();
                if let Some(end) = self.step(dir, rest, left, right, field) {
                    return Some(end);
                }
            }
        } else if let Some(end) = self.step(dir, self.speed, left, right, field) {
            return Some(end);
        }

        self.record_trail();
        self.check_bounds(field);
        None
    }

    /// Detect, reflect, then move `distance` along the current angle
    fn step(
        &mut self,
        dir: Direction,
        distance: f32,
        left: &Paddle,
        right: &Paddle,
        field: &Field,
    ) -> Option<RoundEnd> {
        let dir = if self.detect_paddle(dir, left, right, field) {
            self.direction()
        } else {
            dir
        };

        if let Some(end) = self.detect_wall(dir, field) {
            return Some(end);
        }

        self.advance(distance);
        None
    }

    /// Reflect off the paddle on the side the ball travels toward.
    /// Returns whether a reflection happened.
    pub fn detect_paddle(
        &mut self,
        dir: Direction,
        left: &Paddle,
        right: &Paddle,
        field: &Field,
    ) -> bool {
        if !collision::near_side_edge(self.pos.x, field) {
            return false;
        }

        let hit = match dir.horizontal {
            Horizontal::Left => {
                collision::paddle_contact(self.pos, self.radius, dir, left, Side::Left)
            }
            Horizontal::Right => {
                collision::paddle_contact(self.pos, self.radius, dir, right, Side::Right)
            }
            Horizontal::Level => false,
        };

        if hit {
            self.angle = reflect_y_axis(self.angle);
            log::debug!("Paddle hit at {:?}, new angle {}", self.pos, self.angle);
        }
        hit
    }

    /// Bounce off the top/bottom walls; a side-wall exit ends the round
    pub fn detect_wall(&mut self, dir: Direction, field: &Field) -> Option<RoundEnd> {
        match collision::wall_contact(self.pos, self.radius, dir, field) {
            WallContact::None => None,
            WallContact::Bounce => {
                self.angle = reflect_x_axis(self.angle);
                log::debug!("Wall bounce at {:?}, new angle {}", self.pos, self.angle);
                None
            }
            WallContact::Exit(crossed) => Some(RoundEnd {
                winner: crossed.opposite(),
            }),
        }
    }

    /// Move `distance` along the current angle (screen y grows downward)
    pub fn advance(&mut self, distance: f32) {
        let step = heading(self.angle) * distance;
        self.vel = Vec2::new(step.x, -step.y);
        self.pos += self.vel;
    }

    /// Record current position to trail
    pub fn record_trail(&mut self) {
        self.trail.insert(0, self.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop();
        }
    }

    /// Trail entries behind the ball, styled by age
    pub fn trail_marks(&self) -> Vec<TrailMark> {
        let len = self.trail.len() as f32;
        self.trail
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &pos)| {
                let ratio = 1.0 - i as f32 / len;
                TrailMark {
                    pos,
                    radius: TRAIL_RADIUS_MIN + ratio * (TRAIL_RADIUS_MAX - TRAIL_RADIUS_MIN),
                    opacity: TRAIL_OPACITY_MIN + ratio * (TRAIL_OPACITY_MAX - TRAIL_OPACITY_MIN),
                }
            })
            .collect()
    }

    /// Safety net: wall logic should never let the ball get this far out
    fn check_bounds(&mut self, field: &Field) {
        let slack = OUT_OF_BOUNDS_SLACK + self.speed;
        if self.pos.y < -slack || self.pos.y > field.height + slack {
            log::warn!("Ball out of bounds at {:?}, resetting", self.pos);
            self.reset();
        }
    }

    /// Back to the serve position, angle and speed. Score is untouched.
    pub fn reset(&mut self) {
        self.pos = self.serve.pos;
        self.speed = self.serve.speed;
        self.set_initial_angle();
        self.vel = Vec2::ZERO;
        self.trail.clear();
    }
}
