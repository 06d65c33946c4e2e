//! Collision detection for the ball against paddles and walls
//!
//! Checks are edge-based: the ball's leading edge is compared against the
//! surface it travels toward, so the center may sink slightly into a paddle
//! or wall before the reflection is applied.

use glam::Vec2;

use super::direction::{Direction, Vertical};
use super::paddle::Paddle;
use super::state::Side;
use crate::config::Field;
use crate::consts::PADDLE_ZONE;
use crate::heading;

/// Outcome of a wall check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    None,
    /// Top or bottom wall: reflect across the horizontal axis
    Bounce,
    /// Ball fully crossed this side's wall
    Exit(Side),
}

/// Cheap pre-filter: paddles only matter in the outer strips of the field
#[inline]
pub fn near_side_edge(x: f32, field: &Field) -> bool {
    x > field.width * (1.0 - PADDLE_ZONE) || x < field.width * PADDLE_ZONE
}

/// Leading vertical edge of the ball for the given travel direction
#[inline]
fn leading_y(pos: Vec2, radius: f32, dir: Direction) -> f32 {
    match dir.vertical {
        Vertical::Up => pos.y - radius,
        Vertical::Down => pos.y + radius,
        Vertical::Level => pos.y,
    }
}

/// Whether a ball travelling toward `side` touches that side's paddle.
///
/// The leading edge must have reached the paddle's facing edge while the
/// center is still in front of its back edge, and the leading vertical edge
/// must lie within the paddle's span.
pub fn paddle_contact(
    pos: Vec2,
    radius: f32,
    dir: Direction,
    paddle: &Paddle,
    side: Side,
) -> bool {
    let lead_y = leading_y(pos, radius, dir);
    if lead_y < paddle.top() || lead_y > paddle.bottom() {
        return false;
    }

    match side {
        Side::Left => pos.x - radius <= paddle.right() && pos.x > paddle.left(),
        Side::Right => pos.x + radius >= paddle.left() && pos.x < paddle.right(),
    }
}

/// Whether a full-speed step would carry the ball's leading edge from in
/// front of the paddle's facing edge to (or past) it in one move
pub fn would_tunnel(
    pos: Vec2,
    radius: f32,
    angle: f32,
    speed: f32,
    paddle: &Paddle,
    side: Side,
) -> bool {
    let step = heading(angle) * speed;
    let projected_x = pos.x + step.x;

    match side {
        Side::Left => {
            let front = paddle.right();
            pos.x - radius > front && projected_x - radius <= front
        }
        Side::Right => {
            let front = paddle.left();
            pos.x + radius < front && projected_x + radius >= front
        }
    }
}

/// Check the walls in the travel direction. Side exits take priority.
pub fn wall_contact(pos: Vec2, radius: f32, dir: Direction, field: &Field) -> WallContact {
    if dir.left() && pos.x < -radius {
        return WallContact::Exit(Side::Left);
    }
    if dir.right() && pos.x > field.width + radius {
        return WallContact::Exit(Side::Right);
    }

    let top_hit = dir.up() && pos.y - radius < 0.0;
    let bottom_hit = dir.down() && pos.y + radius > field.height;
    if top_hit || bottom_hit {
        WallContact::Bounce
    } else {
        WallContact::None
    }
}
