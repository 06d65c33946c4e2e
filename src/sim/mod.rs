//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` per frame, no wall-clock time
//! - Fixed per-tick ordering: controllers, ball, round state
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod controller;
pub mod direction;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, RoundEnd, TrailMark};
pub use collision::WallContact;
pub use controller::{Computer, PaddleInput, Player, pursue};
pub use direction::{Direction, Horizontal, Vertical};
pub use paddle::Paddle;
pub use state::{Mode, RoundState, Score, Side};
pub use tick::{PaddleRect, Session, Snapshot, TickInput, tick};
