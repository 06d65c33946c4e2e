//! Match/round state machine
//!
//! `Menu` -> `Idle` (in game, waiting for the start input) -> `Playing`.
//! A round ends when the ball leaves through a side wall; the point goes to
//! the opposite side and the match drops back to `Idle`. Score survives
//! rounds and only resets with a new session.

use serde::{Deserialize, Serialize};

use super::ball::Ball;

/// Side of the field (0 = left/player, 1 = right/computer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Points per side, indexed by `Side::index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score(pub [u32; 2]);

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        self.0[side.index()]
    }

    pub fn award(&mut self, side: Side) {
        self.0[side.index()] += 1;
    }
}

/// Exactly one of these is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Menu,
    /// Game active, waiting for the start input
    Idle,
    Playing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub mode: Mode,
    pub score: Score,
    /// Set once the start input has launched the current round
    start_latched: bool,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Menu,
            score: Score::default(),
            start_latched: false,
        }
    }

    pub fn is_menu(&self) -> bool {
        self.mode == Mode::Menu
    }

    /// In game, playing or not
    pub fn is_game(&self) -> bool {
        self.mode != Mode::Menu
    }

    pub fn is_playing(&self) -> bool {
        self.mode == Mode::Playing
    }

    pub fn start_latched(&self) -> bool {
        self.start_latched
    }

    /// Any -> Menu. No-op if already there.
    pub fn start_menu(&mut self) {
        if self.mode != Mode::Menu {
            self.mode = Mode::Menu;
            self.start_latched = false;
        }
    }

    /// Any -> Idle. No-op if a game is already running.
    pub fn start_game(&mut self) {
        if self.mode == Mode::Menu {
            self.mode = Mode::Idle;
        }
    }

    /// Idle -> Playing. Returns whether the transition happened.
    pub fn start_playing(&mut self) -> bool {
        if self.mode == Mode::Idle {
            self.mode = Mode::Playing;
            true
        } else {
            false
        }
    }

    /// Start input: serves once per round while idle
    pub fn space_to_start(&mut self) -> bool {
        if self.start_latched {
            return false;
        }
        let started = self.start_playing();
        if started {
            self.start_latched = true;
        }
        started
    }

    /// Score the round for `winner`, re-serve the ball and wait for start
    pub fn end_of_round(&mut self, winner: Side, ball: &mut Ball) {
        self.score.award(winner);
        ball.reset();
        self.start_latched = false;
        self.mode = Mode::Idle;
        log::info!(
            "Round over: {:?} scores ({} - {})",
            winner,
            self.score.get(Side::Left),
            self.score.get(Side::Right)
        );
    }
}
