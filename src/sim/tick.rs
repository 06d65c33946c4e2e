//! Per-frame simulation tick
//!
//! The session owns every piece of mutable state and is driven by an
//! external frame loop: `tick` once, then render from `snapshot`.
//! Ordering inside a tick is fixed: controllers, then the ball, then the
//! round state reacts to any exit the ball reported.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, RoundEnd, TrailMark};
use super::controller::{Computer, PaddleInput, Player, pursue};
use super::state::{Mode, RoundState, Score, Side};
use crate::config::{ConfigError, Field, GameConfig};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys for the left paddle
    pub paddle: PaddleInput,
    /// Start/serve pressed this tick (debounced by the input provider)
    pub start: bool,
    /// Demo mode - the left paddle is driven by the pursuit controller
    pub autopilot: bool,
}

/// One running game
#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    pub player: Player,
    pub computer: Computer,
    pub ball: Ball,
    pub state: RoundState,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Session {
    /// Validate the configuration and lay out a fresh game in the menu
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "Session started on a {}x{} field",
            config.field.width,
            config.field.height
        );
        Ok(Self {
            player: Player::new(&config),
            computer: Computer::new(&config),
            ball: Ball::from_config(&config),
            state: RoundState::new(),
            time_ticks: 0,
            config,
        })
    }

    #[inline]
    pub fn field(&self) -> &Field {
        &self.config.field
    }

    /// Leave the menu and wait for the serve
    pub fn start_game(&mut self) {
        self.state.start_game();
    }

    pub fn start_menu(&mut self) {
        self.state.start_menu();
    }

    /// Score a finished round and reset the ball
    pub fn end_of_round(&mut self, end: RoundEnd) {
        self.state.end_of_round(end.winner, &mut self.ball);
    }

    pub fn snapshot(&self) -> Snapshot {
        let rect = |pos: Vec2, width: f32, height: f32| PaddleRect {
            pos,
            size: Vec2::new(width, height),
        };
        let left = &self.player.paddle;
        let right = &self.computer.paddle;

        Snapshot {
            field: self.config.field,
            paddles: [
                rect(left.pos, left.width, left.height),
                rect(right.pos, right.width, right.height),
            ],
            ball_pos: self.ball.pos,
            ball_radius: self.ball.radius,
            trail: self.ball.trail_marks(),
            mode: self.state.mode,
            score: self.state.score,
            time_ticks: self.time_ticks,
        }
    }
}

/// Advance the session by one frame. Returns the round end if one occurred.
pub fn tick(session: &mut Session, input: &TickInput) -> Option<RoundEnd> {
    if input.start {
        session.state.space_to_start();
    }

    if !session.state.is_playing() {
        return None;
    }

    session.time_ticks += 1;
    let field = session.config.field;

    // 1. Controllers
    if input.autopilot {
        pursue(&mut session.player.paddle, Side::Left, &session.ball, &field);
    } else {
        session.player.update(&input.paddle, &field);
    }
    session.computer.update(&session.ball, &field);

    // 2. Ball
    let end = session
        .ball
        .update(&session.player.paddle, &session.computer.paddle, &field);

    // 3. Round state
    if let Some(end) = end {
        session.end_of_round(end);
    }
    end
}

/// Paddle rectangle for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleRect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub field: Field,
    /// Left, right
    pub paddles: [PaddleRect; 2],
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub trail: Vec<TrailMark>,
    pub mode: Mode,
    pub score: Score,
    pub time_ticks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_session() -> Session {
        let mut session = Session::new(GameConfig::default()).unwrap();
        session.start_game();
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut session, &start);
        assert_eq!(session.state.mode, Mode::Playing);
        session
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GameConfig::default();
        config.ball.speed = 0.0;
        assert!(Session::new(config).is_err());
    }

    #[test]
    fn test_unreachable_paddle_or_bad_serve_rejected() {
        let mut config = GameConfig::default();
        config.paddle.margin = 80.0;
        assert!(matches!(
            Session::new(config),
            Err(ConfigError::PaddleOutsideZone { .. })
        ));

        let mut config = GameConfig::default();
        config.ball.serve_angle = f32::NAN;
        assert!(matches!(
            Session::new(config),
            Err(ConfigError::ServeAngleNotFinite { .. })
        ));
    }

    #[test]
    fn test_no_simulation_outside_playing() {
        let mut session = Session::new(GameConfig::default()).unwrap();
        let before = session.ball.pos;
        let input = TickInput {
            paddle: PaddleInput { up: true, down: false },
            ..Default::default()
        };

        // Menu: start does nothing until a game is started
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut session, &start);
        tick(&mut session, &input);
        assert_eq!(session.state.mode, Mode::Menu);
        assert_eq!(session.ball.pos, before);
        assert_eq!(session.time_ticks, 0);

        session.start_game();
        tick(&mut session, &input);
        assert_eq!(session.state.mode, Mode::Idle);
        assert_eq!(session.ball.pos, before);
    }

    #[test]
    fn test_start_serves_and_moves() {
        let session = playing_session();
        assert_eq!(session.time_ticks, 1);
        assert!(session.ball.pos.x > session.config.serve_pos().x);
        assert_eq!(session.ball.trail.len(), 1);
    }

    #[test]
    fn test_player_input_moves_left_paddle() {
        let mut session = playing_session();
        let y = session.player.paddle.pos.y;
        let input = TickInput {
            paddle: PaddleInput { up: false, down: true },
            ..Default::default()
        };
        tick(&mut session, &input);
        assert_eq!(session.player.paddle.pos.y, y + session.config.paddle.speed);
    }

    #[test]
    fn test_left_exit_ends_round_once() {
        let mut session = playing_session();
        session.ball.pos = Vec2::new(-session.ball.radius - 0.5, 300.0);
        session.ball.set_angle(190.0);
        assert!(session.ball.direction().left());

        let end = tick(&mut session, &TickInput::default());

        assert_eq!(end, Some(RoundEnd { winner: Side::Right }));
        assert_eq!(session.state.score, Score([0, 1]));
        assert_eq!(session.state.mode, Mode::Idle);
        assert_eq!(session.ball.pos, session.config.serve_pos());
        assert_eq!(session.ball.angle, session.config.ball.serve_angle);

        // Idle until the next serve: no second award
        assert_eq!(tick(&mut session, &TickInput::default()), None);
        assert_eq!(session.state.score, Score([0, 1]));
    }

    #[test]
    fn test_score_persists_across_rounds() {
        let mut session = playing_session();
        let serve = TickInput {
            start: true,
            ..Default::default()
        };

        for expected in 1..=3u32 {
            session.ball.pos = Vec2::new(session.field().width + 20.0, 200.0);
            session.ball.set_angle(0.0);
            tick(&mut session, &TickInput::default());
            assert_eq!(session.state.score.get(Side::Left), expected);
            tick(&mut session, &serve);
            assert!(session.state.is_playing());
        }
    }

    #[test]
    fn test_rally_keeps_ball_in_field() {
        let mut session = playing_session();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };

        let serve = TickInput {
            start: true,
            ..input.clone()
        };

        for _ in 0..5000 {
            if tick(&mut session, &input).is_some() {
                tick(&mut session, &serve);
            }
            let ball = &session.ball;
            assert!((0.0..360.0).contains(&ball.angle));
            assert!(ball.pos.y > -20.0 && ball.pos.y < session.field().height + 20.0);
            let paddle = &session.player.paddle;
            assert!(paddle.top() >= 0.0 && paddle.bottom() <= session.field().height);
        }
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = playing_session();
        for _ in 0..10 {
            tick(&mut session, &TickInput::default());
        }

        let snap = session.snapshot();

        assert_eq!(snap.ball_pos, session.ball.pos);
        assert_eq!(snap.trail.len(), 10);
        assert_eq!(snap.paddles[0].pos, session.player.paddle.pos);
        assert_eq!(snap.paddles[1].size, Vec2::new(15.0, 70.0));
        assert_eq!(snap.mode, Mode::Playing);
        assert_eq!(snap.time_ticks, 11);

        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"mode\":\"Playing\""));
    }
}
