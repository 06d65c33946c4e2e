//! Canvas Pong headless entry point
//!
//! Drives a session with the autopilot on both paddles and prints the
//! final snapshot as JSON. Usage: `canvas-pong [ticks]`.

use std::process::ExitCode;

use canvas_pong::GameConfig;
use canvas_pong::sim::{Session, TickInput, tick};

const DEFAULT_TICKS: u64 = 3600;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Canvas Pong (headless) starting...");

    let ticks = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(n) => n,
            Err(e) => {
                log::error!("Invalid tick count {:?}: {}", arg, e);
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_TICKS,
    };

    let mut session = match Session::new(GameConfig::default()) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Bad configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    session.start_game();

    let play = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let serve = TickInput {
        start: true,
        ..play.clone()
    };

    // Serve on the first frame and after every point
    let mut input = &serve;
    for _ in 0..ticks {
        let end = tick(&mut session, input);
        input = if end.is_some() { &serve } else { &play };
    }

    let score = session.state.score;
    log::info!("Finished after {} ticks, score {} - {}", ticks, score.0[0], score.0[1]);

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to encode snapshot: {}", e);
            ExitCode::FAILURE
        }
    }
}
