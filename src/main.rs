//! Eco Adventure entry point
//!
//! Headless demo driver: feeds the game clock simulated 16 ms slices so
//! the session runs its real cadences (sim ticks plus countdown seconds)
//! at full speed, then prints the final score report as JSON. Useful for
//! smoke-testing the simulation without a presentation layer.

use eco_adventure::clock::GameClock;
use eco_adventure::consts::*;
use eco_adventure::notify::LogNotifier;
use eco_adventure::render;
use eco_adventure::report::{ReportError, ScoreReport, ScoreSink};
use eco_adventure::sim::Key;
use eco_adventure::{GameSession, Settings};

/// Prints the final report to stdout as JSON
#[derive(Debug, Default)]
struct JsonStdoutSink;

impl ScoreSink for JsonStdoutSink {
    fn submit(&mut self, report: &ScoreReport) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| ReportError(e.to_string()))?;
        println!("{json}");
        Ok(())
    }
}

fn main() {
    env_logger::init();
    log::info!("Eco Adventure (headless demo) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xEC0);

    let mut session = GameSession::new(seed, Settings::default(), JsonStdoutSink, LogNotifier);
    let mut clock = GameClock::new();
    session.start_game();
    clock.start();

    // Scripted autoplay: run right, hop periodically. Not a winning
    // strategy - the demo usually ends on the countdown.
    session.key_down(Key::Right);
    let mut ticks: u64 = 0;
    while session.state().phase.is_playing() {
        let elapsed = clock.accumulate(SIM_DT);
        for _ in 0..elapsed.sim {
            if ticks % 40 == 0 {
                session.key_down(Key::Space);
            }
            session.advance();
            ticks += 1;
        }
        for _ in 0..elapsed.seconds {
            session.countdown_second();
        }
    }
    clock.stop();

    let frame = render::frame(session.state());
    log::info!(
        "demo finished after {} ticks: score {}, level {}, {} rects in final frame",
        ticks,
        frame.hud.score,
        frame.hud.level,
        frame.rects.len()
    );
}
