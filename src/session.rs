//! Game session facade
//!
//! Owns the complete game state, the input controller and both outbound
//! boundaries. The host feeds it key events and clock ticks; everything
//! else happens in here. All mutation goes through `advance()` and
//! `countdown_second()` on the caller's thread, so there is exactly one
//! writer for the session's state.

use crate::consts::*;
use crate::notify::{NoticeKind, Notifier};
use crate::report::{ScoreReport, ScoreSink};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GamePhase, GameState, InputController, Key, Outcome};

pub struct GameSession<S: ScoreSink, N: Notifier> {
    seed: u64,
    state: GameState,
    input: InputController,
    settings: Settings,
    score_sink: S,
    notifier: N,
}

impl<S: ScoreSink, N: Notifier> GameSession<S, N> {
    pub fn new(seed: u64, settings: Settings, score_sink: S, notifier: N) -> Self {
        Self {
            seed,
            state: GameState::new(seed),
            input: InputController::new(),
            settings,
            score_sink,
            notifier,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score_sink(&self) -> &S {
        &self.score_sink
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Fresh state, forest scene, countdown at 180 - and playing.
    pub fn start_game(&mut self) {
        self.state = GameState::new(self.seed);
        self.state.phase = GamePhase::Playing;
        self.input.reset();
        log::info!("session started (seed {})", self.seed);
    }

    /// Same reset as `start_game`, but the session stays idle.
    pub fn reset_game(&mut self) {
        self.state = GameState::new(self.seed);
        self.input.reset();
        log::info!("session reset");
    }

    /// Keyboard events are ignored outright unless the game is live.
    pub fn key_down(&mut self, key: Key) {
        if self.state.phase.is_playing() {
            self.input.key_down(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if self.state.phase.is_playing() {
            self.input.key_up(key);
        }
    }

    /// Run one simulation tick.
    pub fn advance(&mut self) {
        if !self.state.phase.is_playing() {
            return;
        }
        let intent = self.input.sample();
        let events = sim::tick(&mut self.state, intent);
        self.trim_particles();
        self.dispatch(events);
    }

    /// Run one second of the countdown.
    pub fn countdown_second(&mut self) {
        let events = sim::countdown(&mut self.state);
        self.dispatch(events);
    }

    fn trim_particles(&mut self) {
        let cap = self.settings.max_particles();
        if self.state.particles.len() > cap {
            let excess = self.state.particles.len() - cap;
            self.state.particles.drain(0..excess);
        }
    }

    fn dispatch(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::Pickup { kind, points } => {
                    self.notifier.notify(
                        NoticeKind::Success,
                        &format!("You found {}! +{} points", kind.label(), points),
                    );
                }
                GameEvent::ObstacleHit { kind, lives_left } => {
                    if lives_left > 0 {
                        self.notifier.notify(
                            NoticeKind::Warning,
                            &format!("Ouch, a {}! {} lives left", kind.label(), lives_left),
                        );
                    }
                }
                GameEvent::LevelCleared { scene } => {
                    self.notifier.notify(
                        NoticeKind::Success,
                        &format!("The {} is clean! On to the next level...", scene.label()),
                    );
                }
                GameEvent::SceneLoaded { scene, level } => {
                    log::info!("level {} loaded: {}", level, scene.label());
                }
                GameEvent::Finished { outcome } => self.finish(outcome),
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        let state = &self.state;
        match outcome {
            Outcome::Won => self.notifier.notify(
                NoticeKind::Success,
                &format!("You saved the planet! Final score: {}", state.score),
            ),
            Outcome::LivesExhausted => self
                .notifier
                .notify(NoticeKind::Error, "Game over! The planet needs you again."),
            Outcome::TimedOut => self
                .notifier
                .notify(NoticeKind::Warning, "Time's up!"),
        }

        let report = ScoreReport {
            score: state.score,
            elapsed_seconds: state.elapsed_seconds(),
            completed: state.level >= MAX_LEVEL,
        };
        log::info!(
            "session finished: {:?}, score {}, {} s",
            outcome,
            report.score,
            report.elapsed_seconds
        );
        // Fire-and-forget: the terminal state is already committed
        if let Err(err) = self.score_sink.submit(&report) {
            log::warn!("{err}");
        }
    }
}
