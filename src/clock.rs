//! Game clock: fixed-timestep scheduling for the session
//!
//! Two periodic cadences share one monotonic time source: the ~16 ms
//! simulation tick and the 1 s countdown. The host loop calls `pump()`
//! and applies the returned tick counts to the session on its own
//! thread, so every state mutation stays on a single queue. Both
//! cadences stop and reset together.

use std::time::Instant;

use crate::consts::{COUNTDOWN_DT, MAX_SUBSTEPS, SIM_DT};

/// How many steps of each cadence elapsed since the last pump
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTicks {
    pub sim: u32,
    pub seconds: u32,
}

#[derive(Debug)]
pub struct GameClock {
    last: Option<Instant>,
    sim_accum: f32,
    countdown_accum: f32,
    running: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            last: None,
            sim_accum: 0.0,
            countdown_accum: 0.0,
            running: false,
        }
    }

    /// Begin (or resume) ticking. Time elapsed while stopped is not
    /// credited to either accumulator.
    pub fn start(&mut self) {
        self.running = true;
        self.last = None;
    }

    /// Stop both cadences and drop any partial accumulation.
    pub fn stop(&mut self) {
        self.running = false;
        self.last = None;
        self.sim_accum = 0.0;
        self.countdown_accum = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Read the wall clock and convert elapsed time into tick counts.
    pub fn pump(&mut self) -> ClockTicks {
        if !self.running {
            return ClockTicks::default();
        }
        let now = Instant::now();
        let dt = match self.last {
            Some(last) => (now - last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        self.accumulate(dt)
    }

    /// Credit `dt` seconds and drain whole steps. Sim steps are capped
    /// per call so a long stall cannot spiral; the countdown drains
    /// fully since it only moves once per second.
    pub fn accumulate(&mut self, dt: f32) -> ClockTicks {
        if !self.running {
            return ClockTicks::default();
        }
        let dt = dt.clamp(0.0, 0.1);
        self.sim_accum += dt;
        self.countdown_accum += dt;

        let mut ticks = ClockTicks::default();
        while self.sim_accum >= SIM_DT && ticks.sim < MAX_SUBSTEPS {
            self.sim_accum -= SIM_DT;
            ticks.sim += 1;
        }
        while self.countdown_accum >= COUNTDOWN_DT {
            self.countdown_accum -= COUNTDOWN_DT;
            ticks.seconds += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_clock_yields_nothing() {
        let mut clock = GameClock::new();
        assert_eq!(clock.accumulate(1.0), ClockTicks::default());
        assert_eq!(clock.pump(), ClockTicks::default());
    }

    #[test]
    fn sixteen_ms_slices_into_one_tick() {
        let mut clock = GameClock::new();
        clock.start();
        assert_eq!(clock.accumulate(SIM_DT).sim, 1);
        assert_eq!(clock.accumulate(SIM_DT / 2.0).sim, 0);
        assert_eq!(clock.accumulate(SIM_DT / 2.0).sim, 1);
    }

    #[test]
    fn substeps_are_capped() {
        let mut clock = GameClock::new();
        clock.start();
        // A two-second stall is clamped to 100 ms of credit, and even a
        // large credit drains at most MAX_SUBSTEPS sim ticks per call
        let ticks = clock.accumulate(2.0);
        assert!(ticks.sim <= MAX_SUBSTEPS);
    }

    #[test]
    fn countdown_fires_once_per_second() {
        let mut clock = GameClock::new();
        clock.start();
        let mut seconds = 0;
        for _ in 0..25 {
            seconds += clock.accumulate(0.05).seconds;
        }
        assert_eq!(seconds, 1);
    }

    #[test]
    fn stop_discards_partial_accumulation() {
        let mut clock = GameClock::new();
        clock.start();
        clock.accumulate(0.015);
        clock.stop();
        clock.start();
        assert_eq!(clock.accumulate(0.001).sim, 0);
    }
}
