//! Fixed-period tick driver
//!
//! Hosts call `advance` once per frame with the real elapsed time; the clock
//! turns that into a whole number of simulation ticks.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, TICK_PERIOD};

#[derive(Debug, Clone)]
pub struct SimulationClock {
    period: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(TICK_PERIOD, MAX_SUBSTEPS)
    }
}

impl SimulationClock {
    pub fn new(period: f32, max_substeps: u32) -> Self {
        Self {
            period,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Time banked toward the next tick
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    /// Bank `frame_dt` seconds and run `on_tick` once per whole period.
    ///
    /// At most `max_substeps` ticks run per call; backlog beyond that is
    /// dropped. Returns the number of ticks run.
    pub fn advance<F: FnMut()>(&mut self, frame_dt: f32, mut on_tick: F) -> u32 {
        let frame_dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= self.period && substeps < self.max_substeps {
            on_tick();
            self.accumulator -= self.period;
            substeps += 1;
        }

        if self.accumulator >= self.period {
            log::debug!(
                "Clock behind by {:.1} ms, dropping backlog",
                self.accumulator * 1000.0
            );
            self.accumulator %= self.period;
        }

        substeps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
