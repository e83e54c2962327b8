//! Frame clock for the scheduler.
//!
//! Wall time comes from `instant::Instant` so the same clock works on native
//! and wasm hosts; `sample_at` lets a host or test harness inject time
//! directly.

use instant::Instant;

/// Single per-engine clock: accumulated simulation time gated by a running
/// flag. Sampling (and therefore the frame delta) continues while paused;
/// only the elapsed accumulator freezes, so resuming continues flights from
/// where they stopped.
#[derive(Debug)]
pub struct SimulationClock {
    start: Instant,
    last_sample: f64,
    elapsed: f64,
    running: bool,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last_sample: 0.0,
            elapsed: 0.0,
            running: true,
        }
    }

    /// Simulation time accumulated while running, seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Sample the wall clock. Returns the frame delta in seconds.
    pub fn sample(&mut self) -> f64 {
        let now = self.start.elapsed().as_secs_f64();
        self.sample_at(now)
    }

    /// Sample at an injected wall time. Non-monotonic input clamps the delta
    /// to zero rather than running flights backwards.
    pub fn sample_at(&mut self, now: f64) -> f64 {
        let dt = (now - self.last_sample).max(0.0);
        self.last_sample = now;
        if self.running {
            self.elapsed += dt;
        }
        dt
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}
