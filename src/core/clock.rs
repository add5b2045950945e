use std::collections::VecDeque;
use std::time::Instant;

/// Source of elapsed time between updates, in seconds
pub trait Clock {
    /// Get delta time since last tick and advance clock
    fn tick(&mut self) -> f32;

    /// Forget time elapsed since the last tick
    fn reset(&mut self);
}

/// Wall clock backed by a monotonic `Instant`
#[derive(Debug)]
pub struct SystemClock {
    last_tick: Instant,
}

impl SystemClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

/// Scripted clock for deterministic tests
///
/// Yields queued deltas in order, then `fallback` forever.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    queued: VecDeque<f32>,
    fallback: f32,
}

impl ManualClock {
    /// Clock that always reports the same step
    pub fn fixed(step: f32) -> Self {
        Self {
            queued: VecDeque::new(),
            fallback: step,
        }
    }

    /// Queue a delta to be returned by a later tick
    pub fn push(&mut self, delta: f32) {
        self.queued.push_back(delta);
    }
}

impl Clock for ManualClock {
    fn tick(&mut self) -> f32 {
        self.queued.pop_front().unwrap_or(self.fallback)
    }

    fn reset(&mut self) {
        self.queued.clear();
    }
}
