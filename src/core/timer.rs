/// Self-contained timers - accumulate delta time and decide when to fire
/// Nothing here reads the wall clock; callers feed elapsed seconds

/// Fixed rate timer - fires at specific Hz while running
#[derive(Debug, Clone, Copy)]
pub struct FixedHz {
    pub interval: f32,
    pub accumulator: f32,
    running: bool,
}

impl FixedHz {
    /// Create running timer that fires at given frequency
    pub fn new(hz: f32) -> Self {
        Self {
            interval: 1.0 / hz,
            accumulator: 0.0,
            running: true,
        }
    }

    /// Update with delta, returns true if should fire
    ///
    /// At most one fire per call. Pass 0.0 to drain the rest of a large delta.
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.running {
            return false;
        }

        self.accumulator += delta;

        if self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            true
        } else {
            false
        }
    }

    /// Drop accumulated time and start firing again
    pub fn restart(&mut self) {
        self.accumulator = 0.0;
        self.running = true;
    }

    /// Stop firing; accumulated time is discarded
    pub fn stop(&mut self) {
        self.accumulator = 0.0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Countdown timer - fires once after duration
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    duration: f32,
    elapsed: f32,
    active: bool,
}

impl Countdown {
    /// Create inactive countdown
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Start countdown, restarting it if already active
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Deactivate without firing
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Tick with delta, returns true if completed
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.active {
            return false;
        }

        self.elapsed += delta;

        if self.elapsed >= self.duration {
            self.active = false;
            true
        } else {
            false
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Get progress [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }
}
