use log::debug;

use super::event::{Action, GameEvent};
use super::order::Attribute;
use super::session::GameSession;
use super::target::OrderSource;
use crate::config::GameConfig;
use crate::core::{Clock, Countdown, FixedHz};

/// Game state controller - owns the session, its timers and the order source
///
/// Time only moves through `update`, so tests drive it with exact deltas.
pub struct SessionDriver<S: OrderSource> {
    session: GameSession,
    orders: S,
    countdown: FixedHz,
    cake_reset: Countdown,
}

impl<S: OrderSource> SessionDriver<S> {
    /// Create driver with a session already running
    pub fn new(config: GameConfig, mut orders: S) -> Self {
        let countdown = FixedHz::new(config.tick_hz);
        let cake_reset = Countdown::new(config.reset_delay_secs());
        let session = GameSession::start(config, &mut orders);

        Self {
            session,
            orders,
            countdown,
            cake_reset,
        }
    }

    /// Begin a new session, replacing the running countdown
    pub fn start_session(&mut self) -> Vec<GameEvent> {
        self.countdown.restart();
        self.cake_reset.cancel();
        self.session.restart(&mut self.orders)
    }

    pub fn set_attribute(&mut self, attribute: Attribute) -> Vec<GameEvent> {
        self.session.set_attribute(attribute)
    }

    /// Advance the cake; a finished cake schedules its own reset
    pub fn advance_stage(&mut self) -> Vec<GameEvent> {
        let events = self.session.advance_stage(&mut self.orders);

        let completed = events
            .iter()
            .any(|e| matches!(e, GameEvent::OrderCompleted { .. }));
        if completed {
            debug!("Cake finished, reset scheduled");
            self.cake_reset.start();
        }

        events
    }

    /// Route a presentation action to its operation
    pub fn apply(&mut self, action: Action) -> Vec<GameEvent> {
        match action {
            Action::Select(attribute) => self.set_attribute(attribute),
            Action::Advance => self.advance_stage(),
            Action::Restart => self.start_session(),
        }
    }

    /// Feed elapsed seconds to the countdown and the pending cake reset
    pub fn update(&mut self, delta: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();

        let mut pending = delta;
        while self.countdown.tick(pending) {
            pending = 0.0;
            events.extend(self.session.tick());

            if self.session.is_over() {
                self.countdown.stop();
            }
        }

        if self.cake_reset.tick(delta) {
            events.extend(self.session.reset_cake());
        }

        events
    }

    /// Pull the next delta from a clock and update
    pub fn update_from(&mut self, clock: &mut dyn Clock) -> Vec<GameEvent> {
        let delta = clock.tick();
        self.update(delta)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn countdown_running(&self) -> bool {
        self.countdown.is_running()
    }

    pub fn reset_pending(&self) -> bool {
        self.cake_reset.is_active()
    }
}
