use crate::core::Countdown;
use crate::game::Notification;

/// Transient notification slot; a newer message replaces the current one
#[derive(Debug, Clone)]
pub struct NotificationBanner {
    current: Option<Notification>,
    timer: Countdown,
}

impl NotificationBanner {
    pub fn new() -> Self {
        Self {
            current: None,
            timer: Countdown::new(0.0),
        }
    }

    pub fn show(&mut self, notification: Notification) {
        self.timer = Countdown::new(notification.duration.as_secs_f32());
        self.timer.start();
        self.current = Some(notification);
    }

    /// Hide the message once its duration has passed
    pub fn update(&mut self, delta: f32) {
        if self.timer.tick(delta) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Opacity of the current message; fades out over the last quarter of its time
    pub fn opacity(&self) -> f32 {
        ((1.0 - self.timer.progress()) * 4.0).clamp(0.0, 1.0)
    }
}

impl Default for NotificationBanner {
    fn default() -> Self {
        Self::new()
    }
}
