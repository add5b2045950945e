use std::time::Duration;

use crate::config::GameConfig;

/// Transient message for the player, shown for `duration`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Mandatory field missing when advancing
    Warning,
    /// Finished cake matched the order
    Matched,
    /// Finished cake differed from the order
    Mismatched,
    /// Clock ran out
    Summary,
}

impl Notification {
    pub fn missing_shape(config: &GameConfig) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: "Pick a shape!".to_string(),
            duration: Duration::from_millis(config.warning_ms),
        }
    }

    pub fn missing_batter(config: &GameConfig) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: "Pick a batter!".to_string(),
            duration: Duration::from_millis(config.warning_ms),
        }
    }

    pub fn matched(config: &GameConfig) -> Self {
        Self {
            kind: NotificationKind::Matched,
            message: format!("Perfect cake! +{} points", config.points_per_match),
            duration: Duration::from_millis(config.match_feedback_ms),
        }
    }

    pub fn mismatched(config: &GameConfig) -> Self {
        Self {
            kind: NotificationKind::Mismatched,
            message: "That doesn't match the order. Try again.".to_string(),
            duration: Duration::from_millis(config.match_feedback_ms),
        }
    }

    pub fn summary(config: &GameConfig, score: u32) -> Self {
        Self {
            kind: NotificationKind::Summary,
            message: format!("Time's up! Your score: {}", score),
            duration: Duration::from_millis(config.summary_ms),
        }
    }
}
