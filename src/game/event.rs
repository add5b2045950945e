use super::notification::Notification;
use super::order::{Attribute, CakeOrder};
use super::stage::Stage;

/// Player intent forwarded from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select(Attribute),
    Advance,
    Restart,
}

/// What a controller operation changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    SessionStarted { target: CakeOrder, seconds: u32 },
    AttributeApplied(Attribute),
    AttributeRejected { attribute: Attribute, stage: Stage },
    StageChanged(Stage),
    OrderCompleted { cake: CakeOrder, target: CakeOrder, matched: bool },
    ScoreChanged(u32),
    TargetChanged(CakeOrder),
    CakeReset,
    TimeChanged(u32),
    SessionEnded { score: u32 },
    Notify(Notification),
}

impl GameEvent {
    /// Notifications carried by a batch of events, in order
    pub fn notifications(events: &[GameEvent]) -> impl Iterator<Item = &Notification> {
        events.iter().filter_map(|event| match event {
            GameEvent::Notify(note) => Some(note),
            _ => None,
        })
    }
}
