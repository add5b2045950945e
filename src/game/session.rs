use log::{debug, info};

use super::event::GameEvent;
use super::notification::Notification;
use super::order::{Attribute, CakeOrder};
use super::stage::Stage;
use super::target::OrderSource;
use crate::config::GameConfig;

/// Authoritative state of one timed play-through
///
/// All mutation goes through the transition methods below; each returns the
/// events it produced. Timers live in `SessionDriver`, which calls `tick` and
/// `reset_cake` when they fire.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    config: GameConfig,
    score: u32,
    time_remaining: u32,
    stage: Stage,
    cake: CakeOrder,
    target: CakeOrder,
}

impl GameSession {
    /// Fresh session with a new target
    pub fn start(config: GameConfig, orders: &mut dyn OrderSource) -> Self {
        let target = orders.next_order();
        info!(
            "Session started: {}s, target {:?}",
            config.session_seconds, target
        );

        Self {
            score: 0,
            time_remaining: config.session_seconds,
            stage: Stage::Shape,
            cake: CakeOrder::new(),
            target,
            config,
        }
    }

    /// Throw away all progress and begin again
    pub fn restart(&mut self, orders: &mut dyn OrderSource) -> Vec<GameEvent> {
        *self = Self::start(self.config.clone(), orders);

        vec![
            GameEvent::SessionStarted {
                target: self.target,
                seconds: self.time_remaining,
            },
            GameEvent::ScoreChanged(0),
            GameEvent::TimeChanged(self.time_remaining),
            GameEvent::StageChanged(self.stage),
            GameEvent::CakeReset,
        ]
    }

    /// Store a field if the current stage edits it; otherwise ignore
    pub fn set_attribute(&mut self, attribute: Attribute) -> Vec<GameEvent> {
        let editable = self.stage.edits() == Some(attribute.kind());
        let locked = self.config.lock_attributes_after_timeout && self.is_over();

        if !editable || locked {
            debug!("Ignoring {:?} at stage {:?}", attribute, self.stage);
            return vec![GameEvent::AttributeRejected {
                attribute,
                stage: self.stage,
            }];
        }

        self.cake.apply(attribute);
        vec![GameEvent::AttributeApplied(attribute)]
    }

    /// Move the cake along the belt
    ///
    /// Reaching `Finish` judges the cake. The stage stays at `Finish` until
    /// `reset_cake` runs; advancing meanwhile does nothing.
    pub fn advance_stage(&mut self, orders: &mut dyn OrderSource) -> Vec<GameEvent> {
        if self.is_over() {
            debug!("Advance ignored, session over");
            return Vec::new();
        }

        if !self.stage.is_satisfied_by(&self.cake) {
            let note = match self.stage {
                Stage::Batter => Notification::missing_batter(&self.config),
                _ => Notification::missing_shape(&self.config),
            };
            return vec![GameEvent::Notify(note)];
        }

        let Some(next) = self.stage.next() else {
            debug!("Advance ignored, cake awaiting reset");
            return Vec::new();
        };

        self.stage = next;
        let mut events = vec![GameEvent::StageChanged(next)];

        if next == Stage::Finish {
            events.extend(self.judge(orders));
        }

        events
    }

    fn judge(&mut self, orders: &mut dyn OrderSource) -> Vec<GameEvent> {
        let matched = self.cake.matches(&self.target);
        let mut events = vec![GameEvent::OrderCompleted {
            cake: self.cake,
            target: self.target,
            matched,
        }];

        if matched {
            self.score = self.score.saturating_add(self.config.points_per_match);
            self.target = orders.next_order();
            info!("Order matched, score {}", self.score);

            events.push(GameEvent::Notify(Notification::matched(&self.config)));
            events.push(GameEvent::ScoreChanged(self.score));
            events.push(GameEvent::TargetChanged(self.target));
        } else {
            info!("Order missed: made {:?}, wanted {:?}", self.cake, self.target);
            events.push(GameEvent::Notify(Notification::mismatched(&self.config)));
        }

        events
    }

    /// Put an empty cake back at the start of the belt
    pub fn reset_cake(&mut self) -> Vec<GameEvent> {
        self.cake = CakeOrder::new();
        self.stage = Stage::Shape;
        vec![GameEvent::CakeReset, GameEvent::StageChanged(Stage::Shape)]
    }

    /// One countdown step; ends the session at zero
    pub fn tick(&mut self) -> Vec<GameEvent> {
        if self.is_over() {
            return Vec::new();
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        let mut events = vec![GameEvent::TimeChanged(self.time_remaining)];

        if self.is_over() {
            info!("Session ended with score {}", self.score);
            events.push(GameEvent::SessionEnded { score: self.score });
            events.push(GameEvent::Notify(Notification::summary(
                &self.config,
                self.score,
            )));
        }

        events
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn cake(&self) -> &CakeOrder {
        &self.cake
    }

    pub fn target(&self) -> &CakeOrder {
        &self.target
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_over(&self) -> bool {
        self.time_remaining == 0
    }

    /// Cake finished and waiting to be cleared
    pub fn awaiting_reset(&self) -> bool {
        self.stage == Stage::Finish
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::order::{AttributeKind, Batter, Icing, Shape, Topping};
    use crate::game::target::ScriptedOrders;
    use crate::game::notification::NotificationKind;

    fn target() -> CakeOrder {
        CakeOrder::with(Shape::Square, Batter::Vanilla, None, Some(Topping::Cherry))
    }

    fn session() -> (GameSession, ScriptedOrders) {
        let next = CakeOrder::with(Shape::Heart, Batter::Strawberry, Some(Icing::Berry), None);
        let mut orders = ScriptedOrders::new(vec![target(), next]);
        let session = GameSession::start(GameConfig::default(), &mut orders);
        (session, orders)
    }

    #[test]
    fn test_starts_with_classic_values() {
        let (session, _) = session();
        assert_eq!(session.score(), 0);
        assert_eq!(session.time_remaining(), 60);
        assert_eq!(session.stage(), Stage::Shape);
        assert_eq!(*session.cake(), CakeOrder::new());
        assert_eq!(*session.target(), target());
    }

    #[test]
    fn test_wrong_stage_attribute_is_ignored() {
        let (mut session, _) = session();
        let events = session.set_attribute(Attribute::Batter(Batter::Chocolate));

        assert_eq!(*session.cake(), CakeOrder::new());
        assert!(matches!(events[0], GameEvent::AttributeRejected { stage: Stage::Shape, .. }));
    }

    #[test]
    fn test_attribute_can_be_changed_within_stage() {
        let (mut session, _) = session();
        session.set_attribute(Attribute::Shape(Shape::Circle));
        session.set_attribute(Attribute::Shape(Shape::Heart));
        assert_eq!(session.cake().shape, Some(Shape::Heart));
    }

    #[test]
    fn test_advance_without_shape_warns() {
        let (mut session, mut orders) = session();
        let events = session.advance_stage(&mut orders);

        assert_eq!(session.stage(), Stage::Shape);
        let notes: Vec<_> = GameEvent::notifications(&events).collect();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Warning);
        assert!(notes[0].message.contains("shape"));
    }

    #[test]
    fn test_advance_without_batter_warns() {
        let (mut session, mut orders) = session();
        session.set_attribute(Attribute::Shape(Shape::Square));
        session.advance_stage(&mut orders);
        let events = session.advance_stage(&mut orders);

        assert_eq!(session.stage(), Stage::Batter);
        let notes: Vec<_> = GameEvent::notifications(&events).collect();
        assert!(notes[0].message.contains("batter"));
    }

    #[test]
    fn test_optional_stages_pass_without_choice() {
        let (mut session, mut orders) = session();
        session.set_attribute(Attribute::Shape(Shape::Square));
        session.advance_stage(&mut orders);
        session.set_attribute(Attribute::Batter(Batter::Vanilla));
        session.advance_stage(&mut orders);
        session.advance_stage(&mut orders);

        assert_eq!(session.stage(), Stage::Topping);
        assert_eq!(session.cake().icing, None);
    }

    #[test]
    fn test_matching_cake_scores_and_rerolls_target() {
        let (mut session, mut orders) = session();
        session.set_attribute(Attribute::Shape(Shape::Square));
        session.advance_stage(&mut orders);
        session.set_attribute(Attribute::Batter(Batter::Vanilla));
        session.advance_stage(&mut orders);
        session.advance_stage(&mut orders);
        session.set_attribute(Attribute::Topping(Some(Topping::Cherry)));
        let events = session.advance_stage(&mut orders);

        assert_eq!(session.score(), 10);
        assert_eq!(session.stage(), Stage::Finish);
        assert_ne!(*session.target(), target());
        assert!(events.contains(&GameEvent::ScoreChanged(10)));
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::OrderCompleted { matched: true, .. })));
    }

    #[test]
    fn test_finished_cake_ignores_advance_until_reset() {
        let (mut session, mut orders) = session();
        session.set_attribute(Attribute::Shape(Shape::Square));
        session.advance_stage(&mut orders);
        session.set_attribute(Attribute::Batter(Batter::Vanilla));
        for _ in 0..3 {
            session.advance_stage(&mut orders);
        }
        assert!(session.awaiting_reset());
        let score = session.score();

        assert!(session.advance_stage(&mut orders).is_empty());
        assert_eq!(session.score(), score);

        session.reset_cake();
        assert_eq!(session.stage(), Stage::Shape);
        assert_eq!(*session.cake(), CakeOrder::new());
    }

    #[test]
    fn test_finish_stage_accepts_no_attribute() {
        let (mut session, mut orders) = session();
        session.set_attribute(Attribute::Shape(Shape::Circle));
        session.advance_stage(&mut orders);
        session.set_attribute(Attribute::Batter(Batter::Chocolate));
        for _ in 0..3 {
            session.advance_stage(&mut orders);
        }
        let before = *session.cake();

        for kind in [AttributeKind::Shape, AttributeKind::Topping] {
            for attribute in Attribute::choices(kind) {
                session.set_attribute(attribute);
            }
        }
        assert_eq!(*session.cake(), before);
    }

    #[test]
    fn test_tick_counts_down_and_ends() {
        let config = GameConfig {
            session_seconds: 2,
            ..GameConfig::default()
        };
        let mut orders = ScriptedOrders::new(vec![target()]);
        let mut session = GameSession::start(config, &mut orders);

        assert_eq!(session.tick(), vec![GameEvent::TimeChanged(1)]);
        let events = session.tick();
        assert!(events.contains(&GameEvent::SessionEnded { score: 0 }));
        assert!(session.is_over());

        assert!(session.tick().is_empty());
        assert_eq!(session.time_remaining(), 0);
    }

    #[test]
    fn test_attributes_still_apply_after_timeout_by_default() {
        let config = GameConfig {
            session_seconds: 1,
            ..GameConfig::default()
        };
        let mut orders = ScriptedOrders::new(vec![target()]);
        let mut session = GameSession::start(config, &mut orders);
        session.tick();

        session.set_attribute(Attribute::Shape(Shape::Heart));
        assert_eq!(session.cake().shape, Some(Shape::Heart));
        assert!(session.advance_stage(&mut orders).is_empty());
        assert_eq!(session.stage(), Stage::Shape);
    }

    #[test]
    fn test_attributes_lock_after_timeout_when_configured() {
        let config = GameConfig {
            session_seconds: 1,
            lock_attributes_after_timeout: true,
            ..GameConfig::default()
        };
        let mut orders = ScriptedOrders::new(vec![target()]);
        let mut session = GameSession::start(config, &mut orders);
        session.tick();

        session.set_attribute(Attribute::Shape(Shape::Heart));
        assert_eq!(session.cake().shape, None);
    }

    #[test]
    fn test_score_saturates_instead_of_wrapping() {
        let config = GameConfig {
            points_per_match: u32::MAX,
            ..GameConfig::default()
        };
        let mut orders = ScriptedOrders::new(vec![target()]);
        let mut session = GameSession::start(config, &mut orders);

        for _ in 0..2 {
            session.set_attribute(Attribute::Shape(Shape::Square));
            session.advance_stage(&mut orders);
            session.set_attribute(Attribute::Batter(Batter::Vanilla));
            session.advance_stage(&mut orders);
            session.advance_stage(&mut orders);
            session.set_attribute(Attribute::Topping(Some(Topping::Cherry)));
            session.advance_stage(&mut orders);
            session.reset_cake();
        }

        assert_eq!(session.score(), u32::MAX);
    }

    #[test]
    fn test_restart_clears_everything() {
        let (mut session, mut orders) = session();
        session.tick();
        session.set_attribute(Attribute::Shape(Shape::Heart));

        let events = session.restart(&mut orders);
        assert_eq!(session.time_remaining(), 60);
        assert_eq!(session.score(), 0);
        assert_eq!(*session.cake(), CakeOrder::new());
        assert!(matches!(events[0], GameEvent::SessionStarted { seconds: 60, .. }));
    }
}
