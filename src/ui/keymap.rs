use crate::core::Button;
use crate::game::{Action, Attribute, Stage};

/// Translate a key press into a game action for the current stage
///
/// Digits pick the n-th option of whatever the stage edits. Escape is
/// handled by the window, not the game.
pub fn action_for(button: Button, stage: Stage) -> Option<Action> {
    match button {
        Button::Space | Button::Enter => Some(Action::Advance),
        Button::KeyR => Some(Action::Restart),
        Button::Escape => None,
        digit => {
            let slot = digit.slot()?;
            let kind = stage.edits()?;
            Attribute::choices(kind).get(slot).map(|&a| Action::Select(a))
        }
    }
}
