/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Space,
    Enter,
    KeyR,
    Escape,
}

impl Button {
    /// Zero-based menu slot for digit keys
    pub fn slot(self) -> Option<usize> {
        match self {
            Button::Digit1 => Some(0),
            Button::Digit2 => Some(1),
            Button::Digit3 => Some(2),
            Button::Digit4 => Some(3),
            _ => None,
        }
    }
}

/// Controller - source of discrete button presses
pub trait Controller {
    /// Buttons that went down since the last call, oldest first
    fn take_presses(&mut self) -> Vec<Button>;
}
