pub mod clock;
pub mod controller;
pub mod input_adapter;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{Button, Controller};
pub use input_adapter::WinitController;
pub use timer::{Countdown, FixedHz};
