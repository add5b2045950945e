pub mod driver;
pub mod event;
pub mod notification;
pub mod order;
pub mod session;
pub mod stage;
pub mod target;

pub use driver::SessionDriver;
pub use event::{Action, GameEvent};
pub use notification::{Notification, NotificationKind};
pub use order::{Attribute, AttributeKind, Batter, CakeOrder, Icing, Shape, Topping};
pub use session::GameSession;
pub use stage::Stage;
pub use target::{OrderSource, RandomOrders, ScriptedOrders};
