pub mod cli;
pub mod config;
pub mod core;
pub mod game;
pub mod render;
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use game::{Action, CakeOrder, GameEvent, GameSession, SessionDriver, Stage};
