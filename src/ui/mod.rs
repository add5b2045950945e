mod app;
mod banner;
pub mod hud;
pub mod keymap;
mod renderer;

pub use app::App;
pub use banner::NotificationBanner;
pub use hud::CakeTextures;
pub use renderer::Renderer;
