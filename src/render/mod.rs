mod canvas;
pub mod palette;
mod sprite;

pub use canvas::{Canvas, DrawOp, Rgba};
pub use sprite::{BaseLayout, CakeSprite};
