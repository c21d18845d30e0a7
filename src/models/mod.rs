pub mod campaign;
pub mod chat;
pub mod image;

pub use campaign::*;
pub use chat::*;
pub use image::*;
