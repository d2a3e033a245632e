//! Math types used across the crate, mostly re-exported from `cgmath`.

pub mod color;

pub mod prelude {
    pub use super::color::Color;
    pub use cgmath::Vector2;
}
