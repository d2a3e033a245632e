//! Keyboard input tracking.
//!
//! The window backend translates native key events into `InputEvent`s, and the
//! `Keyboard` folds them into a per-frame state that can be queried with:
//!
//! ```rust,ignore
//! // Checks if a key is currently held down.
//! keyboard.is_key_down(Key::Escape);
//!
//! // Checks if a key has been pressed down during the last frame.
//! keyboard.is_key_press(Key::Escape);
//!
//! // Checks if a key has been released during the last frame.
//! keyboard.is_key_release(Key::Escape);
//! ```

pub mod events;
pub mod keyboard;

pub mod prelude {
    pub use super::events::InputEvent;
    pub use super::keyboard::{Key, Keyboard};
}
