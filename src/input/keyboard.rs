use std::collections::HashSet;

use super::events::InputEvent;

/// Symbolic name for a keyboard key.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub enum Key {
    /// The Escape key, next to F1.
    Escape,
    /// The Enter key.
    Return,
    /// The space bar.
    Space,
    /// The Backspace key, right over Enter.
    Back,
    Tab,

    Q,
    W,
    A,
    S,
    D,
    X,

    F1,
    F2,
    F3,
    F4,

    Left,
    Up,
    Right,
    Down,
}

/// Tracks which keys are held down, and which changed during the last frame.
#[derive(Debug, Default)]
pub struct Keyboard {
    downs: HashSet<Key>,
    presses: HashSet<Key>,
    releases: HashSet<Key>,
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    /// Forgets the per-frame press and release records. Keys that are still held
    /// down stay down.
    pub fn advance(&mut self) {
        self.presses.clear();
        self.releases.clear();
    }

    pub fn on_event(&mut self, v: &InputEvent) {
        match *v {
            InputEvent::KeyboardPressed { key } => self.on_key_pressed(key),
            InputEvent::KeyboardReleased { key } => self.on_key_released(key),
        }
    }

    pub fn on_key_pressed(&mut self, key: Key) {
        if self.downs.insert(key) {
            self.presses.insert(key);
        }
    }

    pub fn on_key_released(&mut self, key: Key) {
        if self.downs.remove(&key) {
            self.releases.insert(key);
        }
    }

    /// Checks if a key is currently held down.
    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.downs.contains(&key)
    }

    /// Checks if a key has been pressed down during the last frame.
    #[inline]
    pub fn is_key_press(&self, key: Key) -> bool {
        self.presses.contains(&key)
    }

    /// Checks if a key has been released during the last frame.
    #[inline]
    pub fn is_key_release(&self, key: Key) -> bool {
        self.releases.contains(&key)
    }
}
