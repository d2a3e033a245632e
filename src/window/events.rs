use crate::input::events::InputEvent;

/// The status of window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The window has been closed.
    Closed,
    /// The window gained focus of user input.
    GainFocus,
    /// The window lost focus of user input.
    LostFocus,
    /// The framebuffer has been resized, in physical pixels.
    Resized(u32, u32),
}

/// The enumerations of all events that come from the window or from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Window(WindowEvent),
    InputDevice(InputEvent),
}
