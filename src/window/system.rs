use crate::errors::*;
use crate::input::prelude::{Key, Keyboard};
use crate::math::prelude::Vector2;

use super::backends::{self, HeadlessControl, HeadlessVisitor, Visitor};
use super::events::{Event, WindowEvent};
use super::WindowParams;

/// Receives the events polled from a `Window`.
pub trait EventListener {
    fn on(&mut self, v: &Event) -> Result<()>;
}

/// Represents an OpenGL context and the window or environment around it.
pub struct Window {
    visitor: Box<dyn Visitor>,
    events: Vec<Event>,
    keyboard: Keyboard,
    dimensions: Vector2<u32>,
    should_close: bool,
}

impl Window {
    /// Creates a new `Window` and initalize OpenGL context.
    pub fn new(params: WindowParams) -> Result<Self> {
        Ok(Window::from_visitor(backends::new(params)?))
    }

    /// Creates a new `Window` without display, and the control which feeds
    /// events into it.
    pub fn headless(dimensions: Vector2<u32>) -> (Self, HeadlessControl) {
        let visitor = HeadlessVisitor::new(dimensions);
        let control = visitor.control();
        (Window::from_visitor(Box::new(visitor)), control)
    }

    pub fn from_visitor(visitor: Box<dyn Visitor>) -> Self {
        let dimensions = visitor.dimensions();
        Window {
            visitor,
            events: Vec::new(),
            keyboard: Keyboard::new(),
            dimensions,
            should_close: false,
        }
    }

    /// Polls events from the window without blocking, applies them to the
    /// keyboard state, the close-request and the dimensions, and returns them.
    pub fn poll_events(&mut self) -> &[Event] {
        self.events.clear();
        self.keyboard.advance();
        self.visitor.poll_events(&mut self.events);

        for v in &self.events {
            match *v {
                Event::InputDevice(ref e) => self.keyboard.on_event(e),
                Event::Window(WindowEvent::Closed) => self.should_close = true,
                Event::Window(WindowEvent::Resized(width, height)) => {
                    self.dimensions = Vector2::new(width, height);
                    self.visitor.resize(self.dimensions);
                }
                Event::Window(_) => {}
            }
        }

        &self.events
    }

    /// Dispatches the events of the last poll to `lis`.
    pub fn dispatch<T: EventListener>(&self, lis: &mut T) -> Result<()> {
        for v in &self.events {
            lis.on(v)?;
        }

        Ok(())
    }

    #[inline]
    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keyboard.is_key_down(key)
    }

    /// Requests (or withdraws the request) to close this window. Nothing else
    /// happens until the owner of the main loop checks `should_close`.
    #[inline]
    pub fn set_should_close(&mut self, close: bool) {
        self.should_close = close;
    }

    #[inline]
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Returns the size of the framebuffer in physical pixels.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }

    /// Set the context as the active context in this thread.
    #[inline]
    pub fn make_current(&self) -> Result<()> {
        self.visitor.make_current()
    }

    /// Returns true if this context is the current one in this thread.
    #[inline]
    pub fn is_current(&self) -> bool {
        self.visitor.is_current()
    }

    /// Swaps the buffers in case of double or triple buffering.
    ///
    /// **Warning**: if you enabled vsync, this function will block until the next time the screen
    /// is refreshed.
    #[inline]
    pub fn swap_buffers(&self) -> Result<()> {
        self.visitor.swap_buffers()
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        debug!("Window terminated.");
    }
}
