use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::errors::*;
use crate::input::prelude::{InputEvent, Key};
use crate::math::prelude::Vector2;

use super::super::events::{Event, WindowEvent};
use super::Visitor;

/// Feeds events into a `HeadlessVisitor` and observes what it presented.
#[derive(Debug, Clone, Default)]
pub struct HeadlessControl {
    events: Rc<RefCell<Vec<Event>>>,
    presents: Rc<Cell<u32>>,
    dimensions: Rc<Cell<(u32, u32)>>,
}

impl HeadlessControl {
    /// Queues an event, it will be delivered by the next poll.
    pub fn push(&self, v: Event) {
        self.events.borrow_mut().push(v);
    }

    pub fn press(&self, key: Key) {
        self.push(Event::InputDevice(InputEvent::KeyboardPressed { key }));
    }

    pub fn release(&self, key: Key) {
        self.push(Event::InputDevice(InputEvent::KeyboardReleased { key }));
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.push(Event::Window(WindowEvent::Resized(width, height)));
    }

    pub fn close(&self) {
        self.push(Event::Window(WindowEvent::Closed));
    }

    /// Returns how many times the back buffer has been presented.
    pub fn presents(&self) -> u32 {
        self.presents.get()
    }

    /// Returns the current size of the headless surface.
    pub fn dimensions(&self) -> Vector2<u32> {
        let (w, h) = self.dimensions.get();
        Vector2::new(w, h)
    }
}

/// A window backend without any display, driven by a `HeadlessControl`.
pub struct HeadlessVisitor {
    control: HeadlessControl,
}

impl HeadlessVisitor {
    pub fn new(dimensions: Vector2<u32>) -> Self {
        let control = HeadlessControl::default();
        control.dimensions.set((dimensions.x, dimensions.y));
        HeadlessVisitor { control }
    }

    pub fn control(&self) -> HeadlessControl {
        self.control.clone()
    }
}

impl Visitor for HeadlessVisitor {
    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        self.control.dimensions()
    }

    #[inline]
    fn resize(&self, dimensions: Vector2<u32>) {
        self.control.dimensions.set((dimensions.x, dimensions.y));
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        events.extend(self.control.events.borrow_mut().drain(..));
    }

    #[inline]
    fn is_current(&self) -> bool {
        true
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        self.control.presents.set(self.control.presents.get() + 1);
        Ok(())
    }
}
