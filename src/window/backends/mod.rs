mod headless;

pub use self::headless::{HeadlessControl, HeadlessVisitor};

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::events::Event;

/// The platform seam of the window system.
pub trait Visitor {
    /// Returns the size of the framebuffer in physical pixels.
    fn dimensions(&self) -> Vector2<u32>;
    /// Resizes the drawing surface of the GL context.
    fn resize(&self, dimensions: Vector2<u32>);
    /// Collects pending events without blocking.
    fn poll_events(&mut self, events: &mut Vec<Event>);
    fn is_current(&self) -> bool;
    fn make_current(&self) -> Result<()>;
    fn swap_buffers(&self) -> Result<()>;
}

mod glutin;
pub use self::glutin::new;
