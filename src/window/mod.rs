//! Represents an OpenGL context and the window or environment around it.

pub mod events;

pub mod prelude {
    pub use super::backends::HeadlessControl;
    pub use super::events::{Event, WindowEvent};
    pub use super::system::{EventListener, Window};
    pub use super::WindowParams;
}

mod backends;
mod system;

pub use self::backends::{HeadlessControl, HeadlessVisitor, Visitor};
pub use self::system::{EventListener, Window};

use crate::math::prelude::Vector2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: Vector2<u32>,
    /// The (major, minor) version of the core-profile OpenGL context to request.
    pub gl_version: (u8, u8),
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u16,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "LearnOpenGL".to_owned(),
            size: Vector2::new(800, 600),
            gl_version: (3, 3),
            multisample: 0,
            vsync: true,
        }
    }
}
