//! GPU objects, the backends that create them, and the frame renderer that
//! drives them.
//!
//! The `FrameRenderer` owns every GPU object it creates. Its life is a straight
//! line through four states:
//!
//! ```text
//! NotInitialized -> Running -> Closing -> Terminated
//! ```
//!
//! `initialize` compiles and links the programs of a `Scene` and uploads its
//! vertex data, `render_frame` clears the screen and draws every configured
//! (program, vertex array) pair once, and `shutdown` releases everything in
//! reverse order of acquisition.

pub mod assets;
pub mod backends;

mod renderer;

pub use self::backends::headless::{HeadlessVisitor, Recorder};
pub use self::backends::Visitor;
pub use self::renderer::{FrameRenderer, RendererState};

pub mod prelude {
    pub use super::assets::prelude::*;
    pub use super::{FrameRenderer, RendererState};
}
