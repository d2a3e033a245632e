//! # Trigon
//!
//! Hello-triangle programs on top of a small OpenGL frame renderer.
//!
//! A window is opened with a core-profile OpenGL context, a fixed set of shader
//! programs is compiled and linked, a few triangles are uploaded into static
//! vertex buffers, and every frame clears the screen and draws them until the
//! window is closed or the exit key is pressed.
//!
//! The three binaries only differ by the `Scene` they run:
//!
//! - `shared_program`: two triangles in two buffers, drawn by one program.
//! - `two_programs`: two triangles in two buffers, each with its own program.
//! - `combined_buffer`: two triangles in one buffer, drawn by one draw call.
//!
//! Both the window and the video layers sit behind a `Visitor` trait, with a
//! headless implementation of each that is used to exercise the renderer
//! without a display.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

extern crate cgmath;
extern crate env_logger;
extern crate gl;
extern crate glutin;
extern crate serde_json;

pub mod application;
pub mod errors;
pub mod input;
pub mod math;
pub mod scene;
pub mod video;
pub mod window;

pub mod prelude {
    pub use crate::application::Settings;
    pub use crate::errors::{Error, Result};
    pub use crate::input::prelude::*;
    pub use crate::math::prelude::*;
    pub use crate::scene::{DrawPair, Scene, ShaderSource, Variant, VertexData};
    pub use crate::video::prelude::*;
    pub use crate::window::prelude::*;
}
