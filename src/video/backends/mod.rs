//! The backend of renderer, which should be responsible for only one thing:
//! creating GPU objects and submitting draw-calls using low-level video APIs.

pub mod headless;

use crate::errors::*;
use crate::math::prelude::Color;

use super::assets::prelude::*;

pub trait Visitor {
    /// Compiles the source of one pipeline stage. On failure the shader object is
    /// released and the error carries its own diagnostic log.
    unsafe fn create_shader(&mut self, stage: ShaderStage, src: &str) -> Result<ShaderHandle>;

    unsafe fn delete_shader(&mut self, handle: ShaderHandle) -> Result<()>;

    /// Links compiled shaders into a program. On failure the program object is
    /// released, the shaders are left to the caller.
    unsafe fn create_program(&mut self, shaders: &[ShaderHandle]) -> Result<ProgramHandle>;

    unsafe fn delete_program(&mut self, handle: ProgramHandle) -> Result<()>;

    /// Uploads immutable vertex positions.
    unsafe fn create_vertex_buffer(&mut self, positions: &[[f32; 3]]) -> Result<BufferHandle>;

    unsafe fn delete_vertex_buffer(&mut self, handle: BufferHandle) -> Result<()>;

    /// Creates a vertex-array descriptor that binds `buffer` with `layout`.
    unsafe fn create_vertex_array(
        &mut self,
        buffer: BufferHandle,
        layout: VertexLayout,
    ) -> Result<VertexArrayHandle>;

    unsafe fn delete_vertex_array(&mut self, handle: VertexArrayHandle) -> Result<()>;

    unsafe fn update_surface_viewport(&mut self, vp: SurfaceViewport) -> Result<()>;

    /// Clears the color buffer of the default framebuffer.
    unsafe fn clear(&mut self, color: Color<f32>) -> Result<()>;

    /// Binds `program` and `vertex_array`, and draws `len` vertices starting at
    /// `from` as a list of triangles. Returns the number of vertices submitted.
    unsafe fn draw(
        &mut self,
        program: ProgramHandle,
        vertex_array: VertexArrayHandle,
        from: u32,
        len: u32,
    ) -> Result<u32>;
}

pub mod gl;

/// Creates the OpenGL backend. The GL context must be current on this thread
/// and its functions loaded.
pub fn new() -> Result<Box<dyn Visitor>> {
    let visitor = unsafe { self::gl::visitor::GLVisitor::new()? };
    Ok(Box::new(visitor))
}
