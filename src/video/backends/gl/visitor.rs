use std::collections::HashSet;
use std::ffi::CString;
use std::mem;
use std::os::raw::c_void;
use std::ptr;

use gl;
use gl::types::*;

use crate::errors::*;
use crate::math::prelude::Color;

use super::super::super::assets::prelude::*;
use super::super::Visitor;
use super::capabilities::{self, Capabilities};
use super::types;

struct GLMutableState {
    view: Option<SurfaceViewport>,
    binded_program: Option<ProgramHandle>,
    binded_vao: Option<VertexArrayHandle>,
}

pub struct GLVisitor {
    state: GLMutableState,
    shaders: HashSet<ShaderHandle>,
    programs: HashSet<ProgramHandle>,
    buffers: HashSet<BufferHandle>,
    vertex_arrays: HashSet<VertexArrayHandle>,
}

impl GLVisitor {
    pub unsafe fn new() -> Result<Self> {
        capabilities::check_loaded()?;

        let capabilities = Capabilities::parse()?;
        info!("GLVisitor {:#?}", capabilities);
        capabilities.check()?;

        let visitor = GLVisitor {
            state: GLMutableState {
                view: None,
                binded_program: None,
                binded_vao: None,
            },
            shaders: HashSet::new(),
            programs: HashSet::new(),
            buffers: HashSet::new(),
            vertex_arrays: HashSet::new(),
        };

        Self::reset_render_state()?;
        Ok(visitor)
    }
}

impl Visitor for GLVisitor {
    unsafe fn create_shader(&mut self, stage: ShaderStage, src: &str) -> Result<ShaderHandle> {
        let id = Self::compile(stage, src)?;
        let handle = ShaderHandle::new(id);
        self.shaders.insert(handle);
        debug!("Compiled {} shader {}.", stage.name(), handle);
        Ok(handle)
    }

    unsafe fn delete_shader(&mut self, handle: ShaderHandle) -> Result<()> {
        if !self.shaders.remove(&handle) {
            return Err(Error::HandleInvalid(handle.to_string()));
        }

        gl::DeleteShader(handle.id());
        check()
    }

    unsafe fn create_program(&mut self, shaders: &[ShaderHandle]) -> Result<ProgramHandle> {
        for v in shaders {
            if !self.shaders.contains(v) {
                return Err(Error::HandleInvalid(v.to_string()));
            }
        }

        let id = Self::link(shaders)?;
        for v in shaders {
            gl::DetachShader(id, v.id());
        }

        if let Err(err) = check() {
            gl::DeleteProgram(id);
            return Err(err);
        }

        let handle = ProgramHandle::new(id);
        self.programs.insert(handle);
        debug!("Linked program {}.", handle);
        Ok(handle)
    }

    unsafe fn delete_program(&mut self, handle: ProgramHandle) -> Result<()> {
        if !self.programs.remove(&handle) {
            return Err(Error::HandleInvalid(handle.to_string()));
        }

        if self.state.binded_program == Some(handle) {
            gl::UseProgram(0);
            self.state.binded_program = None;
        }

        gl::DeleteProgram(handle.id());
        check()
    }

    unsafe fn create_vertex_buffer(&mut self, positions: &[[f32; 3]]) -> Result<BufferHandle> {
        let mut id = 0;
        gl::GenBuffers(1, &mut id);
        if id == 0 {
            return Err(Error::ResourceCreation(
                "vertex buffer",
                "glGenBuffers returned 0.".into(),
            ));
        }

        gl::BindBuffer(gl::ARRAY_BUFFER, id);

        let size = positions.len() * mem::size_of::<[f32; 3]>();
        let value = if positions.is_empty() {
            ptr::null()
        } else {
            positions.as_ptr() as *const c_void
        };

        gl::BufferData(gl::ARRAY_BUFFER, size as GLsizeiptr, value, gl::STATIC_DRAW);
        gl::BindBuffer(gl::ARRAY_BUFFER, 0);

        if let Err(err) = check() {
            gl::DeleteBuffers(1, &id);
            return Err(err);
        }

        let handle = BufferHandle::new(id);
        self.buffers.insert(handle);
        debug!("Uploaded {} vertices into {}.", positions.len(), handle);
        Ok(handle)
    }

    unsafe fn delete_vertex_buffer(&mut self, handle: BufferHandle) -> Result<()> {
        if !self.buffers.remove(&handle) {
            return Err(Error::HandleInvalid(handle.to_string()));
        }

        gl::DeleteBuffers(1, &handle.id());
        check()
    }

    unsafe fn create_vertex_array(
        &mut self,
        buffer: BufferHandle,
        layout: VertexLayout,
    ) -> Result<VertexArrayHandle> {
        if !self.buffers.contains(&buffer) {
            return Err(Error::HandleInvalid(buffer.to_string()));
        }

        let mut vao = 0;
        gl::GenVertexArrays(1, &mut vao);
        if vao == 0 {
            return Err(Error::ResourceCreation(
                "vertex array",
                "glGenVertexArrays returned 0.".into(),
            ));
        }

        gl::BindVertexArray(vao);
        gl::BindBuffer(gl::ARRAY_BUFFER, buffer.id());
        gl::VertexAttribPointer(
            layout.location,
            GLint::from(layout.components),
            gl::FLOAT,
            gl::FALSE,
            GLsizei::from(layout.stride),
            layout.offset as *const c_void,
        );
        gl::EnableVertexAttribArray(layout.location);

        gl::BindVertexArray(0);
        gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        self.state.binded_vao = None;

        if let Err(err) = check() {
            gl::DeleteVertexArrays(1, &vao);
            return Err(err);
        }

        let handle = VertexArrayHandle::new(vao);
        self.vertex_arrays.insert(handle);
        debug!("Created {} for {} with {:?}.", handle, buffer, layout);
        Ok(handle)
    }

    unsafe fn delete_vertex_array(&mut self, handle: VertexArrayHandle) -> Result<()> {
        if !self.vertex_arrays.remove(&handle) {
            return Err(Error::HandleInvalid(handle.to_string()));
        }

        if self.state.binded_vao == Some(handle) {
            gl::BindVertexArray(0);
            self.state.binded_vao = None;
        }

        gl::DeleteVertexArrays(1, &handle.id());
        check()
    }

    /// Set the viewport relative to the bottom-left corner of th window, in pixels.
    unsafe fn update_surface_viewport(&mut self, vp: SurfaceViewport) -> Result<()> {
        if self.state.view != Some(vp) {
            gl::Viewport(
                vp.position.x,
                vp.position.y,
                vp.size.x as i32,
                vp.size.y as i32,
            );

            self.state.view = Some(vp);
            check()?;
        }

        Ok(())
    }

    unsafe fn clear(&mut self, color: Color<f32>) -> Result<()> {
        let [r, g, b, a] = color.rgba();
        gl::ClearColor(r, g, b, a);
        gl::Clear(gl::COLOR_BUFFER_BIT);
        check()
    }

    unsafe fn draw(
        &mut self,
        program: ProgramHandle,
        vertex_array: VertexArrayHandle,
        from: u32,
        len: u32,
    ) -> Result<u32> {
        if !self.programs.contains(&program) {
            return Err(Error::HandleInvalid(program.to_string()));
        }

        if !self.vertex_arrays.contains(&vertex_array) {
            return Err(Error::HandleInvalid(vertex_array.to_string()));
        }

        if self.state.binded_program != Some(program) {
            gl::UseProgram(program.id());
            self.state.binded_program = Some(program);
        }

        if self.state.binded_vao != Some(vertex_array) {
            gl::BindVertexArray(vertex_array.id());
            self.state.binded_vao = Some(vertex_array);
        }

        gl::DrawArrays(gl::TRIANGLES, from as GLint, len as GLsizei);
        check()?;
        Ok(len)
    }
}

impl GLVisitor {
    unsafe fn reset_render_state() -> Result<()> {
        gl::Disable(gl::CULL_FACE);
        gl::Disable(gl::DEPTH_TEST);
        gl::Disable(gl::BLEND);
        gl::Disable(gl::SCISSOR_TEST);
        gl::BindFramebuffer(gl::FRAMEBUFFER, 0);
        check()
    }

    unsafe fn compile(stage: ShaderStage, src: &str) -> Result<GLuint> {
        let tp = types::shader_type(stage).ok_or_else(|| {
            Error::ResourceCreation("shader", format!("{} is not a compile stage.", stage.name()))
        })?;

        let c_str = CString::new(src.as_bytes()).map_err(|_| Error::ShaderBuild {
            stage,
            log: "Shader source contains a nul byte.".into(),
        })?;

        let shader = gl::CreateShader(tp);
        if shader == 0 {
            return Err(Error::ResourceCreation(
                "shader",
                "glCreateShader returned 0.".into(),
            ));
        }

        // Attempt to compile the shader
        gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
        gl::CompileShader(shader);

        // Get the compile status
        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);

        // Fail on error
        if status != GLint::from(gl::TRUE) {
            let mut len = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0u8; len.max(1) as usize];
            let mut written = 0;
            gl::GetShaderInfoLog(
                shader,
                buf.len() as GLsizei,
                &mut written,
                buf.as_mut_ptr() as *mut GLchar,
            );

            gl::DeleteShader(shader);
            buf.truncate(written.max(0) as usize);
            Err(Error::ShaderBuild {
                stage,
                log: String::from_utf8_lossy(&buf).into_owned(),
            })
        } else {
            Ok(shader)
        }
    }

    unsafe fn link(shaders: &[ShaderHandle]) -> Result<GLuint> {
        let program = gl::CreateProgram();
        if program == 0 {
            return Err(Error::ResourceCreation(
                "program",
                "glCreateProgram returned 0.".into(),
            ));
        }

        for shader in shaders {
            gl::AttachShader(program, shader.id())
        }

        gl::LinkProgram(program);
        // Get the link status
        let mut status = GLint::from(gl::FALSE);
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);

        // Fail on error
        if status != GLint::from(gl::TRUE) {
            let mut len: GLint = 0;
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0u8; len.max(1) as usize];
            let mut written = 0;
            gl::GetProgramInfoLog(
                program,
                buf.len() as GLsizei,
                &mut written,
                buf.as_mut_ptr() as *mut GLchar,
            );

            gl::DeleteProgram(program);
            buf.truncate(written.max(0) as usize);
            Err(Error::ShaderBuild {
                stage: ShaderStage::Program,
                log: String::from_utf8_lossy(&buf).into_owned(),
            })
        } else {
            Ok(program)
        }
    }
}

unsafe fn check() -> Result<()> {
    match gl::GetError() {
        gl::NO_ERROR => Ok(()),
        code => Err(Error::ResourceCreation(
            "GL object",
            format!("[GL] {}", types::describe_error(code)),
        )),
    }
}
