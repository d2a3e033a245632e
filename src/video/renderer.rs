use crate::errors::*;
use crate::input::prelude::Key;
use crate::math::prelude::{Color, Vector2};
use crate::scene::{Scene, ShaderSource};
use crate::window::prelude::{Event, EventListener, Window, WindowEvent};

use super::assets::prelude::*;
use super::backends::{self, Visitor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    NotInitialized,
    Running,
    Closing,
    Terminated,
}

#[derive(Debug, Clone, Copy)]
struct DrawBatch {
    program: ProgramHandle,
    vertex_array: VertexArrayHandle,
    len: u32,
}

pub struct FrameRenderer {
    visitor: Box<dyn Visitor>,
    state: RendererState,
    exit_key: Key,
    clear_color: Color<f32>,
    programs: Vec<ProgramHandle>,
    buffers: Vec<BufferHandle>,
    vertex_arrays: Vec<VertexArrayHandle>,
    batches: Vec<DrawBatch>,
}

impl FrameRenderer {
    /// Creates a renderer on top of the OpenGL context of `window`.
    pub fn new(window: &Window, exit_key: Key) -> Result<Self> {
        if !window.is_current() {
            window.make_current()?;
        }

        Ok(FrameRenderer::from_visitor(backends::new()?, exit_key))
    }

    pub fn from_visitor(visitor: Box<dyn Visitor>, exit_key: Key) -> Self {
        FrameRenderer {
            visitor,
            state: RendererState::NotInitialized,
            exit_key,
            clear_color: Color::black(),
            programs: Vec::new(),
            buffers: Vec::new(),
            vertex_arrays: Vec::new(),
            batches: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> RendererState {
        self.state
    }

    #[inline]
    pub fn exit_key(&self) -> Key {
        self.exit_key
    }

    /// Compiles and links the programs of `scene`, uploads its vertex data, and
    /// sets the viewport to cover `dimensions`.
    ///
    /// On failure everything created so far is released, and the renderer is
    /// terminated.
    pub fn initialize(&mut self, scene: &Scene, dimensions: Vector2<u32>) -> Result<()> {
        if self.state != RendererState::NotInitialized {
            return Err(Error::ResourceCreation(
                "frame renderer",
                format!("can not initialize a renderer in {:?} state.", self.state),
            ));
        }

        if let Err(err) = scene.validate() {
            self.state = RendererState::Terminated;
            return Err(err);
        }

        info!("Initializing scene {}.", scene.name);
        self.clear_color = scene.clear_color.clip();

        let result = unsafe { self.build(scene) }.and_then(|_| self.resize(dimensions));
        match result {
            Ok(()) => {
                self.state = RendererState::Running;
                Ok(())
            }
            Err(err) => {
                error!("Failed to initialize scene {}. {}", scene.name, err);
                if let Err(e) = self.release() {
                    warn!("Failed to release partially created objects. {}", e);
                }

                self.state = RendererState::Terminated;
                Err(err)
            }
        }
    }

    /// Runs one iteration of the render loop and returns the number of vertices
    /// submitted.
    ///
    /// The exit key sets the close-request of `window`. The frame is still
    /// completed, and the renderer moves to `Closing` once it sees the request.
    pub fn render_frame(&mut self, window: &mut Window) -> Result<u32> {
        match self.state {
            RendererState::Running | RendererState::Closing => {}
            _ => return Ok(0),
        }

        let keyboard = window.keyboard();
        if keyboard.is_key_down(self.exit_key) || keyboard.is_key_press(self.exit_key) {
            window.set_should_close(true);
        }

        let mut vertices = 0;
        unsafe {
            self.visitor.clear(self.clear_color)?;
            for batch in &self.batches {
                vertices += self
                    .visitor
                    .draw(batch.program, batch.vertex_array, 0, batch.len)?;
            }
        }

        window.swap_buffers()?;
        window.poll_events();
        window.dispatch(self)?;

        if window.should_close() {
            self.state = RendererState::Closing;
        }

        Ok(vertices)
    }

    /// Updates the viewport to exactly `(0, 0, width, height)`.
    pub fn resize(&mut self, dimensions: Vector2<u32>) -> Result<()> {
        if self.state == RendererState::Terminated {
            return Ok(());
        }

        unsafe {
            self.visitor
                .update_surface_viewport(SurfaceViewport::full(dimensions))
        }
    }

    /// Releases vertex arrays, buffers and programs, in that order. Calling it
    /// more than once is a no-op.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.state == RendererState::Terminated {
            return Ok(());
        }

        let result = self.release();
        self.state = RendererState::Terminated;
        info!("Frame renderer terminated.");
        result
    }

    unsafe fn build(&mut self, scene: &Scene) -> Result<()> {
        for source in &scene.programs {
            let program = self.build_program(source)?;
            self.programs.push(program);
        }

        for data in &scene.vertex_data {
            let buffer = self.visitor.create_vertex_buffer(&data.positions)?;
            self.buffers.push(buffer);

            let vao = self
                .visitor
                .create_vertex_array(buffer, VertexLayout::position())?;
            self.vertex_arrays.push(vao);
        }

        for draw in &scene.draws {
            self.batches.push(DrawBatch {
                program: self.programs[draw.program],
                vertex_array: self.vertex_arrays[draw.vertices],
                len: scene.vertex_data[draw.vertices].len() as u32,
            });
        }

        Ok(())
    }

    /// Shader objects are deleted once linking is done, whatever its outcome.
    unsafe fn build_program(&mut self, source: &ShaderSource) -> Result<ProgramHandle> {
        let vs = self.visitor.create_shader(ShaderStage::Vertex, &source.vs)?;
        let fs = match self.visitor.create_shader(ShaderStage::Fragment, &source.fs) {
            Ok(fs) => fs,
            Err(err) => {
                if let Err(e) = self.visitor.delete_shader(vs) {
                    warn!("Failed to release vertex shader of {}. {}", source.name, e);
                }

                return Err(err);
            }
        };

        let program = self.visitor.create_program(&[vs, fs]);
        let released = self
            .visitor
            .delete_shader(vs)
            .and(self.visitor.delete_shader(fs));

        let program = match (program, released) {
            (Ok(program), Ok(())) => program,
            (Ok(program), Err(err)) => {
                if let Err(e) = self.visitor.delete_program(program) {
                    warn!("Failed to release program {}. {}", source.name, e);
                }

                return Err(err);
            }
            (Err(err), released) => {
                if let Err(e) = released {
                    warn!("Failed to release shaders of {}. {}", source.name, e);
                }

                return Err(err);
            }
        };

        debug!("Built program {}.", source.name);
        Ok(program)
    }

    /// Releases every object still owned, keeps going on errors and returns the
    /// first one.
    fn release(&mut self) -> Result<()> {
        let mut result = Ok(());
        self.batches.clear();

        unsafe {
            for v in self.vertex_arrays.drain(..) {
                let r = self.visitor.delete_vertex_array(v);
                result = result.and(r);
            }

            for v in self.buffers.drain(..) {
                let r = self.visitor.delete_vertex_buffer(v);
                result = result.and(r);
            }

            for v in self.programs.drain(..) {
                let r = self.visitor.delete_program(v);
                result = result.and(r);
            }
        }

        result
    }
}

impl EventListener for FrameRenderer {
    fn on(&mut self, v: &Event) -> Result<()> {
        match *v {
            Event::Window(WindowEvent::Resized(width, height)) => {
                self.resize(Vector2::new(width, height))
            }
            Event::Window(WindowEvent::Closed) => {
                if self.state == RendererState::Running {
                    self.state = RendererState::Closing;
                }

                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl Drop for FrameRenderer {
    fn drop(&mut self) {
        if self.state == RendererState::NotInitialized {
            return;
        }

        if let Err(err) = self.shutdown() {
            warn!("Failed to shutdown frame renderer. {}", err);
        }
    }
}
