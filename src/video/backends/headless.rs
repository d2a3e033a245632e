//! A backend that creates no GPU objects, but records everything it is asked
//! to do.

use std::cell::{Ref, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::errors::*;
use crate::math::prelude::Color;

use super::super::assets::prelude::*;
use super::Visitor;

/// A GPU object known to the headless backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Shader(ShaderHandle),
    Program(ProgramHandle),
    Buffer(BufferHandle),
    VertexArray(VertexArrayHandle),
}

/// The commands submitted while rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Viewport(SurfaceViewport),
    Clear(Color<f32>),
    Draw {
        program: ProgramHandle,
        vertex_array: VertexArrayHandle,
        from: u32,
        len: u32,
    },
}

#[derive(Debug, Default)]
pub struct Record {
    /// Objects in creation order.
    pub created: Vec<Resource>,
    /// Objects in release order.
    pub deleted: Vec<Resource>,
    /// Sources handed to the compiler.
    pub sources: Vec<(ShaderStage, String)>,
    /// Vertex data uploaded into each buffer.
    pub uploads: Vec<(BufferHandle, Vec<[f32; 3]>)>,
    /// The buffer and layout of each vertex array.
    pub layouts: Vec<(VertexArrayHandle, BufferHandle, VertexLayout)>,
    pub commands: Vec<Command>,
}

impl Record {
    /// Objects that have been created but not released yet.
    pub fn alive(&self) -> Vec<Resource> {
        self.created
            .iter()
            .filter(|v| !self.deleted.contains(v))
            .cloned()
            .collect()
    }

    /// How many times `v` has been released.
    pub fn deletions(&self, v: Resource) -> usize {
        self.deleted.iter().filter(|&&d| d == v).count()
    }

    pub fn programs(&self) -> Vec<ProgramHandle> {
        self.created
            .iter()
            .filter_map(|v| match *v {
                Resource::Program(h) => Some(h),
                _ => None,
            })
            .collect()
    }

    pub fn draws(&self) -> Vec<(ProgramHandle, VertexArrayHandle, u32, u32)> {
        self.commands
            .iter()
            .filter_map(|v| match *v {
                Command::Draw {
                    program,
                    vertex_array,
                    from,
                    len,
                } => Some((program, vertex_array, from, len)),
                _ => None,
            })
            .collect()
    }

    pub fn last_viewport(&self) -> Option<SurfaceViewport> {
        self.commands.iter().rev().find_map(|v| match *v {
            Command::Viewport(vp) => Some(vp),
            _ => None,
        })
    }
}

/// The shared `Record` of a `HeadlessVisitor`.
#[derive(Debug, Clone, Default)]
pub struct Recorder(Rc<RefCell<Record>>);

impl Recorder {
    pub fn borrow(&self) -> Ref<Record> {
        self.0.borrow()
    }

    pub fn clear_commands(&self) {
        self.0.borrow_mut().commands.clear();
    }
}

pub struct HeadlessVisitor {
    recorder: Recorder,
    next: u32,
    alive: HashSet<Resource>,
    compiles: HashMap<ShaderStage, usize>,
    failures: HashMap<(ShaderStage, usize), String>,
    pinned_shaders: bool,
}

impl HeadlessVisitor {
    pub fn new() -> Self {
        HeadlessVisitor {
            recorder: Recorder::default(),
            next: 1,
            alive: HashSet::new(),
            compiles: HashMap::new(),
            failures: HashMap::new(),
            pinned_shaders: false,
        }
    }

    pub fn recorder(&self) -> Recorder {
        self.recorder.clone()
    }

    /// Makes the `nth` (counting from 0) compile of `stage`, or the `nth` link
    /// for `ShaderStage::Program`, fail with `log` as diagnostic text.
    pub fn fail(mut self, stage: ShaderStage, nth: usize, log: &str) -> Self {
        self.failures.insert((stage, nth), log.to_owned());
        self
    }

    /// Makes every shader release fail. The shader objects stay alive.
    pub fn pin_shaders(mut self) -> Self {
        self.pinned_shaders = true;
        self
    }

    fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    fn insert(&mut self, v: Resource) {
        self.alive.insert(v);
        self.recorder.0.borrow_mut().created.push(v);
    }

    fn remove(&mut self, v: Resource, name: String) -> Result<()> {
        if !self.alive.remove(&v) {
            return Err(Error::HandleInvalid(name));
        }

        self.recorder.0.borrow_mut().deleted.push(v);
        Ok(())
    }

    fn ensure(&self, v: Resource, name: String) -> Result<()> {
        if self.alive.contains(&v) {
            Ok(())
        } else {
            Err(Error::HandleInvalid(name))
        }
    }

    fn take_failure(&mut self, stage: ShaderStage) -> Option<String> {
        let count = self.compiles.entry(stage).or_insert(0);
        let nth = *count;
        *count += 1;
        self.failures.remove(&(stage, nth))
    }
}

impl Default for HeadlessVisitor {
    fn default() -> Self {
        HeadlessVisitor::new()
    }
}

impl Visitor for HeadlessVisitor {
    unsafe fn create_shader(&mut self, stage: ShaderStage, src: &str) -> Result<ShaderHandle> {
        let handle = ShaderHandle::new(self.allocate());
        self.insert(Resource::Shader(handle));
        self.recorder
            .0
            .borrow_mut()
            .sources
            .push((stage, src.to_owned()));

        if let Some(log) = self.take_failure(stage) {
            self.remove(Resource::Shader(handle), handle.to_string())?;
            return Err(Error::ShaderBuild { stage, log });
        }

        Ok(handle)
    }

    unsafe fn delete_shader(&mut self, handle: ShaderHandle) -> Result<()> {
        if self.pinned_shaders {
            return Err(Error::HandleInvalid(handle.to_string()));
        }

        self.remove(Resource::Shader(handle), handle.to_string())
    }

    unsafe fn create_program(&mut self, shaders: &[ShaderHandle]) -> Result<ProgramHandle> {
        for &v in shaders {
            self.ensure(Resource::Shader(v), v.to_string())?;
        }

        let handle = ProgramHandle::new(self.allocate());
        self.insert(Resource::Program(handle));

        if let Some(log) = self.take_failure(ShaderStage::Program) {
            self.remove(Resource::Program(handle), handle.to_string())?;
            return Err(Error::ShaderBuild {
                stage: ShaderStage::Program,
                log,
            });
        }

        Ok(handle)
    }

    unsafe fn delete_program(&mut self, handle: ProgramHandle) -> Result<()> {
        self.remove(Resource::Program(handle), handle.to_string())
    }

    unsafe fn create_vertex_buffer(&mut self, positions: &[[f32; 3]]) -> Result<BufferHandle> {
        let handle = BufferHandle::new(self.allocate());
        self.insert(Resource::Buffer(handle));
        self.recorder
            .0
            .borrow_mut()
            .uploads
            .push((handle, positions.to_vec()));

        Ok(handle)
    }

    unsafe fn delete_vertex_buffer(&mut self, handle: BufferHandle) -> Result<()> {
        self.remove(Resource::Buffer(handle), handle.to_string())
    }

    unsafe fn create_vertex_array(
        &mut self,
        buffer: BufferHandle,
        layout: VertexLayout,
    ) -> Result<VertexArrayHandle> {
        self.ensure(Resource::Buffer(buffer), buffer.to_string())?;

        let handle = VertexArrayHandle::new(self.allocate());
        self.insert(Resource::VertexArray(handle));
        self.recorder
            .0
            .borrow_mut()
            .layouts
            .push((handle, buffer, layout));

        Ok(handle)
    }

    unsafe fn delete_vertex_array(&mut self, handle: VertexArrayHandle) -> Result<()> {
        self.remove(Resource::VertexArray(handle), handle.to_string())
    }

    unsafe fn update_surface_viewport(&mut self, vp: SurfaceViewport) -> Result<()> {
        self.recorder
            .0
            .borrow_mut()
            .commands
            .push(Command::Viewport(vp));
        Ok(())
    }

    unsafe fn clear(&mut self, color: Color<f32>) -> Result<()> {
        self.recorder
            .0
            .borrow_mut()
            .commands
            .push(Command::Clear(color));
        Ok(())
    }

    unsafe fn draw(
        &mut self,
        program: ProgramHandle,
        vertex_array: VertexArrayHandle,
        from: u32,
        len: u32,
    ) -> Result<u32> {
        self.ensure(Resource::Program(program), program.to_string())?;
        self.ensure(Resource::VertexArray(vertex_array), vertex_array.to_string())?;

        self.recorder.0.borrow_mut().commands.push(Command::Draw {
            program,
            vertex_array,
            from,
            len,
        });

        Ok(len)
    }
}
