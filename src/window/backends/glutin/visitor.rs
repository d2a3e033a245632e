use gl;
use glutin;
use glutin::GlContext;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::super::super::events::Event;
use super::super::super::WindowParams;
use super::super::Visitor;
use super::types;

pub struct GlutinVisitor {
    window: glutin::GlWindow,
    events_loop: glutin::EventsLoop,
    fallback: Vector2<u32>,
}

impl GlutinVisitor {
    pub fn from(params: WindowParams) -> Result<Self> {
        let builder = glutin::WindowBuilder::new()
            .with_title(params.title)
            .with_dimensions(glutin::dpi::LogicalSize::new(
                f64::from(params.size.x),
                f64::from(params.size.y),
            ));

        let (major, minor) = params.gl_version;
        let context = glutin::ContextBuilder::new()
            .with_multisampling(params.multisample)
            .with_gl_profile(glutin::GlProfile::Core)
            .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, (major, minor)))
            .with_vsync(params.vsync);

        let events_loop = glutin::EventsLoop::new();
        let window = glutin::GlWindow::new(builder, context, &events_loop)?;

        let visitor = GlutinVisitor {
            window,
            events_loop,
            fallback: params.size,
        };

        unsafe {
            visitor
                .window
                .make_current()
                .map_err(|err| Error::ResourceCreation("GL context", format!("{}", err)))?;

            gl::load_with(|symbol| visitor.window.get_proc_address(symbol) as *const _);
        }

        info!(
            "Created window with {}x{} framebuffer, OpenGL {}.{} core profile requested.",
            visitor.dimensions().x,
            visitor.dimensions().y,
            major,
            minor
        );

        Ok(visitor)
    }
}

impl Visitor for GlutinVisitor {
    fn dimensions(&self) -> Vector2<u32> {
        match self.window.get_inner_size() {
            Some(size) => {
                let size = size.to_physical(self.window.get_hidpi_factor());
                Vector2::new(size.width as u32, size.height as u32)
            }
            None => self.fallback,
        }
    }

    #[inline]
    fn resize(&self, dimensions: Vector2<u32>) {
        let size = glutin::dpi::PhysicalSize::new(f64::from(dimensions.x), f64::from(dimensions.y));
        self.window.resize(size)
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        let dpr = self.window.get_hidpi_factor();
        self.events_loop.poll_events(|v| {
            if let Some(e) = types::from_event(v, dpr) {
                events.push(e);
            }
        });
    }

    #[inline]
    fn is_current(&self) -> bool {
        self.window.is_current()
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        unsafe {
            self.window.make_current()?;
            Ok(())
        }
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        self.window.swap_buffers()?;
        Ok(())
    }
}
