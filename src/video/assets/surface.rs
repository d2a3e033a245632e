use crate::math::prelude::Vector2;

/// The viewport of the default framebuffer, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceViewport {
    pub position: Vector2<i32>,
    pub size: Vector2<u32>,
}

impl SurfaceViewport {
    /// Covers the whole surface, with origin at (0, 0).
    pub fn full(size: Vector2<u32>) -> Self {
        SurfaceViewport {
            position: Vector2::new(0, 0),
            size,
        }
    }
}
