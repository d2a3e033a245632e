//! Handles and descriptors of the GPU objects owned by the renderer.

/// Declares a wrapper around the opaque object name returned by the graphics API.
macro_rules! impl_handle {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub fn new(id: u32) -> Self {
                $name(id)
            }

            /// The object name as known by the graphics API.
            #[inline]
            pub fn id(&self) -> u32 {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

pub mod mesh;
pub mod shader;
pub mod surface;

pub use self::mesh::{BufferHandle, VertexArrayHandle, VertexLayout};
pub use self::shader::{ProgramHandle, ShaderHandle, ShaderStage};
pub use self::surface::SurfaceViewport;

pub mod prelude {
    pub use super::mesh::{BufferHandle, VertexArrayHandle, VertexLayout};
    pub use super::shader::{ProgramHandle, ShaderHandle, ShaderStage};
    pub use super::surface::SurfaceViewport;
}
