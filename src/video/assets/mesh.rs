use std::mem;

impl_handle!(BufferHandle);
impl_handle!(VertexArrayHandle);

/// Describes how the bytes of a vertex buffer feed one shader input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    /// The shader input location.
    pub location: u32,
    /// Number of `f32` components per vertex.
    pub components: u8,
    /// Distance in bytes between two consecutive vertices.
    pub stride: u8,
    /// Offset in bytes of the first component.
    pub offset: usize,
}

impl VertexLayout {
    /// Tightly packed 3D positions bound to input location 0.
    pub fn position() -> Self {
        VertexLayout {
            location: 0,
            components: 3,
            stride: (3 * mem::size_of::<f32>()) as u8,
            offset: 0,
        }
    }
}
