use gl;
use gl::types::*;

use super::super::super::assets::prelude::*;

/// Returns the shader object type of a compile stage.
pub fn shader_type(stage: ShaderStage) -> Option<GLenum> {
    match stage {
        ShaderStage::Vertex => Some(gl::VERTEX_SHADER),
        ShaderStage::Fragment => Some(gl::FRAGMENT_SHADER),
        ShaderStage::Program => None,
    }
}

/// Describes an error code returned by `glGetError`.
pub fn describe_error(code: GLenum) -> &'static str {
    match code {
        gl::INVALID_ENUM => "An unacceptable value is specified for an enumerated argument.",
        gl::INVALID_VALUE => "A numeric argument is out of range.",
        gl::INVALID_OPERATION => "The specified operation is not allowed in the current state.",
        gl::INVALID_FRAMEBUFFER_OPERATION => {
            "The command is trying to render to or read from the framebuffer while the \
             currently bound framebuffer is not framebuffer complete."
        }
        gl::OUT_OF_MEMORY => "There is not enough memory left to execute the command.",
        _ => "Oops, Unknown OpenGL error.",
    }
}
