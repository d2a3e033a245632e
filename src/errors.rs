//! Error kinds reported while setting up or driving the frame renderer.

use glutin;

use crate::video::assets::ShaderStage;

#[derive(Debug, Fail)]
pub enum Error {
    /// The window, the GL context, the function loader or a GPU object could
    /// not be created.
    #[fail(display = "Failed to create {}: {}", _0, _1)]
    ResourceCreation(&'static str, String),
    /// A shader stage failed to compile, or a program failed to link. `log`
    /// holds the diagnostic text of the failing object.
    #[fail(display = "ERROR::SHADER::{}\n{}", stage, log)]
    ShaderBuild { stage: ShaderStage, log: String },
    /// Presenting the back buffer or re-binding the context failed.
    #[fail(display = "Failed to present frame: {}", _0)]
    Present(String),
    /// A GPU object was used or released after it had been deleted, or was
    /// never created by this backend.
    #[fail(display = "{} is invalid.", _0)]
    HandleInvalid(String),
    #[fail(display = "Invalid settings: {}", _0)]
    Settings(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl Error {
    /// Returns the shader stage associated with this error, if any.
    pub fn shader_stage(&self) -> Option<ShaderStage> {
        match *self {
            Error::ShaderBuild { stage, .. } => Some(stage),
            _ => None,
        }
    }
}

impl From<glutin::CreationError> for Error {
    fn from(err: glutin::CreationError) -> Error {
        Error::ResourceCreation("window", format!("{}", err))
    }
}

impl From<glutin::ContextError> for Error {
    fn from(err: glutin::ContextError) -> Error {
        Error::Present(format!("{}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Settings(format!("{}", err))
    }
}
