use gl;
use gl::types::*;
use std::cmp;
use std::ffi;

use crate::errors::*;

/// Describes the OpenGL context profile.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Profile {
    /// The context uses only future-compatible functions and definitions.
    Core,
    /// The context includes all immediate mode functions and definitions.
    Compatibility,
}

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
/// For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and `Version::ES(3, 0) >=
/// Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl Version {
    /// Obtains the OpenGL version of the current context using the loaded functions.
    ///
    /// # Unsafe
    ///
    /// You must ensure that the functions belong to the current context, otherwise you will get
    /// an undefined behavior.
    pub unsafe fn parse() -> Result<Version> {
        let desc = parse_str(gl::VERSION)?;
        Version::from_description(&desc)
    }

    /// Parses the content of `GL_VERSION`, e.g. `4.1 Metal - 76.3` or `OpenGL ES 3.0 Mesa`.
    pub fn from_description(desc: &str) -> Result<Version> {
        let malformed = || {
            Error::ResourceCreation(
                "GL capabilities",
                format!("Version string {:?} is malformed.", desc),
            )
        };

        // ES 1.x reports a profile after the dash, e.g. `OpenGL ES-CM 1.1`.
        let (es, rest) = if desc.starts_with("OpenGL ES-") {
            let rest = desc.get(10..).and_then(|v| v.splitn(2, ' ').nth(1));
            (true, rest.ok_or_else(malformed)?)
        } else if desc.starts_with("OpenGL ES ") {
            (true, desc.get(10..).ok_or_else(malformed)?)
        } else {
            (false, desc)
        };

        let number = rest.split(' ').next().ok_or_else(malformed)?;
        let mut iter = number.split('.');
        let major = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;
        let minor = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }

    /// Returns true if vertex array objects are part of this version's core.
    pub fn has_vertex_array_objects(self) -> bool {
        self >= Version::GL(3, 0) || self >= Version::ES(3, 0)
    }
}

/// Represents the capabilities of the context.
///
/// Contrary to the state, these values never change.
#[derive(Debug)]
pub struct Capabilities {
    /// Returns a version or release number. Vendor-specific information may follow the version
    /// number.
    pub version: Version,

    /// The company responsible for this GL implementation.
    pub vendor: String,

    /// The name of the renderer. This name is typically specific to a particular
    /// configuration of a hardware platform.
    pub renderer: String,

    /// The version of the shading language.
    pub shading_language: String,

    /// The OpenGL context profile if available.
    ///
    /// The context profile is available from OpenGL 3.2 onwards. `None` if not supported.
    pub profile: Option<Profile>,

    /// Maximum width and height of `glViewport`.
    pub max_viewport_dims: (u32, u32),
}

impl Capabilities {
    pub unsafe fn parse() -> Result<Capabilities> {
        let version = Version::parse()?;

        Ok(Capabilities {
            version,
            vendor: parse_str(gl::VENDOR)?,
            renderer: parse_str(gl::RENDERER)?,
            shading_language: parse_str(gl::SHADING_LANGUAGE_VERSION)?,
            profile: Capabilities::parse_profile(version),
            max_viewport_dims: Capabilities::parse_viewport_dims(),
        })
    }

    /// Rejects contexts that can not run the renderer.
    pub fn check(&self) -> Result<()> {
        if !self.version.has_vertex_array_objects() {
            return Err(Error::ResourceCreation(
                "GL capabilities",
                format!(
                    "{:?} does not support vertex array objects, \
                     at least GL 3.0 or ES 3.0 is required.",
                    self.version
                ),
            ));
        }

        Ok(())
    }

    #[inline]
    unsafe fn parse_viewport_dims() -> (u32, u32) {
        let mut val: [GLint; 2] = [0, 0];
        gl::GetIntegerv(gl::MAX_VIEWPORT_DIMS, val.as_mut_ptr());
        (val[0] as u32, val[1] as u32)
    }

    #[inline]
    unsafe fn parse_profile(version: Version) -> Option<Profile> {
        if version >= Version::GL(3, 2) {
            let mut val: GLint = 0;
            gl::GetIntegerv(gl::CONTEXT_PROFILE_MASK, &mut val);
            let val = val as GLenum;
            if (val & gl::CONTEXT_COMPATIBILITY_PROFILE_BIT) != 0 {
                Some(Profile::Compatibility)
            } else if (val & gl::CONTEXT_CORE_PROFILE_BIT) != 0 {
                Some(Profile::Core)
            } else {
                None
            }
        } else {
            None
        }
    }
}

#[inline]
unsafe fn parse_str(id: GLenum) -> Result<String> {
    let s = gl::GetString(id);
    if s.is_null() {
        return Err(Error::ResourceCreation(
            "GL capabilities",
            format!("String of {:#x} is null.", id),
        ));
    }

    let bytes = ffi::CStr::from_ptr(s as *const _).to_bytes().to_vec();
    String::from_utf8(bytes).map_err(|_| {
        Error::ResourceCreation(
            "GL capabilities",
            format!("String of {:#x} is malformed.", id),
        )
    })
}

/// Makes sure that every entry point used by the backend has been resolved.
pub fn check_loaded() -> Result<()> {
    macro_rules! require {
        ($($func:ident),+ $(,)*) => {
            $(
                if !gl::$func::is_loaded() {
                    return Err(Error::ResourceCreation(
                        "OpenGL loader",
                        format!("gl{} could not be resolved.", stringify!($func)),
                    ));
                }
            )+
        };
    }

    require!(
        GetString,
        GetIntegerv,
        GetError,
        CreateShader,
        ShaderSource,
        CompileShader,
        GetShaderiv,
        GetShaderInfoLog,
        DeleteShader,
        CreateProgram,
        AttachShader,
        DetachShader,
        LinkProgram,
        GetProgramiv,
        GetProgramInfoLog,
        DeleteProgram,
        UseProgram,
        GenBuffers,
        BindBuffer,
        BufferData,
        DeleteBuffers,
        GenVertexArrays,
        BindVertexArray,
        VertexAttribPointer,
        EnableVertexAttribArray,
        DeleteVertexArrays,
        Viewport,
        ClearColor,
        Clear,
        DrawArrays,
    );

    Ok(())
}
