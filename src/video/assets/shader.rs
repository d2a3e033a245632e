use std::fmt;

impl_handle!(ShaderHandle);
impl_handle!(ProgramHandle);

/// The step of a shader build, either compiling one pipeline stage or linking
/// them into a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Program,
}

impl ShaderStage {
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "VERTEX",
            ShaderStage::Fragment => "FRAGMENT",
            ShaderStage::Program => "PROGRAM",
        }
    }

    /// Returns true if failing this step is a compile error rather than a link error.
    pub fn is_compile(self) -> bool {
        self != ShaderStage::Program
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_compile() {
            write!(f, "{}::COMPILATION_FAILED", self.name())
        } else {
            write!(f, "{}::LINK_FAILED", self.name())
        }
    }
}
