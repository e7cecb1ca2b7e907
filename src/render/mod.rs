pub mod buffer;
pub mod context;
#[cfg(test)]
pub(crate) mod fake;
pub mod shaders;
pub mod window;

pub use context::{GlApi, Primitive, RenderingContext};
pub use shaders::{ShaderProgram, ShaderProgramBuilder};
