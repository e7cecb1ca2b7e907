pub mod config;
pub mod demos;
pub mod input;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use config::DemoConfig;
pub use demos::{Demo, DemoKind};
pub use render::context::{GlApi, RenderingContext};
pub use render::shaders::{init_shaders, ShaderError, ShaderKind, ShaderProgram, ShaderProgramBuilder};
pub use utils::error::DemoError;
