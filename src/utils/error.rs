use crate::render::buffer::BufferError;
use crate::render::shaders::ShaderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Failed to initialize shaders: {0}")]
    Shader(#[from] ShaderError),

    #[error("Failed to set the positions of the vertices: {0}")]
    Buffer(#[from] BufferError),
}

pub type Result<T> = std::result::Result<T, DemoError>;
