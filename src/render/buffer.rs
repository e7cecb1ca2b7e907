use crate::render::context::{GlApi, RenderingContext};
use crate::render::shaders::ShaderError;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("Failed to create the buffer object: {0}")]
    Creation(String),
    #[error("Vertex data length {len} is not a multiple of {components} components")]
    Misaligned { len: usize, components: usize },
    #[error(transparent)]
    Shader(#[from] ShaderError),
}

/// Uploads `vertices` into a fresh array buffer and feeds it to
/// `attribute` of the active program. Returns the vertex count.
pub fn init_vertex_buffer<G: GlApi>(
    ctx: &RenderingContext<G>,
    vertices: &[f32],
    components: usize,
    attribute: &str,
) -> Result<usize, BufferError> {
    if components == 0 || vertices.len() % components != 0 {
        return Err(BufferError::Misaligned {
            len: vertices.len(),
            components,
        });
    }

    let location = ctx.attrib_location(attribute)?;

    let gl = ctx.gl();
    let buffer = gl.create_buffer().map_err(BufferError::Creation)?;
    gl.upload_array_buffer(buffer, vertices);
    gl.vertex_attrib_pointer(location, components as i32);
    gl.enable_vertex_attrib_array(location);

    let count = vertices.len() / components;
    debug!("Buffered {} vertices for {}", count, attribute);
    Ok(count)
}
