use crate::config::TransformConfig;
use crate::demos::{Demo, TRIANGLE_VERTICES};
use crate::render::buffer::init_vertex_buffer;
use crate::render::context::{GlApi, Primitive, RenderingContext};
use crate::render::shaders::ShaderProgramBuilder;
use crate::utils::error::Result;
use crate::utils::math::rotation_z;
use log::debug;

// Row vector times matrix: the column-major upload of `rotation_z` is
// applied transposed, so the triangle turns clockwise.
pub const VERTEX_SRC: &str = r#"
    attribute vec4 a_Position;
    uniform mat4 u_xformMatrix;
    void main() {
        gl_Position = a_Position * u_xformMatrix;
    }
"#;

pub const FRAGMENT_SRC: &str = r#"
    void main() {
        gl_FragColor = vec4(1.0, 0.0, 0.0, 1.0);
    }
"#;

/// The triangle under a rotation uploaded once at startup.
pub struct RotatedTriangle {
    vertex_count: usize,
}

impl RotatedTriangle {
    pub fn new<G: GlApi>(
        ctx: &mut RenderingContext<G>,
        config: &TransformConfig,
        clear_color: [f32; 4],
    ) -> Result<Self> {
        ShaderProgramBuilder::build(ctx, VERTEX_SRC, FRAGMENT_SRC)?;
        let vertex_count = init_vertex_buffer(ctx, &TRIANGLE_VERTICES, 2, "a_Position")?;

        let u_xform_matrix = ctx.uniform_location("u_xformMatrix")?;
        let xform = rotation_z(config.angle_degrees).to_cols_array();
        ctx.gl().uniform_matrix_4fv(&u_xform_matrix, &xform);
        debug!("Rotation of {} degrees uploaded", config.angle_degrees);

        ctx.gl().clear_color(clear_color);
        Ok(Self { vertex_count })
    }
}

impl<G: GlApi> Demo<G> for RotatedTriangle {
    fn name(&self) -> &'static str {
        "transform"
    }

    fn draw(&mut self, ctx: &RenderingContext<G>) {
        let gl = ctx.gl();
        gl.clear_color_buffer();
        gl.draw_arrays(Primitive::Triangles, 0, self.vertex_count as i32);
    }
}
