use crate::demos::{Demo, TRIANGLE_VERTICES};
use crate::render::buffer::init_vertex_buffer;
use crate::render::context::{GlApi, Primitive, RenderingContext};
use crate::render::shaders::ShaderProgramBuilder;
use crate::utils::error::Result;

pub const VERTEX_SRC: &str = r#"
    attribute vec4 a_Position;
    void main() {
        gl_Position = a_Position;
    }
"#;

pub const FRAGMENT_SRC: &str = r#"
    void main() {
        gl_FragColor = vec4(1.0, 0.0, 0.0, 1.0);
    }
"#;

pub struct Triangle {
    vertex_count: usize,
}

impl Triangle {
    pub fn new<G: GlApi>(ctx: &mut RenderingContext<G>, clear_color: [f32; 4]) -> Result<Self> {
        ShaderProgramBuilder::build(ctx, VERTEX_SRC, FRAGMENT_SRC)?;
        let vertex_count = init_vertex_buffer(ctx, &TRIANGLE_VERTICES, 2, "a_Position")?;
        ctx.gl().clear_color(clear_color);
        Ok(Self { vertex_count })
    }
}

impl<G: GlApi> Demo<G> for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn draw(&mut self, ctx: &RenderingContext<G>) {
        let gl = ctx.gl();
        gl.clear_color_buffer();
        gl.draw_arrays(Primitive::Triangles, 0, self.vertex_count as i32);
    }
}
