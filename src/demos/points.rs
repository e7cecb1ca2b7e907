use crate::config::PointsConfig;
use crate::demos::Demo;
use crate::input::DemoInput;
use crate::render::context::{GlApi, Primitive, RenderingContext};
use crate::render::shaders::ShaderProgramBuilder;
use crate::utils::error::Result;
use crate::utils::math::canvas_to_clip;
use glam::Vec2;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const VERTEX_SRC: &str = r#"
    attribute vec4 a_Position;
    attribute float a_PointSize;
    void main() {
        gl_Position = a_Position;
        gl_PointSize = a_PointSize;
    }
"#;

pub const FRAGMENT_SRC: &str = r#"
    precision mediump float;
    uniform vec4 u_FragColor;
    void main() {
        gl_FragColor = u_FragColor;
    }
"#;

pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredPoint {
    pub position: Vec2,
    pub color: [f32; 4],
}

/// Red in the first quadrant, green in the third, white elsewhere.
pub fn quadrant_color(position: Vec2) -> [f32; 4] {
    if position.x >= 0.0 && position.y >= 0.0 {
        RED
    } else if position.x < 0.0 && position.y < 0.0 {
        GREEN
    } else {
        WHITE
    }
}

/// Every point clicked so far, in click order. Grows without bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointScene {
    points: Vec<ColoredPoint>,
}

impl PointScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn click(mut self, position: Vec2, canvas_size: Vec2) -> Self {
        let position = canvas_to_clip(position, canvas_size);
        self.points.push(ColoredPoint {
            position,
            color: quadrant_color(position),
        });
        self
    }

    pub fn points(&self) -> &[ColoredPoint] {
        &self.points
    }
}

/// Click anywhere to add a point; the whole scene is redrawn each time.
pub struct ColoredPoints<G: GlApi> {
    scene: PointScene,
    a_position: u32,
    a_point_size: u32,
    u_frag_color: G::UniformLocation,
    min_size: f32,
    size_jitter: f32,
    rng: ChaCha8Rng,
}

impl<G: GlApi> ColoredPoints<G> {
    pub fn new(
        ctx: &mut RenderingContext<G>,
        config: &PointsConfig,
        clear_color: [f32; 4],
    ) -> Result<Self> {
        ShaderProgramBuilder::build(ctx, VERTEX_SRC, FRAGMENT_SRC)?;

        let a_position = ctx.attrib_location("a_Position")?;
        let a_point_size = ctx.attrib_location("a_PointSize")?;
        let u_frag_color = ctx.uniform_location("u_FragColor")?;

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let gl = ctx.gl();
        gl.clear_color(clear_color);
        gl.clear_color_buffer();

        Ok(Self {
            scene: PointScene::new(),
            a_position,
            a_point_size,
            u_frag_color,
            min_size: config.min_size,
            size_jitter: config.size_jitter,
            rng,
        })
    }

    pub fn scene(&self) -> &PointScene {
        &self.scene
    }

    fn point_size(&mut self) -> f32 {
        self.rng.gen::<f32>() * self.size_jitter + self.min_size
    }
}

impl<G: GlApi> Demo<G> for ColoredPoints<G> {
    fn name(&self) -> &'static str {
        "points"
    }

    fn handle_input(&mut self, input: DemoInput) -> bool {
        match input {
            // A minimised window reports a zero-sized canvas.
            DemoInput::Press { canvas_size, .. }
                if canvas_size.x <= 0.0 || canvas_size.y <= 0.0 =>
            {
                false
            }
            DemoInput::Press {
                position,
                canvas_size,
            } => {
                self.scene = std::mem::take(&mut self.scene).click(position, canvas_size);
                debug!("{} points in scene", self.scene.points().len());
                true
            }
            _ => false,
        }
    }

    fn draw(&mut self, ctx: &RenderingContext<G>) {
        let gl = ctx.gl();
        gl.clear_color_buffer();

        for index in 0..self.scene.points.len() {
            let ColoredPoint { position, color } = self.scene.points[index];
            let size = self.point_size();
            gl.vertex_attrib_3f(self.a_position, position.x, position.y, 0.0);
            gl.vertex_attrib_1f(self.a_point_size, size);
            gl.uniform_4f(&self.u_frag_color, color);
            gl.draw_arrays(Primitive::Points, 0, 1);
        }
    }
}
