use crate::config::AnimationConfig;
use crate::demos::{Demo, TRIANGLE_VERTICES};
use crate::input::DemoInput;
use crate::render::buffer::init_vertex_buffer;
use crate::render::context::{GlApi, Primitive, RenderingContext};
use crate::render::shaders::ShaderProgramBuilder;
use crate::utils::error::Result;
use crate::utils::math::orbit_matrix;
use log::{info, warn};
use std::time::{Duration, Instant};

pub const VERTEX_SRC: &str = r#"
    attribute vec4 a_Position;
    uniform mat4 u_ModelMatrix;
    void main() {
        gl_Position = u_ModelMatrix * a_Position;
    }
"#;

pub const FRAGMENT_SRC: &str = r#"
    void main() {
        gl_FragColor = vec4(1.0, 0.0, 0.0, 1.0);
    }
"#;

/// Rotation state advanced by [`AnimationState::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Degrees, kept in (-360, 360).
    pub angle: f32,
    /// Degrees per second. May go negative.
    pub angle_step: f32,
    pub running: bool,
    pub run_time: Duration,
    pub stop_after: Option<Duration>,
}

impl AnimationState {
    pub fn new(angle_step: f32, stop_after: Option<Duration>) -> Self {
        Self {
            angle: 0.0,
            angle_step,
            running: true,
            run_time: Duration::ZERO,
            stop_after,
        }
    }

    /// Advances the angle by `elapsed`. A stopped state is returned as is.
    pub fn tick(self, elapsed: Duration) -> Self {
        if !self.running {
            return self;
        }
        let angle = (self.angle + self.angle_step * elapsed.as_secs_f32()) % 360.0;
        let run_time = self.run_time + elapsed;
        let running = self.stop_after.map_or(true, |limit| run_time < limit);
        Self {
            angle,
            run_time,
            running,
            ..self
        }
    }

    pub fn accelerate(self, delta: f32) -> Self {
        Self {
            angle_step: self.angle_step + delta,
            ..self
        }
    }

    pub fn stop(self) -> Self {
        Self {
            running: false,
            ..self
        }
    }
}

/// Converts a configured run time to a limit. Values that do not fit a
/// `Duration` (negative, NaN, too large) mean no limit.
pub fn stop_limit(secs: Option<f32>) -> Option<Duration> {
    let secs = secs?;
    match Duration::try_from_secs_f32(secs) {
        Ok(limit) => Some(limit),
        Err(e) => {
            warn!("Ignoring stop_after_secs = {}: {}", secs, e);
            None
        }
    }
}

/// Time between frames, measured against instants supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new(start: Instant) -> Self {
        Self { last: start }
    }

    /// Restarts measurement at `now` without reporting elapsed time.
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
    }

    pub fn elapsed(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed
    }
}

/// The triangle orbiting the origin at an adjustable speed.
pub struct RotatingTriangle<G: GlApi> {
    state: AnimationState,
    vertex_count: usize,
    u_model_matrix: G::UniformLocation,
    translate_x: f32,
    step_delta: f32,
}

impl<G: GlApi> RotatingTriangle<G> {
    pub fn new(
        ctx: &mut RenderingContext<G>,
        config: &AnimationConfig,
        clear_color: [f32; 4],
    ) -> Result<Self> {
        ShaderProgramBuilder::build(ctx, VERTEX_SRC, FRAGMENT_SRC)?;
        let vertex_count = init_vertex_buffer(ctx, &TRIANGLE_VERTICES, 2, "a_Position")?;
        let u_model_matrix = ctx.uniform_location("u_ModelMatrix")?;
        ctx.gl().clear_color(clear_color);

        let stop_after = stop_limit(config.stop_after_secs);

        Ok(Self {
            state: AnimationState::new(config.angle_step, stop_after),
            vertex_count,
            u_model_matrix,
            translate_x: config.translate_x,
            step_delta: config.step_delta,
        })
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }
}

impl<G: GlApi> Demo<G> for RotatingTriangle<G> {
    fn name(&self) -> &'static str {
        "animation"
    }

    fn handle_input(&mut self, input: DemoInput) -> bool {
        self.state = match input {
            DemoInput::SpeedUp => self.state.accelerate(self.step_delta),
            DemoInput::SpeedDown => self.state.accelerate(-self.step_delta),
            DemoInput::Stop => self.state.stop(),
            DemoInput::Press { .. } => return false,
        };
        info!("Rotation speed {} deg/s", self.state.angle_step);
        true
    }

    fn update(&mut self, elapsed: Duration) {
        self.state = self.state.tick(elapsed);
    }

    fn draw(&mut self, ctx: &RenderingContext<G>) {
        let gl = ctx.gl();
        let model = orbit_matrix(self.state.angle, self.translate_x).to_cols_array();
        gl.uniform_matrix_4fv(&self.u_model_matrix, &model);
        gl.clear_color_buffer();
        gl.draw_arrays(Primitive::Triangles, 0, self.vertex_count as i32);
    }

    fn is_animated(&self) -> bool {
        self.state.running
    }
}
