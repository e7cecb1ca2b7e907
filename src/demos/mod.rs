pub mod animation;
pub mod points;
pub mod transform;
pub mod triangle;

use crate::config::DemoConfig;
use crate::input::DemoInput;
use crate::render::context::{GlApi, RenderingContext};
use crate::utils::error::Result;
use std::time::Duration;

pub use animation::{AnimationState, FrameClock, RotatingTriangle};
pub use points::{ColoredPoints, PointScene};
pub use transform::RotatedTriangle;
pub use triangle::Triangle;

/// The triangle shared by the triangle, transform and animation demos.
pub const TRIANGLE_VERTICES: [f32; 6] = [0.0, 0.5, -0.5, -0.5, 0.5, -0.5];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DemoKind {
    /// Click to drop colored points
    Points,
    /// A single red triangle
    Triangle,
    /// The triangle under a static rotation
    Transform,
    /// The triangle orbiting the origin, speed on arrow keys
    Animation,
}

/// One self-contained demo. Built after its program is active on the
/// context; every later call assumes that program is still current.
pub trait Demo<G: GlApi> {
    fn name(&self) -> &'static str;

    /// Returns true when the input changed what should be on screen.
    fn handle_input(&mut self, _input: DemoInput) -> bool {
        false
    }

    fn update(&mut self, _elapsed: Duration) {}

    fn draw(&mut self, ctx: &RenderingContext<G>);

    /// Whether the demo wants a redraw every frame.
    fn is_animated(&self) -> bool {
        false
    }
}

pub fn create<G: GlApi + 'static>(
    kind: DemoKind,
    ctx: &mut RenderingContext<G>,
    config: &DemoConfig,
) -> Result<Box<dyn Demo<G>>> {
    let clear_color = config.rendering.clear_color;
    let demo: Box<dyn Demo<G>> = match kind {
        DemoKind::Points => Box::new(ColoredPoints::new(ctx, &config.points, clear_color)?),
        DemoKind::Triangle => Box::new(Triangle::new(ctx, clear_color)?),
        DemoKind::Transform => {
            Box::new(RotatedTriangle::new(ctx, &config.transform, clear_color)?)
        }
        DemoKind::Animation => {
            Box::new(RotatingTriangle::new(ctx, &config.animation, clear_color)?)
        }
    };
    Ok(demo)
}
