pub mod core;
pub mod demos;
pub mod rendering;

pub use core::DemoConfig;
pub use demos::{AnimationConfig, PointsConfig, TransformConfig};
pub use rendering::{RenderConfig, WindowConfig};
