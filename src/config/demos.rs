use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsConfig {
    /// Smallest point size in pixels.
    pub min_size: f32,
    /// Sizes are drawn from `[min_size, min_size + size_jitter)`.
    pub size_jitter: f32,
    /// Fixed seed for the size generator; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            min_size: 10.0,
            size_jitter: 5.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub angle_degrees: f32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            angle_degrees: 120.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Rotation speed in degrees per second.
    pub angle_step: f32,
    /// Change applied by one speed-up or slow-down input.
    pub step_delta: f32,
    pub translate_x: f32,
    pub stop_after_secs: Option<f32>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            angle_step: 45.0,
            step_delta: 10.0,
            translate_x: 0.35,
            stop_after_secs: None,
        }
    }
}
