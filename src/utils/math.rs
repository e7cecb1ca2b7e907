use glam::{Mat4, Vec2, Vec3};

/// Maps a pixel position (origin top-left, y down) on a canvas of
/// `canvas` pixels to clip space (origin centre, y up).
pub fn canvas_to_clip(position: Vec2, canvas: Vec2) -> Vec2 {
    let half = canvas / 2.0;
    Vec2::new((position.x - half.x) / half.x, (half.y - position.y) / half.y)
}

pub fn rotation_z(degrees: f32) -> Mat4 {
    Mat4::from_rotation_z(degrees.to_radians())
}

/// Rotation about Z applied after a translation along X.
pub fn orbit_matrix(degrees: f32, translate_x: f32) -> Mat4 {
    rotation_z(degrees) * Mat4::from_translation(Vec3::new(translate_x, 0.0, 0.0))
}
