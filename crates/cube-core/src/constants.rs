use glam::{Vec3, Vec4};

// Shared geometry/lighting constants used by the core and the native host.

// Scene scale
pub const SCALE: f32 = 10_000.0; // map-sized units; keeps the box visible at map magnitudes
pub const LIGHT_RADIUS_FACTOR: f32 = 2.0; // orbit radius in multiples of SCALE
pub const LIGHT_ORBIT_STEP_DEG: f32 = 1.0; // advanced once per frame

// Ground plane ax + by + cz + d = 0
pub const GROUND_PLANE: [f32; 4] = [0.0, 0.0, 1.0, -0.1];

// Default box size, in SCALE units. The top face must stay below the light.
pub const DEFAULT_BOX_SIZE: [f32; 3] = [1.0, 1.0, 0.5];

// Box topology
pub const BOX_VERTEX_COUNT: usize = 8;
pub const BOX_INDEX_COUNT: usize = 36;

/// Triangle list joining the near (0..4) and far (4..8) faces.
///
/// The winding is part of the contract; do not reorder.
pub const BOX_INDICES: [u16; BOX_INDEX_COUNT] = [
    0, 4, 5, //
    0, 5, 1, //
    1, 5, 6, //
    1, 6, 2, //
    2, 6, 7, //
    2, 7, 3, //
    3, 7, 4, //
    3, 4, 0, //
    4, 7, 6, //
    4, 6, 5, //
    3, 0, 1, //
    3, 1, 2, //
];

pub const BOX_COLORS: [[f32; 4]; BOX_VERTEX_COUNT] = [
    [1.0, 0.0, 0.0, 1.0], // red
    [0.0, 1.0, 0.0, 1.0], // green
    [0.0, 0.0, 1.0, 1.0], // blue
    [1.0, 1.0, 0.0, 1.0], // yellow
    [0.0, 1.0, 1.0, 1.0], // cyan
    [1.0, 0.0, 1.0, 1.0], // magenta
    [0.0, 0.0, 0.0, 1.0], // black
    [1.0, 1.0, 1.0, 1.0], // white
];

pub const SHADOW_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// Camera placement for the native host (world units)
pub const CAMERA_EYE: [f32; 3] = [0.0, -5.5 * SCALE, 4.0 * SCALE];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.01 * SCALE;
pub const CAMERA_ZFAR: f32 = 50.0 * SCALE;

// Backdrop standing in for the map tiles
pub const CLEAR_COLOR: [f64; 4] = [0.86, 0.88, 0.83, 1.0];

// One uniform slot per draw call in a frame (object + shadow)
pub const DRAW_SLOTS: usize = 2;

#[inline]
pub fn ground_plane_vec4() -> Vec4 {
    Vec4::from_array(GROUND_PLANE)
}

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from_array(CAMERA_EYE)
}
