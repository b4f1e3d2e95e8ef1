//! Planar projective shadows and planar reflections.
//!
//! Matrices are column-major `glam::Mat4`, applied as `m * v`.

use crate::error::{Result, SceneError};
use glam::{Mat4, Vec3, Vec4};

/// Plane `a*x + b*y + c*z + d = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane(pub Vec4);

impl Plane {
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self(Vec4::new(a, b, c, d))
    }
}

impl From<[f32; 4]> for Plane {
    fn from(v: [f32; 4]) -> Self {
        Self(Vec4::from_array(v))
    }
}

impl TryFrom<&[f32]> for Plane {
    type Error = SceneError;

    fn try_from(v: &[f32]) -> Result<Self> {
        match *v {
            [a, b, c, d] => Ok(Self::new(a, b, c, d)),
            _ => Err(SceneError::WrongLength {
                expected: 4,
                got: v.len(),
            }),
        }
    }
}

/// Homogeneous light position: w = 1 for a point light, w = 0 for a
/// directional light.
pub type LightPosition = Vec4;

/// Matrix flattening geometry onto `plane` along rays from `light`.
///
/// `M = (plane . light) * I - light * plane^T`. Points already on the plane
/// are fixed (up to the homogeneous scale). If the light lies on the plane
/// the matrix is singular; that case is passed through as-is.
pub fn shadow_matrix(plane: Plane, light: LightPosition) -> Mat4 {
    let p = plane.0;
    let dot = p.dot(light);
    if dot == 0.0 {
        log::debug!("shadow light lies on the ground plane; projection is singular");
    }
    Mat4::from_cols(
        Vec4::X * dot - light * p.x,
        Vec4::Y * dot - light * p.y,
        Vec4::Z * dot - light * p.z,
        Vec4::W * dot - light * p.w,
    )
}

/// `mvp * shadow_matrix(plane, light)`, ready for the shadow draw.
pub fn compose_shadow(mvp: &Mat4, plane: Plane, light: LightPosition) -> Mat4 {
    *mvp * shadow_matrix(plane, light)
}

/// Reflection across the plane through `pos` with unit `normal`.
pub fn reflection_matrix(pos: Vec3, normal: Vec3) -> Mat4 {
    householder(normal, pos.dot(normal))
}

fn householder(n: Vec3, d: f32) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(1.0 - 2.0 * n.x * n.x, -2.0 * n.x * n.y, -2.0 * n.x * n.z, 0.0),
        Vec4::new(-2.0 * n.x * n.y, 1.0 - 2.0 * n.y * n.y, -2.0 * n.y * n.z, 0.0),
        Vec4::new(-2.0 * n.x * n.z, -2.0 * n.y * n.z, 1.0 - 2.0 * n.z * n.z, 0.0),
        Vec4::new(2.0 * d * n.x, 2.0 * d * n.y, 2.0 * d * n.z, 1.0),
    )
}

/// Dot product of two equally sized slices.
pub fn dot_checked(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(SceneError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Slice form of [`reflection_matrix`] for callers holding raw float arrays.
///
/// Both slices must have the same length, 3 or 4; a fourth component takes
/// part in the anchor dot product, as with a homogeneous point and a plane.
pub fn reflection_matrix_from_slices(pos: &[f32], normal: &[f32]) -> Result<Mat4> {
    let d = dot_checked(pos, normal)?;
    if !(3..=4).contains(&normal.len()) {
        return Err(SceneError::WrongLength {
            expected: 3,
            got: normal.len(),
        });
    }
    let n = Vec3::new(normal[0], normal[1], normal[2]);
    Ok(householder(n, d))
}
