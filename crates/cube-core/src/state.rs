//! Camera and scene configuration shared with the native host.
//!
//! These types avoid platform-specific APIs. The host builds the MVP matrix
//! from [`Camera`] and the drawable from [`SceneConfig`].

use crate::constants::{
    camera_eye_vec3, ground_plane_vec4, CAMERA_FOVY_DEG, CAMERA_TARGET, CAMERA_ZFAR,
    CAMERA_ZNEAR, DEFAULT_BOX_SIZE, LIGHT_ORBIT_STEP_DEG, LIGHT_RADIUS_FACTOR, SCALE,
};
use crate::error::{Result, SceneError};
use crate::geometry::build_box;
use crate::orbit::OrbitState;
use crate::shadow::Plane;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera looking down at the box from the default placement, Z up.
    pub fn looking_at_box(aspect: f32) -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: Vec3::from_array(CAMERA_TARGET),
            up: Vec3::Z,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    /// Model-view-projection; the box is modeled in world space.
    pub fn mvp(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Runtime-tunable scene parameters. `Default` matches the constants.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub box_size: [f32; 3],
    pub ground: Plane,
    pub light_radius_factor: f32,
    pub orbit_step_deg: f32,
    pub initial_angle_deg: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            box_size: DEFAULT_BOX_SIZE,
            ground: Plane(ground_plane_vec4()),
            light_radius_factor: LIGHT_RADIUS_FACTOR,
            orbit_step_deg: LIGHT_ORBIT_STEP_DEG,
            initial_angle_deg: 0.0,
        }
    }
}

impl SceneConfig {
    pub fn orbit(&self) -> OrbitState {
        OrbitState {
            angle_deg: self.initial_angle_deg.rem_euclid(360.0),
            radius: SCALE * self.light_radius_factor,
            step_deg: self.orbit_step_deg,
            ..OrbitState::default()
        }
    }

    /// Reject sizes the geometry builder would accept silently, and orbit
    /// settings that would put NaN or a backwards angle into the light.
    ///
    /// The light must also clear the top face, otherwise the top vertices
    /// project behind the light and the shadow turns inside out.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in ["width", "height", "depth"].into_iter().zip(self.box_size) {
            if !(value.is_finite() && value > 0.0) {
                return Err(SceneError::InvalidDimension { name, value });
            }
        }
        if !(self.light_radius_factor.is_finite() && self.light_radius_factor > 0.0) {
            return Err(SceneError::InvalidOrbit {
                name: "light_radius_factor",
                value: self.light_radius_factor,
            });
        }
        // one step must move the light forward by less than a full turn
        if !(self.orbit_step_deg.is_finite()
            && self.orbit_step_deg > 0.0
            && self.orbit_step_deg < 360.0)
        {
            return Err(SceneError::InvalidOrbit {
                name: "orbit_step_deg",
                value: self.orbit_step_deg,
            });
        }
        if !self.initial_angle_deg.is_finite() {
            return Err(SceneError::InvalidOrbit {
                name: "initial_angle_deg",
                value: self.initial_angle_deg,
            });
        }
        let [w, h, d] = self.box_size;
        let box_top = build_box(w, h, d).top();
        let light_height = self.orbit().height;
        if light_height <= box_top {
            return Err(SceneError::LightBelowBoxTop {
                light_height,
                box_top,
            });
        }
        Ok(())
    }
}
