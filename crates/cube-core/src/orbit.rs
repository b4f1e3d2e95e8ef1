use crate::constants::{LIGHT_ORBIT_STEP_DEG, LIGHT_RADIUS_FACTOR, SCALE};
use crate::shadow::LightPosition;
use glam::Vec4;

/// Light circling the box in the XY plane at a fixed height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitState {
    pub angle_deg: f32,
    pub radius: f32,
    pub height: f32,
    pub step_deg: f32,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            angle_deg: 0.0,
            radius: SCALE * LIGHT_RADIUS_FACTOR,
            height: SCALE,
            step_deg: LIGHT_ORBIT_STEP_DEG,
        }
    }
}

impl OrbitState {
    /// Light position for the current angle, without advancing.
    pub fn light_position(&self) -> LightPosition {
        let rad = self.angle_deg.to_radians();
        Vec4::new(rad.cos() * self.radius, rad.sin() * self.radius, self.height, 1.0)
    }
}

/// Step the orbit by one frame and return the new state with its light.
///
/// Call once per frame, before the shadow matrix is rebuilt.
pub fn advance_light_orbit(state: OrbitState) -> (OrbitState, LightPosition) {
    let next = OrbitState {
        angle_deg: (state.angle_deg + state.step_deg).rem_euclid(360.0),
        ..state
    };
    (next, next.light_position())
}
