//! Per-frame draw orchestration for the box and its planar shadow.
//!
//! The box is drawn twice per frame: once with its own colors and depth
//! writes, once flattened onto the ground plane in black without depth
//! writes. Both go through [`DrawTarget::display`], which the host implements
//! on top of its graphics API.

use crate::geometry::{build_box, BoxGeometry, PaletteKind};
use crate::orbit::{advance_light_orbit, OrbitState};
use crate::shadow::{compose_shadow, LightPosition, Plane};
use crate::state::SceneConfig;
use glam::Mat4;

/// Sink for draw calls: bind position/color inputs, set the matrix uniform,
/// issue the indexed triangle draw, release the bindings.
pub trait DrawTarget {
    fn display(&mut self, matrix: &Mat4, palette: PaletteKind, depth_write: bool);
}

/// Arguments of a single `display` call, for targets that replay later.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    pub matrix: Mat4,
    pub palette: PaletteKind,
    pub depth_write: bool,
}

impl DrawTarget for Vec<DrawCall> {
    fn display(&mut self, matrix: &Mat4, palette: PaletteKind, depth_write: bool) {
        self.push(DrawCall {
            matrix: *matrix,
            palette,
            depth_write,
        });
    }
}

pub struct ShadowedCube {
    geometry: BoxGeometry,
    ground: Plane,
    orbit: OrbitState,
}

impl ShadowedCube {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        let config = SceneConfig {
            box_size: [width, height, depth],
            ..SceneConfig::default()
        };
        Self::from_config(&config)
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        let [w, h, d] = config.box_size;
        Self {
            geometry: build_box(w, h, d),
            ground: config.ground,
            orbit: config.orbit(),
        }
    }

    pub fn geometry(&self) -> &BoxGeometry {
        &self.geometry
    }

    pub fn ground(&self) -> Plane {
        self.ground
    }

    pub fn orbit(&self) -> OrbitState {
        self.orbit
    }

    pub fn light_position(&self) -> LightPosition {
        self.orbit.light_position()
    }

    pub fn draw_object<T: DrawTarget + ?Sized>(&self, target: &mut T, mvp: &Mat4) {
        target.display(mvp, PaletteKind::Full, true);
    }

    /// Advances the light, then draws the flattened box with `mvp * shadow`.
    pub fn draw_shadow<T: DrawTarget + ?Sized>(&mut self, target: &mut T, mvp: &Mat4) {
        let (orbit, light) = advance_light_orbit(self.orbit);
        self.orbit = orbit;
        let matrix = compose_shadow(mvp, self.ground, light);
        log::trace!(
            "shadow light angle={:.0} pos=({:.0},{:.0},{:.0})",
            orbit.angle_deg,
            light.x,
            light.y,
            light.z
        );
        target.display(&matrix, PaletteKind::Black, false);
    }
}
