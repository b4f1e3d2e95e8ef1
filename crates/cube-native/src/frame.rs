use cube_core::{DrawCall, DrawTarget, PaletteKind, DRAW_SLOTS};
use glam::Mat4;
use smallvec::SmallVec;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Uniforms {
    pub mvp: [[f32; 4]; 4],
}

impl From<&Mat4> for Uniforms {
    fn from(m: &Mat4) -> Self {
        Self {
            mvp: m.to_cols_array_2d(),
        }
    }
}

/// Draw calls recorded during one frame, replayed into a render pass.
#[derive(Default)]
pub(crate) struct FrameDraws {
    calls: SmallVec<[DrawCall; DRAW_SLOTS]>,
}

impl FrameDraws {
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Calls that fit in the uniform slots, paired with their slot index.
    pub fn slotted(&self) -> impl Iterator<Item = (usize, &DrawCall)> {
        self.calls.iter().take(DRAW_SLOTS).enumerate()
    }
}

impl DrawTarget for FrameDraws {
    fn display(&mut self, matrix: &Mat4, palette: PaletteKind, depth_write: bool) {
        self.calls.push(DrawCall {
            matrix: *matrix,
            palette,
            depth_write,
        });
    }
}
