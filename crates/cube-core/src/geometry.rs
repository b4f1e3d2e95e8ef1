//! Vertex, index and color data for the axis-aligned box.
//!
//! Dimensions are given in scene units and multiplied by [`SCALE`] so the box
//! stays visible next to map-sized coordinates. The near face sits on z=0 and
//! the far face on z=depth; x and y are centered on the origin.

use crate::constants::{
    BOX_COLORS, BOX_INDEX_COUNT, BOX_INDICES, BOX_VERTEX_COUNT, SCALE, SHADOW_COLOR,
};

/// Eight RGBA quads, one per box vertex.
pub type ColorPalette = [[f32; 4]; BOX_VERTEX_COUNT];

#[derive(Clone, Debug, PartialEq)]
pub struct BoxGeometry {
    pub vertices: [[f32; 3]; BOX_VERTEX_COUNT],
    pub indices: &'static [u16; BOX_INDEX_COUNT],
    pub colors_full: ColorPalette,
    pub colors_black: ColorPalette,
}

/// Build the box. No validation is done here; see `SceneConfig::validate`.
pub fn build_box(width: f32, height: f32, depth: f32) -> BoxGeometry {
    let w = width * SCALE / 2.0;
    let h = height * SCALE / 2.0;
    // depth is not halved: z stays non-negative
    let d = depth * SCALE;

    let vertices = [
        [-w, -h, 0.0],
        [w, -h, 0.0],
        [w, h, 0.0],
        [-w, h, 0.0],
        [-w, -h, d],
        [w, -h, d],
        [w, h, d],
        [-w, h, d],
    ];

    BoxGeometry {
        vertices,
        indices: &BOX_INDICES,
        colors_full: BOX_COLORS,
        colors_black: [SHADOW_COLOR; BOX_VERTEX_COUNT],
    }
}

impl BoxGeometry {
    /// Height of the far face above z=0.
    pub fn top(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v[2])
            .fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.indices)
    }

    pub fn palette(&self, kind: PaletteKind) -> &ColorPalette {
        match kind {
            PaletteKind::Full => &self.colors_full,
            PaletteKind::Black => &self.colors_black,
        }
    }

    pub fn palette_bytes(&self, kind: PaletteKind) -> &[u8] {
        bytemuck::cast_slice(self.palette(kind))
    }
}

/// Which of the two palettes a draw uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    Full,
    Black,
}
