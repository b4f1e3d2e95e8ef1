pub mod constants;
pub mod cube;
pub mod error;
pub mod geometry;
pub mod orbit;
pub mod shadow;
pub mod state;

pub use constants::*;
pub use cube::*;
pub use error::SceneError;
pub use geometry::*;
pub use orbit::*;
pub use shadow::*;
pub use state::*;

// Shader bundled as a string constant
pub static CUBE_WGSL: &str = include_str!("../shaders/cube.wgsl");
pub const CUBE_SHADER_VERSION: u32 = 1;
