use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("dimension mismatch: {left} vs {right} components")]
    DimensionMismatch { left: usize, right: usize },

    #[error("expected {expected} components, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("box {name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("orbit {name} must be finite and in range, got {value}")]
    InvalidOrbit { name: &'static str, value: f32 },

    #[error("light height {light_height} must be above the box top {box_top}")]
    LightBelowBoxTop { light_height: f32, box_top: f32 },
}

pub type Result<T> = std::result::Result<T, SceneError>;
