//! Crate error type

use crate::sim::LevelStatus;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Actor boxes must have a positive width and height
    #[error("actor size must be positive, got ({x}, {y})")]
    DegenerateSize { x: f32, y: f32 },
    #[error("timestep must be positive and finite, got {0}")]
    InvalidTimestep(f32),
    #[error("level set contains no levels")]
    EmptyLevelSet,
    #[error("level outcome is not decided yet (status {0:?})")]
    LevelNotFinished(LevelStatus),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
