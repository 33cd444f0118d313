//! Errors raised while building a session from body descriptors.

use thiserror::Error;

/// A malformed body descriptor. Detected once at construction; the frame loop never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrreryError {
    #[error("{name}: aphelion {aphelion} must exceed perihelion {perihelion}")]
    InvalidEllipse {
        name: String,
        perihelion: f64,
        aphelion: f64,
    },

    #[error("{name}: perihelion must be positive (got {perihelion})")]
    NonPositivePerihelion { name: String, perihelion: f64 },

    #[error("{name}: radius must be positive (got {radius})")]
    NonPositiveRadius { name: String, radius: f32 },

    #[error("{name}: parent index {parent} does not refer to an earlier body")]
    DanglingParent { name: String, parent: usize },

    #[error("{name}: parent {parent} is not a planet or dwarf planet")]
    InvalidParent { name: String, parent: String },

    #[error("Unknown parent body: {0}")]
    UnknownParent(String),
}

pub type Result<T> = std::result::Result<T, OrreryError>;
