//! Core types shared by the Solarium crates.
//!
//! This crate provides the foundational types used across the simulation:
//! - Transform and parent/child transform composition
//! - Frame timing
//! - Easing and interpolation helpers

pub mod easing;
pub mod time;
pub mod transform;

pub use easing::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{DVec3, EulerRot, Mat4, Quat, Vec2, Vec3, Vec4};
