//! Core types and utilities

pub mod color;
pub mod vec3;

pub use color::LineColor;
pub use vec3::Vec3;
