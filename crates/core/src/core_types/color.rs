//! Colour handed to debug line sinks.

use serde::{Deserialize, Serialize};

/// Linear RGBA colour with components in `0.0..=1.0`.
///
/// Layout-compatible with the engine-side colour struct (four `f32`), so the
/// FFI layer can pass it through unchanged.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LineColor {
    /// Default colour for sampled shot paths.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque colour from red, green and blue components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Colour with explicit alpha, each component clamped to `0.0..=1.0`.
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }
}

impl Default for LineColor {
    fn default() -> Self {
        Self::GREEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_green() {
        let c = LineColor::default();
        assert_eq!(c, LineColor::GREEN);
        assert_eq!((c.r, c.g, c.b, c.a), (0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_rgba_clamps() {
        let c = LineColor::rgba(2.0, -1.0, 0.5, 1.5);
        assert_eq!(c, LineColor { r: 1.0, g: 0.0, b: 0.5, a: 1.0 });
    }
}
