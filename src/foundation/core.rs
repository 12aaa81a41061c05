pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Time measured in seconds.
pub type TimeInterval = f64;

/// Duration assumed for an animation that was given none.
///
/// Matches the default the animation engine applies, so group arithmetic
/// agrees with what the engine will actually play.
pub const DEFAULT_DURATION: TimeInterval = 0.25;

/// Straight-alpha RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
    /// Alpha component.
    pub a: f64,
}

impl Color {
    /// Fully transparent black.
    pub const CLEAR: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Build an opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build a color with explicit alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit straight-alpha channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn unit(c: u8) -> f64 {
            f64::from(c) / 255.0
        }

        Self::rgba(unit(r), unit(g), unit(b), unit(a))
    }

    /// Same color with every component clamped into `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }
}

/// Sum of durations, substituting [`DEFAULT_DURATION`] for missing entries.
pub(crate) fn sum_effective(
    durations: impl IntoIterator<Item = Option<TimeInterval>>,
) -> TimeInterval {
    durations
        .into_iter()
        .map(|d| d.unwrap_or(DEFAULT_DURATION))
        .fold(0.0, |total, d| total + d)
}

/// Maximum of durations, substituting [`DEFAULT_DURATION`] for missing entries.
///
/// An empty input yields `0`.
pub(crate) fn max_effective(
    durations: impl IntoIterator<Item = Option<TimeInterval>>,
) -> TimeInterval {
    durations
        .into_iter()
        .map(|d| d.unwrap_or(DEFAULT_DURATION))
        .fold(0.0, f64::max)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
