/// Pacing curve handed to the engine.
///
/// Every curve is a cubic bezier from `(0, 0)` to `(1, 1)`; the named
/// variants are the engine's predefined control points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant pacing.
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Slow start and end.
    EaseInOut,
    /// The engine's default curve for implicit animations.
    Default,
    /// Custom curve through two control points.
    CubicBezier {
        /// First control point x, clamped into `[0, 1]`.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x, clamped into `[0, 1]`.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Ease {
    /// Control points `[x1, y1, x2, y2]` of the curve.
    pub fn control_points(self) -> [f64; 4] {
        match self {
            Self::Linear => [0.0, 0.0, 1.0, 1.0],
            Self::EaseIn => [0.42, 0.0, 1.0, 1.0],
            Self::EaseOut => [0.0, 0.0, 0.58, 1.0],
            Self::EaseInOut => [0.42, 0.0, 0.58, 1.0],
            Self::Default => [0.25, 0.1, 0.25, 1.0],
            Self::CubicBezier { x1, y1, x2, y2 } => {
                [x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2]
            }
        }
    }

    /// Does the curve degenerate to constant pacing?
    pub fn is_linear(self) -> bool {
        let [x1, y1, x2, y2] = self.control_points();
        x1 == y1 && x2 == y2
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
