use crate::{
    animation::{ease::Ease, object::AnimationKind},
    descriptor::common::{DescriptorCommon, descriptor_builders},
    foundation::core::{BezPath, Point},
    property::{
        key::{Property, PropertyKey},
        value::{PropertyValue, RawValue},
    },
};

/// How the engine spaces intermediate key frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Straight interpolation between neighbours.
    #[default]
    Linear,
    /// Jump between values without interpolating.
    Discrete,
    /// Constant velocity; key times and timing functions are ignored.
    Paced,
    /// Smooth spline through the values.
    Cubic,
    /// Smooth spline at constant velocity.
    CubicPaced,
}

/// Orientation of a node following a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationMode {
    /// Rotate to match the path tangent.
    Auto,
    /// Rotate to match the tangent plus 180 degrees.
    AutoReverse,
}

/// Frames of a key-frame animation: explicit values, or a path for point
/// properties.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum KeyFrameContent {
    /// Explicit frames.
    Values {
        /// Frame values in order.
        values: Vec<RawValue>,
        /// Normalized times in `[0, 1]`, one per value; `None` spaces
        /// values evenly.
        key_times: Option<Vec<f64>>,
        /// Pacing between consecutive values.
        timing_functions: Vec<Ease>,
    },
    /// Motion along a path.
    Path {
        /// Path the point follows.
        path: BezPath,
        /// Orientation along the path; `None` keeps the node unrotated.
        rotation: Option<RotationMode>,
    },
}

/// Animates one property through a sequence of values or along a path.
#[derive(Clone, Debug)]
pub struct KeyFrame {
    pub(crate) common: DescriptorCommon,
    property: PropertyKey,
    content: KeyFrameContent,
    calculation: CalculationMode,
}

impl KeyFrame {
    fn new(property: PropertyKey, content: KeyFrameContent) -> Self {
        Self {
            common: DescriptorCommon::default(),
            property,
            content,
            calculation: CalculationMode::default(),
        }
    }

    /// Evenly spaced values.
    pub fn values<T: PropertyValue>(
        property: Property<T>,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        Self::new(
            property.key(),
            KeyFrameContent::Values {
                values: values.into_iter().map(PropertyValue::encode).collect(),
                key_times: None,
                timing_functions: Vec::new(),
            },
        )
    }

    /// Values at explicit normalized times.
    ///
    /// Times are clamped into `[0, 1]` and the frames are sorted by time,
    /// keeping the given order among equal times.
    pub fn values_at<T: PropertyValue>(
        property: Property<T>,
        frames: impl IntoIterator<Item = (f64, T)>,
    ) -> Self {
        let mut frames: Vec<(f64, RawValue)> = frames
            .into_iter()
            .map(|(t, v)| (if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }, v.encode()))
            .collect();
        frames.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (key_times, values): (Vec<f64>, Vec<RawValue>) = frames.into_iter().unzip();

        Self::new(
            property.key(),
            KeyFrameContent::Values {
                values,
                key_times: Some(key_times),
                timing_functions: Vec::new(),
            },
        )
    }

    /// Move a point property along `path`.
    pub fn path(property: Property<Point>, path: BezPath) -> Self {
        Self::new(
            property.key(),
            KeyFrameContent::Path {
                path,
                rotation: None,
            },
        )
    }

    /// How intermediate values are computed.
    pub fn with_calculation_mode(mut self, mode: CalculationMode) -> Self {
        self.calculation = mode;
        self
    }

    /// Pacing curves between consecutive values. Ignored for paths.
    pub fn with_timing_functions(mut self, eases: impl IntoIterator<Item = Ease>) -> Self {
        if let KeyFrameContent::Values {
            timing_functions, ..
        } = &mut self.content
        {
            *timing_functions = eases.into_iter().collect();
        }
        self
    }

    /// Orientation along the path. Ignored for value lists.
    pub fn with_rotation_mode(mut self, mode: RotationMode) -> Self {
        if let KeyFrameContent::Path { rotation, .. } = &mut self.content {
            *rotation = Some(mode);
        }
        self
    }

    /// Animated property.
    pub fn property(&self) -> PropertyKey {
        self.property
    }

    /// Values or path.
    pub fn content(&self) -> &KeyFrameContent {
        &self.content
    }

    /// Calculation mode, linear unless set.
    pub fn calculation_mode(&self) -> CalculationMode {
        self.calculation
    }

    pub(crate) fn common_mut(&mut self) -> &mut DescriptorCommon {
        &mut self.common
    }

    pub(crate) fn animation_kind(&self) -> AnimationKind {
        AnimationKind::KeyFrame {
            key_path: self.property.key_path,
            content: self.content.clone(),
            calculation: self.calculation,
        }
    }
}

descriptor_builders!(KeyFrame, with_duration);
