use crate::foundation::core::{Affine, BezPath, Color, Point, Rect, Size, Vec2};

/// Engine-facing value representation.
///
/// Descriptors store values in this form so that children bound to
/// differently-typed properties can live in one group.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RawValue {
    /// Scalar.
    Number(f64),
    /// Boolean flag.
    Bool(bool),
    /// Point in parent coordinates.
    Point(Point),
    /// Offset or displacement.
    Vec2(Vec2),
    /// Width/height pair.
    Size(Size),
    /// Rectangle.
    Rect(Rect),
    /// Color.
    Color(Color),
    /// 2D affine transform.
    Transform(Affine),
    /// Bezier path.
    Path(BezPath),
    /// List of scalars (gradient locations, dash patterns).
    Numbers(Vec<f64>),
    /// List of colors (gradient stops).
    Colors(Vec<Color>),
}

/// A Rust type usable as the value of an animatable property.
pub trait PropertyValue: Sized {
    /// Name of the representation, reported in validation errors.
    const KIND: &'static str;

    /// Convert into the engine representation.
    fn encode(self) -> RawValue;

    /// Convert back from the engine representation.
    fn decode(raw: &RawValue) -> Option<Self>;
}

macro_rules! impl_property_value {
    ($ty:ty, $kind:literal, $variant:ident) => {
        impl PropertyValue for $ty {
            const KIND: &'static str = $kind;

            fn encode(self) -> RawValue {
                RawValue::$variant(self)
            }

            fn decode(raw: &RawValue) -> Option<Self> {
                match raw {
                    RawValue::$variant(v) => Some(v.clone()),
                    _ => None,
                }
            }
        }
    };
}

impl_property_value!(f64, "Number", Number);
impl_property_value!(bool, "Bool", Bool);
impl_property_value!(Point, "Point", Point);
impl_property_value!(Vec2, "Vec2", Vec2);
impl_property_value!(Size, "Size", Size);
impl_property_value!(Rect, "Rect", Rect);
impl_property_value!(Color, "Color", Color);
impl_property_value!(Affine, "Transform", Transform);
impl_property_value!(BezPath, "Path", Path);
impl_property_value!(Vec<f64>, "Numbers", Numbers);
impl_property_value!(Vec<Color>, "Colors", Colors);

impl PropertyValue for f32 {
    const KIND: &'static str = "Number";

    fn encode(self) -> RawValue {
        RawValue::Number(f64::from(self))
    }

    fn decode(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Number(v) => Some(*v as f32),
            _ => None,
        }
    }
}

impl PropertyValue for u32 {
    const KIND: &'static str = "Count";

    fn encode(self) -> RawValue {
        RawValue::Number(f64::from(self))
    }

    fn decode(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Number(v) if *v >= 0.0 && v.fract() == 0.0 && *v <= f64::from(u32::MAX) => {
                Some(*v as u32)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/property/value.rs"]
mod tests;
