use crate::{
    animation::object::AnimationKind,
    descriptor::common::{DescriptorCommon, descriptor_builders},
    property::{
        key::{Property, PropertyKey},
        value::{PropertyValue, RawValue},
    },
};

/// Which of from/to/by a property-bound descriptor supplies.
///
/// Only the six non-empty combinations of at most two values can be built;
/// there is no constructor for all three at once.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ValueRange {
    from: Option<RawValue>,
    to: Option<RawValue>,
    by: Option<RawValue>,
}

impl ValueRange {
    pub(crate) fn from<T: PropertyValue>(from: T) -> Self {
        Self {
            from: Some(from.encode()),
            to: None,
            by: None,
        }
    }

    pub(crate) fn by<T: PropertyValue>(by: T) -> Self {
        Self {
            from: None,
            to: None,
            by: Some(by.encode()),
        }
    }

    pub(crate) fn to<T: PropertyValue>(to: T) -> Self {
        Self {
            from: None,
            to: Some(to.encode()),
            by: None,
        }
    }

    pub(crate) fn from_by<T: PropertyValue>(from: T, by: T) -> Self {
        Self {
            from: Some(from.encode()),
            to: None,
            by: Some(by.encode()),
        }
    }

    pub(crate) fn from_to<T: PropertyValue>(from: T, to: T) -> Self {
        Self {
            from: Some(from.encode()),
            to: Some(to.encode()),
            by: None,
        }
    }

    pub(crate) fn by_to<T: PropertyValue>(by: T, to: T) -> Self {
        Self {
            from: None,
            to: Some(to.encode()),
            by: Some(by.encode()),
        }
    }

    /// Start value.
    pub fn from_value(&self) -> Option<&RawValue> {
        self.from.as_ref()
    }

    /// End value.
    pub fn to_value(&self) -> Option<&RawValue> {
        self.to.as_ref()
    }

    /// Relative change.
    pub fn by_value(&self) -> Option<&RawValue> {
        self.by.as_ref()
    }

    pub(crate) fn parts(&self) -> (Option<RawValue>, Option<RawValue>, Option<RawValue>) {
        (self.from.clone(), self.to.clone(), self.by.clone())
    }
}

/// Interpolates one property between the supplied values.
#[derive(Clone, Debug)]
pub struct Basic {
    pub(crate) common: DescriptorCommon,
    property: PropertyKey,
    values: ValueRange,
}

// `from`/`to` mirror the engine vocabulary; they are not conversions.
#[allow(clippy::should_implement_trait, clippy::wrong_self_convention)]
impl Basic {
    fn new(property: PropertyKey, values: ValueRange) -> Self {
        Self {
            common: DescriptorCommon::default(),
            property,
            values,
        }
    }

    /// Animate from `from` to the current model value.
    pub fn from<T: PropertyValue>(property: Property<T>, from: T) -> Self {
        Self::new(property.key(), ValueRange::from(from))
    }

    /// Animate relative to the current model value.
    pub fn by<T: PropertyValue>(property: Property<T>, by: T) -> Self {
        Self::new(property.key(), ValueRange::by(by))
    }

    /// Animate from the current presentation value to `to`.
    pub fn to<T: PropertyValue>(property: Property<T>, to: T) -> Self {
        Self::new(property.key(), ValueRange::to(to))
    }

    /// Animate from `from` by the relative amount `by`.
    pub fn from_by<T: PropertyValue>(property: Property<T>, from: T, by: T) -> Self {
        Self::new(property.key(), ValueRange::from_by(from, by))
    }

    /// Animate from `from` to `to`.
    pub fn from_to<T: PropertyValue>(property: Property<T>, from: T, to: T) -> Self {
        Self::new(property.key(), ValueRange::from_to(from, to))
    }

    /// Animate to `to`, starting `by` before it.
    pub fn by_to<T: PropertyValue>(property: Property<T>, by: T, to: T) -> Self {
        Self::new(property.key(), ValueRange::by_to(by, to))
    }

    /// Animated property.
    pub fn property(&self) -> PropertyKey {
        self.property
    }

    /// The supplied values.
    pub fn values(&self) -> &ValueRange {
        &self.values
    }

    pub(crate) fn common_mut(&mut self) -> &mut DescriptorCommon {
        &mut self.common
    }

    pub(crate) fn animation_kind(&self) -> AnimationKind {
        let (from, to, by) = self.values.parts();
        AnimationKind::Basic {
            key_path: self.property.key_path,
            from,
            to,
            by,
        }
    }
}

descriptor_builders!(Basic, with_duration);
