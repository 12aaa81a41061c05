use crate::{
    animation::object::AnimationKind,
    descriptor::{
        basic::ValueRange,
        common::{DescriptorCommon, descriptor_builders},
    },
    foundation::core::TimeInterval,
    property::{
        key::{Property, PropertyKey},
        value::PropertyValue,
    },
};

/// Physical constants of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringParams {
    /// Mass of the attached object.
    pub mass: f64,
    /// Spring constant.
    pub stiffness: f64,
    /// Damping coefficient.
    pub damping: f64,
    /// Initial velocity in units of the total distance per second.
    pub initial_velocity: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 100.0,
            damping: 10.0,
            initial_velocity: 0.0,
        }
    }
}

impl SpringParams {
    /// Residual amplitude at which the spring counts as settled.
    const SETTLE_THRESHOLD: f64 = 1e-3;

    /// Estimated time until the oscillation envelope decays to 0.1% of the
    /// travel distance.
    ///
    /// Undamped springs never settle and report infinity; degenerate mass or
    /// stiffness reports zero.
    pub fn settling_duration(&self) -> TimeInterval {
        if self.mass <= 0.0 || self.stiffness <= 0.0 {
            return 0.0;
        }
        if self.damping <= 0.0 {
            return f64::INFINITY;
        }

        let omega0 = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping / (2.0 * (self.stiffness * self.mass).sqrt());
        // Decay rate of the slowest mode.
        let rate = if zeta < 1.0 {
            zeta * omega0
        } else {
            omega0 * (zeta - (zeta * zeta - 1.0).sqrt())
        };
        (1.0 / Self::SETTLE_THRESHOLD).ln() / rate
    }
}

/// Animates one property with spring dynamics.
#[derive(Clone, Debug)]
pub struct Spring {
    pub(crate) common: DescriptorCommon,
    property: PropertyKey,
    values: ValueRange,
    params: SpringParams,
}

#[allow(clippy::should_implement_trait, clippy::wrong_self_convention)]
impl Spring {
    fn new(property: PropertyKey, values: ValueRange) -> Self {
        Self {
            common: DescriptorCommon::default(),
            property,
            values,
            params: SpringParams::default(),
        }
    }

    /// Spring from `from` to the current model value.
    pub fn from<T: PropertyValue>(property: Property<T>, from: T) -> Self {
        Self::new(property.key(), ValueRange::from(from))
    }

    /// Spring relative to the current model value.
    pub fn by<T: PropertyValue>(property: Property<T>, by: T) -> Self {
        Self::new(property.key(), ValueRange::by(by))
    }

    /// Spring from the current presentation value to `to`.
    pub fn to<T: PropertyValue>(property: Property<T>, to: T) -> Self {
        Self::new(property.key(), ValueRange::to(to))
    }

    /// Spring from `from` by the relative amount `by`.
    pub fn from_by<T: PropertyValue>(property: Property<T>, from: T, by: T) -> Self {
        Self::new(property.key(), ValueRange::from_by(from, by))
    }

    /// Spring from `from` to `to`.
    pub fn from_to<T: PropertyValue>(property: Property<T>, from: T, to: T) -> Self {
        Self::new(property.key(), ValueRange::from_to(from, to))
    }

    /// Spring to `to`, starting `by` before it.
    pub fn by_to<T: PropertyValue>(property: Property<T>, by: T, to: T) -> Self {
        Self::new(property.key(), ValueRange::by_to(by, to))
    }

    /// Replace the default spring constants.
    pub fn with_params(mut self, params: SpringParams) -> Self {
        self.params = params;
        self
    }

    /// Animated property.
    pub fn property(&self) -> PropertyKey {
        self.property
    }

    /// The supplied values.
    pub fn values(&self) -> &ValueRange {
        &self.values
    }

    /// Spring constants.
    pub fn params(&self) -> SpringParams {
        self.params
    }

    pub(crate) fn common_mut(&mut self) -> &mut DescriptorCommon {
        &mut self.common
    }

    pub(crate) fn animation_kind(&self) -> AnimationKind {
        let (from, to, by) = self.values.parts();
        AnimationKind::Spring {
            key_path: self.property.key_path,
            from,
            to,
            by,
            params: self.params,
        }
    }
}

descriptor_builders!(Spring, with_duration);
