use std::collections::BTreeSet;

use crate::{
    animation::{
        object::Animation,
        timing::{AuxiliaryProperty, Timing},
    },
    descriptor::{
        basic::Basic,
        common::{DescriptorCommon, LifecycleHooks, descriptor_builders},
        group::Group,
        keyframe::KeyFrame,
        marker::{Action, Wait},
        spring::Spring,
        transition::Transition,
    },
    foundation::core::{DEFAULT_DURATION, TimeInterval},
    property::key::PropertyKey,
};

/// Immutable specification of an animation, not yet attached to anything.
///
/// Leaves produce exactly one concrete animation; groups produce a group
/// animation whose children are their members' animations.
#[derive(Clone, Debug)]
pub enum Descriptor {
    /// From/to/by interpolation.
    Basic(Basic),
    /// Frame sequence or path.
    KeyFrame(KeyFrame),
    /// Spring dynamics.
    Spring(Spring),
    /// Whole-node transition.
    Transition(Transition),
    /// Zero-duration callback marker.
    Action(Action),
    /// Pause.
    Wait(Wait),
    /// Concurrent or sequential composite.
    Group(Group),
}

macro_rules! impl_from_variant {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for Descriptor {
                fn from(d: $variant) -> Self {
                    Self::$variant(d)
                }
            }
        )+
    };
}

impl_from_variant!(Basic, KeyFrame, Spring, Transition, Action, Wait, Group);

impl Descriptor {
    fn common(&self) -> &DescriptorCommon {
        match self {
            Self::Basic(d) => &d.common,
            Self::KeyFrame(d) => &d.common,
            Self::Spring(d) => &d.common,
            Self::Transition(d) => &d.common,
            Self::Action(d) => &d.common,
            Self::Wait(d) => &d.common,
            Self::Group(d) => &d.common,
        }
    }

    pub(crate) fn common_mut(&mut self) -> &mut DescriptorCommon {
        match self {
            Self::Basic(d) => d.common_mut(),
            Self::KeyFrame(d) => d.common_mut(),
            Self::Spring(d) => d.common_mut(),
            Self::Transition(d) => d.common_mut(),
            Self::Action(d) => d.common_mut(),
            Self::Wait(d) => d.common_mut(),
            Self::Group(d) => d.common_mut(),
        }
    }

    /// Explicit duration of a leaf, or the derived duration of a group.
    pub fn duration(&self) -> Option<TimeInterval> {
        match self {
            Self::Group(g) => Some(g.duration()),
            _ => self.common().duration,
        }
    }

    /// Duration the engine will play, substituting [`DEFAULT_DURATION`].
    pub fn effective_duration(&self) -> TimeInterval {
        self.duration().unwrap_or(DEFAULT_DURATION)
    }

    /// Timing settings in application order.
    pub fn auxiliary(&self) -> &[AuxiliaryProperty] {
        &self.common().auxiliary
    }

    /// Lifecycle callbacks.
    pub fn hooks(&self) -> &LifecycleHooks {
        &self.common().hooks
    }

    /// The group, if this is one.
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(g) => Some(g),
            _ => None,
        }
    }

    /// The property a leaf animates; `None` for transitions, markers and groups.
    pub fn property(&self) -> Option<PropertyKey> {
        match self {
            Self::Basic(d) => Some(d.property()),
            Self::KeyFrame(d) => Some(d.property()),
            Self::Spring(d) => Some(d.property()),
            Self::Transition(_) | Self::Action(_) | Self::Wait(_) | Self::Group(_) => None,
        }
    }

    /// Every property this descriptor (recursively) animates.
    pub fn property_keys(&self) -> BTreeSet<PropertyKey> {
        let mut keys = BTreeSet::new();
        self.collect_keys(&mut keys);
        keys
    }

    pub(crate) fn collect_keys(&self, keys: &mut BTreeSet<PropertyKey>) {
        match self {
            Self::Group(g) => g.collect_keys(keys),
            leaf => keys.extend(leaf.property()),
        }
    }

    /// Materialize a fresh concrete animation.
    ///
    /// Every call returns an independent object. Nothing is attached and no
    /// hook is registered.
    pub fn animation(&self) -> Animation {
        self.materialize(None)
    }

    /// Materialize, overriding the begin time when placed inside a group.
    pub(crate) fn materialize(&self, begin_time: Option<TimeInterval>) -> Animation {
        let kind = match self {
            Self::Group(g) => return g.materialize(begin_time),
            Self::Basic(d) => d.animation_kind(),
            Self::KeyFrame(d) => d.animation_kind(),
            Self::Spring(d) => d.animation_kind(),
            Self::Transition(d) => d.animation_kind(),
            Self::Action(d) => d.animation_kind(),
            Self::Wait(d) => d.animation_kind(),
        };

        let common = self.common();
        let mut timing = Timing::configured(common.duration, &common.auxiliary);
        if let Some(begin_time) = begin_time {
            timing.begin_time = begin_time;
        }
        Animation::new(kind, timing)
    }
}

descriptor_builders!(Descriptor);

#[cfg(test)]
#[path = "../../tests/unit/descriptor/tree.rs"]
mod tests;
