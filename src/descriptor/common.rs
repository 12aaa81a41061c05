use std::{fmt, rc::Rc};

use crate::{animation::timing::AuxiliaryProperty, foundation::core::TimeInterval};

/// Callbacks a descriptor carries into every attach.
///
/// `on_will_begin` runs synchronously just before the animation is handed to
/// the engine; the other two are registered with the multiplexer.
#[derive(Clone, Default)]
pub struct LifecycleHooks {
    pub(crate) on_will_begin: Option<Rc<dyn Fn()>>,
    pub(crate) on_did_begin: Option<Rc<dyn Fn()>>,
    pub(crate) on_did_finish: Option<Rc<dyn Fn(bool)>>,
}

impl LifecycleHooks {
    /// No hook is set.
    pub fn is_empty(&self) -> bool {
        self.on_will_begin.is_none() && self.on_did_begin.is_none() && self.on_did_finish.is_none()
    }

    /// An `on_will_begin` hook is set.
    pub fn has_will_begin(&self) -> bool {
        self.on_will_begin.is_some()
    }

    /// An `on_did_begin` hook is set.
    pub fn has_did_begin(&self) -> bool {
        self.on_did_begin.is_some()
    }

    /// An `on_did_finish` hook is set.
    pub fn has_did_finish(&self) -> bool {
        self.on_did_finish.is_some()
    }
}

impl fmt::Debug for LifecycleHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleHooks")
            .field("on_will_begin", &self.has_will_begin())
            .field("on_did_begin", &self.has_did_begin())
            .field("on_did_finish", &self.has_did_finish())
            .finish()
    }
}

/// Settings shared by every descriptor variant.
#[derive(Clone, Debug, Default)]
pub(crate) struct DescriptorCommon {
    pub(crate) duration: Option<TimeInterval>,
    pub(crate) auxiliary: Vec<AuxiliaryProperty>,
    pub(crate) hooks: LifecycleHooks,
}

impl DescriptorCommon {
    pub(crate) fn with_duration(duration: TimeInterval) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }
}

/// Builder methods shared by every descriptor type.
///
/// The type must provide `fn common_mut(&mut self) -> &mut DescriptorCommon`.
macro_rules! descriptor_builders {
    ($ty:ty) => {
        impl $ty {
            /// Layer one timing setting onto the materialized animation.
            pub fn with_auxiliary(
                mut self,
                aux: $crate::animation::timing::AuxiliaryProperty,
            ) -> Self {
                self.common_mut().auxiliary.push(aux);
                self
            }

            /// Layer several timing settings, in order.
            pub fn with_auxiliaries(
                mut self,
                aux: impl IntoIterator<Item = $crate::animation::timing::AuxiliaryProperty>,
            ) -> Self {
                self.common_mut().auxiliary.extend(aux);
                self
            }

            /// Run `f` right before each attach hands the animation to the engine.
            pub fn on_will_begin(mut self, f: impl Fn() + 'static) -> Self {
                self.common_mut().hooks.on_will_begin = Some(std::rc::Rc::new(f));
                self
            }

            /// Run `f` when the engine starts the animation.
            pub fn on_did_begin(mut self, f: impl Fn() + 'static) -> Self {
                self.common_mut().hooks.on_did_begin = Some(std::rc::Rc::new(f));
                self
            }

            /// Run `f` when the engine stops the animation.
            pub fn on_did_finish(mut self, f: impl Fn(bool) + 'static) -> Self {
                self.common_mut().hooks.on_did_finish = Some(std::rc::Rc::new(f));
                self
            }
        }
    };
    ($ty:ty, with_duration) => {
        descriptor_builders!($ty);

        impl $ty {
            /// Set an explicit duration.
            pub fn with_duration(
                mut self,
                duration: $crate::foundation::core::TimeInterval,
            ) -> Self {
                self.common_mut().duration = Some(duration);
                self
            }
        }
    };
}

pub(crate) use descriptor_builders;
