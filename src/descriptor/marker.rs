use std::{fmt, rc::Rc};

use crate::{
    animation::object::{AnimationKind, MarkerPurpose},
    descriptor::common::{DescriptorCommon, descriptor_builders},
    foundation::core::TimeInterval,
};

/// Runs a closure at its position in the timeline.
///
/// Materializes as a zero-duration marker; the closure fires when the engine
/// begins the marker.
#[derive(Clone)]
pub struct Action {
    pub(crate) common: DescriptorCommon,
    action: Rc<dyn Fn()>,
}

impl Action {
    /// Marker that runs `action` when the engine begins it.
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self {
            common: DescriptorCommon::with_duration(0.0),
            action: Rc::new(action),
        }
    }

    /// Invoke the closure directly.
    pub fn run(&self) {
        (self.action)();
    }

    pub(crate) fn action(&self) -> Rc<dyn Fn()> {
        self.action.clone()
    }

    pub(crate) fn common_mut(&mut self) -> &mut DescriptorCommon {
        &mut self.common
    }

    pub(crate) fn animation_kind(&self) -> AnimationKind {
        AnimationKind::Marker {
            purpose: MarkerPurpose::Action,
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("common", &self.common)
            .finish_non_exhaustive()
    }
}

descriptor_builders!(Action);

/// Consumes time without any visual effect.
#[derive(Clone, Debug)]
pub struct Wait {
    pub(crate) common: DescriptorCommon,
}

impl Wait {
    /// Pause of `duration` seconds.
    pub fn new(duration: TimeInterval) -> Self {
        Self {
            common: DescriptorCommon::with_duration(duration),
        }
    }

    pub(crate) fn common_mut(&mut self) -> &mut DescriptorCommon {
        &mut self.common
    }

    pub(crate) fn animation_kind(&self) -> AnimationKind {
        AnimationKind::Marker {
            purpose: MarkerPurpose::Wait,
        }
    }
}

descriptor_builders!(Wait);
