use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{
    animation::timing::Timing,
    descriptor::{
        keyframe::{CalculationMode, KeyFrameContent},
        spring::SpringParams,
        transition::{TransitionKind, TransitionSubtype},
    },
    foundation::{
        core::{DEFAULT_DURATION, TimeInterval},
        error::CadenceResult,
    },
    property::value::RawValue,
};

/// Process-unique identity of a concrete animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct AnimationId(u64);

impl AnimationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id value (for logging).
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Receiver of an animation's lifecycle events.
///
/// An animation has exactly one delegate slot. Use the
/// [multiplexer](crate::add_finish_listener) to observe an animation from
/// several places.
pub trait AnimationDelegate {
    /// The engine started playing `animation`.
    fn animation_did_start(&self, _animation: &Animation) {}

    /// The engine stopped `animation`; `finished` is false when it was
    /// removed before reaching its end.
    fn animation_did_stop(&self, _animation: &Animation, _finished: bool) {}
}

/// Why a marker animation exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPurpose {
    /// Fires a caller action when it begins.
    Action,
    /// Only consumes time.
    Wait,
}

/// What a concrete animation animates.
#[derive(Debug, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnimationKind {
    /// Interpolation between up to two of from/to/by.
    Basic {
        /// Animated property.
        key_path: &'static str,
        /// Start value; the presentation value when absent.
        from: Option<RawValue>,
        /// End value.
        to: Option<RawValue>,
        /// Relative change.
        by: Option<RawValue>,
    },
    /// Interpolation through a sequence of frames.
    KeyFrame {
        /// Animated property.
        key_path: &'static str,
        /// Values or path to move through.
        content: KeyFrameContent,
        /// How intermediate values are computed.
        calculation: CalculationMode,
    },
    /// Damped spring between up to two of from/to/by.
    Spring {
        /// Animated property.
        key_path: &'static str,
        /// Start value.
        from: Option<RawValue>,
        /// End value.
        to: Option<RawValue>,
        /// Relative change.
        by: Option<RawValue>,
        /// Spring constants.
        params: SpringParams,
    },
    /// Whole-node content transition.
    Transition {
        /// Visual effect.
        kind: TransitionKind,
        /// Direction, for directional effects.
        subtype: Option<TransitionSubtype>,
        /// Progress at which the effect starts, in `[0, 1]`.
        start_progress: f64,
        /// Progress at which the effect ends, in `[start_progress, 1]`.
        end_progress: f64,
    },
    /// Children run on the group's timeline, each at its own begin time.
    Group {
        /// Members in declaration order.
        children: Vec<Animation>,
    },
    /// No visual effect.
    Marker {
        /// Why the marker exists.
        purpose: MarkerPurpose,
    },
}

struct AnimationInner {
    id: AnimationId,
    kind: AnimationKind,
    timing: Timing,
    delegate: RefCell<Option<Rc<dyn AnimationDelegate>>>,
}

impl Drop for AnimationInner {
    fn drop(&mut self) {
        crate::multiplex::multiplexer::forget(self.id);
    }
}

/// A materialized animation object, ready to hand to an engine.
///
/// Cloning yields another handle to the same object; equality is identity.
#[derive(Clone)]
pub struct Animation(Rc<AnimationInner>);

impl Animation {
    pub(crate) fn new(kind: AnimationKind, timing: Timing) -> Self {
        Self(Rc::new(AnimationInner {
            id: AnimationId::next(),
            kind,
            timing,
            delegate: RefCell::new(None),
        }))
    }

    /// Identity of this object.
    pub fn id(&self) -> AnimationId {
        self.0.id
    }

    /// What is animated.
    pub fn kind(&self) -> &AnimationKind {
        &self.0.kind
    }

    /// Timing settings, auxiliary properties already applied.
    pub fn timing(&self) -> &Timing {
        &self.0.timing
    }

    /// Explicit duration, if one was set.
    pub fn duration(&self) -> Option<TimeInterval> {
        self.0.timing.duration
    }

    /// Duration the engine will actually use.
    pub fn effective_duration(&self) -> TimeInterval {
        self.0.timing.duration.unwrap_or(DEFAULT_DURATION)
    }

    /// Start offset on the parent timeline.
    pub fn begin_time(&self) -> TimeInterval {
        self.0.timing.begin_time
    }

    /// Key path of the animated property, for property-bound kinds.
    pub fn key_path(&self) -> Option<&'static str> {
        match &self.0.kind {
            AnimationKind::Basic { key_path, .. }
            | AnimationKind::KeyFrame { key_path, .. }
            | AnimationKind::Spring { key_path, .. } => Some(*key_path),
            _ => None,
        }
    }

    /// Group members; empty for every other kind.
    pub fn children(&self) -> &[Animation] {
        match &self.0.kind {
            AnimationKind::Group { children } => children,
            _ => &[],
        }
    }

    /// Currently installed delegate.
    pub fn delegate(&self) -> Option<Rc<dyn AnimationDelegate>> {
        self.0.delegate.borrow().clone()
    }

    /// Replace the delegate, returning the previous one.
    pub fn set_delegate(
        &self,
        delegate: Option<Rc<dyn AnimationDelegate>>,
    ) -> Option<Rc<dyn AnimationDelegate>> {
        self.0.delegate.replace(delegate)
    }

    /// Remove and return the delegate.
    pub fn take_delegate(&self) -> Option<Rc<dyn AnimationDelegate>> {
        self.0.delegate.take()
    }

    /// Engine entry point: the animation started.
    pub fn notify_did_start(&self) {
        // The slot may be rewritten from inside the callback.
        if let Some(delegate) = self.delegate() {
            delegate.animation_did_start(self);
        }
    }

    /// Engine entry point: the animation stopped.
    pub fn notify_did_stop(&self, finished: bool) {
        if let Some(delegate) = self.delegate() {
            delegate.animation_did_stop(self, finished);
        }
    }

    /// Plain-data JSON view of the object and its children.
    pub fn to_json(&self) -> CadenceResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub(crate) fn downgrade(&self) -> WeakAnimation {
        WeakAnimation(Rc::downgrade(&self.0))
    }
}

impl PartialEq for Animation {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Animation {}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("id", &self.0.id)
            .field("kind", &self.0.kind)
            .field("timing", &self.0.timing)
            .field("has_delegate", &self.0.delegate.borrow().is_some())
            .finish()
    }
}

impl serde::Serialize for Animation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Animation", 3)?;
        s.serialize_field("id", &self.0.id)?;
        s.serialize_field("kind", &self.0.kind)?;
        s.serialize_field("timing", &self.0.timing)?;
        s.end()
    }
}

/// Non-owning handle used by the multiplexer side table.
#[derive(Clone)]
pub(crate) struct WeakAnimation(Weak<AnimationInner>);

impl WeakAnimation {
    pub(crate) fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/object.rs"]
mod tests;
