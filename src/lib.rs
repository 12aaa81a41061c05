//! Cadence composes declarative animation descriptors and hands the resulting
//! animation objects to an external engine.
//!
//! # Overview
//!
//! 1. **Describe**: build immutable [`Descriptor`] values (basic, key-frame,
//!    spring, transition, action and wait leaves; concurrent and sequential
//!    [`Group`]s). Durations of groups are derived from their members.
//! 2. **Attach**: [`attach`] validates a descriptor against an
//!    [`AnimationHost`]'s [`NodeCategory`], materializes a fresh [`Animation`]
//!    and schedules it. Invalid descriptors fail with
//!    [`InvalidDescriptorError`] and leave the node untouched.
//! 3. **Observe**: lifecycle hooks and caller callbacks are routed through the
//!    completion multiplexer, which lets any number of listeners share an
//!    animation's single delegate slot.
//!
//! The crate never interpolates values or drives time. The engine behind the
//! host calls [`Animation::notify_did_start`] and [`Animation::notify_did_stop`].
//!
//! Everything here is single-threaded: descriptors and animations hold `Rc`s
//! and the multiplexer table is thread-local.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod attach;
mod descriptor;
mod foundation;
mod multiplex;
mod property;
mod validate;

pub use animation::ease::Ease;
pub use animation::object::{
    Animation, AnimationDelegate, AnimationId, AnimationKind, MarkerPurpose,
};
pub use animation::timing::{AuxiliaryProperty, FillMode, Timing};
pub use attach::schedule::{AnimationHost, AttachOptions, attach};
pub use descriptor::basic::{Basic, ValueRange};
pub use descriptor::common::LifecycleHooks;
pub use descriptor::group::{Group, GroupKind};
pub use descriptor::keyframe::{CalculationMode, KeyFrame, KeyFrameContent, RotationMode};
pub use descriptor::marker::{Action, Wait};
pub use descriptor::spring::{Spring, SpringParams};
pub use descriptor::transition::{Transition, TransitionKind, TransitionSubtype};
pub use descriptor::tree::Descriptor;
pub use foundation::core::{
    Affine, BezPath, Color, DEFAULT_DURATION, Point, Rect, Size, TimeInterval, Vec2,
};
pub use foundation::error::{CadenceError, CadenceResult, InvalidDescriptorError, InvalidReason};
pub use multiplex::multiplexer::{
    ListenerId, add_begin_listener, add_finish_listener, is_multiplexed, listener_count,
    remove_all_listeners, remove_listener,
};
/// Built-in animatable properties, grouped by the node categories they apply to.
pub use property::catalog;
pub use property::key::{NodeCategories, NodeCategory, Property, PropertyKey};
pub use property::value::{PropertyValue, RawValue};
pub use validate::validator::{validate_descriptor, validate_keys};

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
mod test_support;
