use std::{
    fmt,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{
    animation::object::Animation,
    descriptor::tree::Descriptor,
    foundation::error::CadenceResult,
    multiplex::multiplexer::{add_begin_listener, add_finish_listener},
    property::key::NodeCategory,
    validate::validator::validate_descriptor,
};

/// A render-tree node together with the engine that animates it.
///
/// The engine owns scheduling: once `add_animation` returns it is expected to
/// call [`Animation::notify_did_start`] and [`Animation::notify_did_stop`]
/// (on group members too) at the appropriate times.
pub trait AnimationHost {
    /// Category used to validate descriptors against this node.
    fn category(&self) -> NodeCategory;

    /// Schedule `animation` under `key`, replacing any animation with that key.
    fn add_animation(&self, animation: &Animation, key: &str);

    /// Drop every scheduled animation. Applied values are not rolled back.
    fn remove_all_animations(&self);

    /// Keys of the currently scheduled animations.
    fn animation_keys(&self) -> Vec<String>;
}

/// Per-call settings of [`attach`].
#[derive(Clone, Default)]
pub struct AttachOptions {
    key: Option<String>,
    remove_existing: bool,
    on_finish: Option<Rc<dyn Fn(bool)>>,
}

impl AttachOptions {
    /// Generated key, existing animations kept, no extra listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule under `key` instead of a generated one.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Clear the node's animations before scheduling.
    pub fn remove_existing(mut self, remove: bool) -> Self {
        self.remove_existing = remove;
        self
    }

    /// Extra finish listener on the attached animation, registered after the
    /// descriptor's own.
    pub fn on_finish(mut self, f: impl Fn(bool) + 'static) -> Self {
        self.on_finish = Some(Rc::new(f));
        self
    }
}

impl fmt::Debug for AttachOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachOptions")
            .field("key", &self.key)
            .field("remove_existing", &self.remove_existing)
            .field("on_finish", &self.on_finish.is_some())
            .finish()
    }
}

fn next_key() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    format!("cadence.{}", COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Validate, materialize and schedule `descriptor` on `host`.
///
/// A descriptor animating a property the node does not support is rejected
/// before anything happens: the node's animations are not cleared, nothing
/// is scheduled and no listener is registered.
///
/// `remove_existing` only applies here, once; members of a group never clear
/// animations, including ones scheduled earlier by the same attach.
#[tracing::instrument(skip_all, fields(category = %host.category()))]
pub fn attach(
    descriptor: &Descriptor,
    host: &dyn AnimationHost,
    options: AttachOptions,
) -> CadenceResult<Animation> {
    if let Err(err) = validate_descriptor(descriptor, host.category()) {
        tracing::warn!(error = %err, "descriptor rejected");
        return Err(err.into());
    }

    if options.remove_existing {
        tracing::debug!("removing existing animations");
        host.remove_all_animations();
    }

    let animation = descriptor.animation();
    register_hooks(descriptor, &animation);
    if let Some(on_finish) = options.on_finish {
        add_finish_listener(&animation, move |finished| on_finish(finished));
    }

    run_will_begin(descriptor);

    let key = options.key.unwrap_or_else(next_key);
    tracing::debug!(
        key = %key,
        animation = animation.id().raw(),
        duration = descriptor.effective_duration(),
        "scheduling"
    );
    host.add_animation(&animation, &key);
    Ok(animation)
}

/// Pair each descriptor with its materialized animation and register the
/// descriptor's callbacks on it.
fn register_hooks(descriptor: &Descriptor, animation: &Animation) {
    if let Descriptor::Action(action) = descriptor {
        let action = action.action();
        add_begin_listener(animation, move || action());
    }

    let hooks = descriptor.hooks();
    if let Some(f) = hooks.on_did_begin.clone() {
        add_begin_listener(animation, move || f());
    }
    if let Some(f) = hooks.on_did_finish.clone() {
        add_finish_listener(animation, move |finished| f(finished));
    }

    if let Descriptor::Group(group) = descriptor {
        for (child, child_animation) in group.children().iter().zip(animation.children()) {
            register_hooks(child, child_animation);
        }
    }
}

/// Parent before children, children in list order.
fn run_will_begin(descriptor: &Descriptor) {
    if let Some(f) = &descriptor.hooks().on_will_begin {
        f();
    }
    if let Descriptor::Group(group) = descriptor {
        for child in group.children() {
            run_will_begin(child);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/attach/schedule.rs"]
mod tests;
