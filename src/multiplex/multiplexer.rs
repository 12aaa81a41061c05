//! Fan-out of an animation's single delegate slot to many listeners.
//!
//! The first listener registered on an animation captures whatever delegate
//! was installed (the *forward target*) and installs a multiplexing delegate
//! in its place. Later registrations only append to the entry. When the last
//! listener goes away, or the animation finishes, the entry is dropped and the
//! forward target is put back, so an unobserved animation looks exactly as if
//! it had never been multiplexed.
//!
//! The side table is thread-local: animations and their callbacks are `!Send`
//! and the engine delivers events on the thread that owns them.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::animation::object::{Animation, AnimationDelegate, AnimationId, WeakAnimation};

/// Handle of one registered listener, unique for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id value (for logging).
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Clone)]
enum Listener {
    Begin(Rc<dyn Fn()>),
    Finish(Rc<dyn Fn(bool)>),
}

struct Entry {
    animation: WeakAnimation,
    // ListenerId grows monotonically, so key order is registration order.
    listeners: BTreeMap<ListenerId, Listener>,
    forward_to: Option<Rc<dyn AnimationDelegate>>,
    installed: Rc<dyn AnimationDelegate>,
}

impl Entry {
    fn begin_callbacks(&self) -> Vec<Rc<dyn Fn()>> {
        self.listeners
            .values()
            .filter_map(|l| match l {
                Listener::Begin(f) => Some(f.clone()),
                Listener::Finish(_) => None,
            })
            .collect()
    }

    fn finish_callbacks(&self) -> Vec<Rc<dyn Fn(bool)>> {
        self.listeners
            .values()
            .filter_map(|l| match l {
                Listener::Finish(f) => Some(f.clone()),
                Listener::Begin(_) => None,
            })
            .collect()
    }

    /// Put the forward target back, unless someone replaced our delegate.
    fn restore(&self, animation: &Animation) {
        let ours = animation
            .delegate()
            .is_some_and(|current| Rc::ptr_eq(&current, &self.installed));
        if ours {
            animation.set_delegate(self.forward_to.clone());
        }
    }
}

#[derive(Default)]
struct Table {
    entries: HashMap<AnimationId, Entry>,
}

impl Table {
    /// Detach entries whose animation no longer exists.
    fn prune(&mut self) -> Vec<Entry> {
        let dead: Vec<AnimationId> = self
            .entries
            .iter()
            .filter(|(_, e)| !e.animation.is_alive())
            .map(|(id, _)| *id)
            .collect();
        dead.iter().filter_map(|id| self.entries.remove(id)).collect()
    }
}

thread_local! {
    static TABLE: RefCell<Table> = RefCell::new(Table::default());
}

// Values removed from the table are returned out of the closure and dropped
// after the borrow ends: dropping a callback may drop the last handle to an
// animation, whose destructor calls back into `forget`.
fn with_table<R>(f: impl FnOnce(&mut Table) -> R) -> R {
    TABLE.with(|t| f(&mut t.borrow_mut()))
}

struct MultiplexDelegate {
    animation: AnimationId,
}

impl AnimationDelegate for MultiplexDelegate {
    fn animation_did_start(&self, animation: &Animation) {
        let Some((forward_to, callbacks)) = with_table(|t| {
            t.entries
                .get(&self.animation)
                .map(|e| (e.forward_to.clone(), e.begin_callbacks()))
        }) else {
            return;
        };

        if let Some(forward_to) = forward_to {
            forward_to.animation_did_start(animation);
        }
        for callback in callbacks {
            callback();
        }
    }

    fn animation_did_stop(&self, animation: &Animation, finished: bool) {
        let Some(entry) = with_table(|t| t.entries.remove(&self.animation)) else {
            return;
        };
        tracing::trace!(
            animation = self.animation.raw(),
            finished,
            listeners = entry.listeners.len(),
            "multiplexer finishing"
        );

        entry.restore(animation);
        if let Some(forward_to) = &entry.forward_to {
            forward_to.animation_did_stop(animation, finished);
        }
        for callback in entry.finish_callbacks() {
            callback(finished);
        }
    }
}

fn add_listener(animation: &Animation, listener: Listener) -> ListenerId {
    let id = ListenerId::next();
    let key = animation.id();

    let (dead, listener) = with_table(|t| {
        let dead = t.prune();
        match t.entries.get_mut(&key) {
            Some(entry) => {
                entry.listeners.insert(id, listener);
                (dead, None)
            }
            None => (dead, Some(listener)),
        }
    });
    drop(dead);

    if let Some(listener) = listener {
        let installed: Rc<dyn AnimationDelegate> = Rc::new(MultiplexDelegate { animation: key });
        let forward_to = animation.set_delegate(Some(installed.clone()));
        tracing::debug!(
            animation = key.raw(),
            forwarding = forward_to.is_some(),
            "multiplexer installed"
        );
        let entry = Entry {
            animation: animation.downgrade(),
            listeners: BTreeMap::from([(id, listener)]),
            forward_to,
            installed,
        };
        with_table(|t| t.entries.insert(key, entry));
    }

    id
}

/// Call `callback` every time `animation` begins.
///
/// Begin callbacks run after the forward target, in registration order.
pub fn add_begin_listener(animation: &Animation, callback: impl Fn() + 'static) -> ListenerId {
    add_listener(animation, Listener::Begin(Rc::new(callback)))
}

/// Call `callback` once, when `animation` stops.
///
/// Finish callbacks run after the forward target, in registration order.
/// The argument is `false` when the animation was removed before its end.
pub fn add_finish_listener(
    animation: &Animation,
    callback: impl Fn(bool) + 'static,
) -> ListenerId {
    add_listener(animation, Listener::Finish(Rc::new(callback)))
}

/// Unregister one listener.
///
/// Removing the last listener restores the animation's original delegate.
/// Unknown ids and animations are ignored.
pub fn remove_listener(animation: &Animation, id: ListenerId) {
    let key = animation.id();
    let (removed, torn_down) = with_table(|t| {
        let Some(entry) = t.entries.get_mut(&key) else {
            return (None, None);
        };
        let removed = entry.listeners.remove(&id);
        let torn_down = if entry.listeners.is_empty() {
            t.entries.remove(&key)
        } else {
            None
        };
        (removed, torn_down)
    });
    drop(removed);

    if let Some(entry) = torn_down {
        tracing::debug!(animation = key.raw(), "multiplexer torn down");
        entry.restore(animation);
    }
}

/// Unregister every listener and restore the original delegate.
pub fn remove_all_listeners(animation: &Animation) {
    let key = animation.id();
    if let Some(entry) = with_table(|t| t.entries.remove(&key)) {
        tracing::debug!(
            animation = key.raw(),
            listeners = entry.listeners.len(),
            "multiplexer cleared"
        );
        entry.restore(animation);
    }
}

/// Number of listeners currently registered on `animation`.
pub fn listener_count(animation: &Animation) -> usize {
    with_table(|t| t.entries.get(&animation.id()).map_or(0, |e| e.listeners.len()))
}

/// Does `animation` currently have a multiplexer entry?
pub fn is_multiplexed(animation: &Animation) -> bool {
    with_table(|t| t.entries.contains_key(&animation.id()))
}

/// Drop the entry of an animation that is being destroyed.
///
/// Skipped when the table is busy or gone; `prune` catches those later.
pub(crate) fn forget(id: AnimationId) {
    let _ = TABLE.try_with(|t| {
        let removed = match t.try_borrow_mut() {
            Ok(mut table) => table.entries.remove(&id),
            Err(_) => None,
        };
        drop(removed);
    });
}

#[cfg(test)]
pub(crate) fn entry_count() -> usize {
    with_table(|t| t.entries.len())
}

#[cfg(test)]
#[path = "../../tests/unit/multiplex/multiplexer.rs"]
mod tests;
