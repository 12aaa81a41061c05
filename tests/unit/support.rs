use std::cell::{Cell, RefCell};

use crate::{
    animation::object::Animation, attach::schedule::AnimationHost,
    foundation::core::TimeInterval, property::key::NodeCategory,
};

/// Host that records what gets scheduled on it.
pub(crate) struct RecordingHost {
    category: NodeCategory,
    scheduled: RefCell<Vec<(String, Animation)>>,
    removals: Cell<usize>,
}

impl RecordingHost {
    pub(crate) fn new(category: NodeCategory) -> Self {
        Self {
            category,
            scheduled: RefCell::new(Vec::new()),
            removals: Cell::new(0),
        }
    }

    pub(crate) fn scheduled(&self) -> Vec<(String, Animation)> {
        self.scheduled.borrow().clone()
    }

    pub(crate) fn removals(&self) -> usize {
        self.removals.get()
    }
}

impl AnimationHost for RecordingHost {
    fn category(&self) -> NodeCategory {
        self.category
    }

    fn add_animation(&self, animation: &Animation, key: &str) {
        let mut scheduled = self.scheduled.borrow_mut();
        scheduled.retain(|(k, _)| k != key);
        scheduled.push((key.to_owned(), animation.clone()));
    }

    fn remove_all_animations(&self) {
        self.removals.set(self.removals.get() + 1);
        self.scheduled.borrow_mut().clear();
    }

    fn animation_keys(&self) -> Vec<String> {
        self.scheduled.borrow().iter().map(|(k, _)| k.clone()).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Edge {
    Stop { finished: bool },
    Start,
}

struct Event {
    time: TimeInterval,
    edge: Edge,
    rank: u8,
    order: usize,
    animation: Animation,
}

#[derive(Default)]
struct Timeline {
    events: Vec<Event>,
    pre: usize,
    post: usize,
}

impl Timeline {
    fn flatten(
        &mut self,
        animation: &Animation,
        parent_begin: TimeInterval,
        parent_end: TimeInterval,
    ) {
        let begin = parent_begin + animation.begin_time();
        let natural_end = begin + animation.effective_duration();
        let end = natural_end.min(parent_end);

        self.pre += 1;
        self.events.push(Event {
            time: begin,
            edge: Edge::Start,
            rank: 1,
            order: self.pre,
            animation: animation.clone(),
        });

        for child in animation.children() {
            self.flatten(child, begin, end);
        }

        self.post += 1;
        self.events.push(Event {
            time: end,
            edge: Edge::Stop {
                finished: natural_end <= parent_end,
            },
            // Zero-length animations stop after everything starting with them.
            rank: if end > begin { 0 } else { 2 },
            order: self.post,
            animation: animation.clone(),
        });
    }
}

/// Drive `animation` to completion the way an engine would.
///
/// Members start at their group-relative begin time and are stopped
/// unfinished when their group ends first. At equal times stops fire before
/// starts, except that a zero-length animation stops after it starts.
/// Starts fire parent first, stops fire children first.
pub(crate) fn play(animation: &Animation) {
    let mut timeline = Timeline::default();
    timeline.flatten(animation, 0.0, TimeInterval::INFINITY);

    let mut events = timeline.events;
    events.sort_by(|a, b| {
        a.time
            .total_cmp(&b.time)
            .then_with(|| a.rank.cmp(&b.rank))
            .then_with(|| a.order.cmp(&b.order))
    });

    for event in events {
        match event.edge {
            Edge::Start => event.animation.notify_did_start(),
            Edge::Stop { finished } => event.animation.notify_did_stop(finished),
        }
    }
}
