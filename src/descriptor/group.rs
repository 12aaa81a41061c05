use std::{collections::BTreeSet, rc::Rc};

use crate::{
    animation::{
        object::{Animation, AnimationKind},
        timing::Timing,
    },
    descriptor::{
        common::{DescriptorCommon, descriptor_builders},
        tree::Descriptor,
    },
    foundation::core::{TimeInterval, max_effective, sum_effective},
    property::key::PropertyKey,
};

/// How a group schedules its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// All children start together.
    Concurrent,
    /// Children run back to back in list order.
    Sequential,
}

/// Composite of child descriptors.
///
/// Children are shared, so cloning a group (or nesting one group in several
/// parents) never copies the subtree. Duration is derived from the children
/// on every read.
#[derive(Clone, Debug)]
pub struct Group {
    pub(crate) common: DescriptorCommon,
    kind: GroupKind,
    children: Rc<[Descriptor]>,
}

impl Group {
    fn new<D: Into<Descriptor>>(kind: GroupKind, children: impl IntoIterator<Item = D>) -> Self {
        Self {
            common: DescriptorCommon::default(),
            kind,
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// Children all start at the group's begin time.
    pub fn concurrent<D: Into<Descriptor>>(children: impl IntoIterator<Item = D>) -> Self {
        Self::new(GroupKind::Concurrent, children)
    }

    /// Concurrent group with a fixed duration.
    ///
    /// Children that run longer are cut off when the group ends; they are
    /// never rescaled to fit.
    pub fn concurrent_with_duration<D: Into<Descriptor>>(
        children: impl IntoIterator<Item = D>,
        duration: TimeInterval,
    ) -> Self {
        let mut group = Self::new(GroupKind::Concurrent, children);
        group.common.duration = Some(duration);
        group
    }

    /// Children run one after another with no gap.
    pub fn sequential<D: Into<Descriptor>>(children: impl IntoIterator<Item = D>) -> Self {
        Self::new(GroupKind::Sequential, children)
    }

    /// Scheduling of the children.
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Members in declaration order.
    pub fn children(&self) -> &[Descriptor] {
        &self.children
    }

    /// Explicit duration of a concurrent group, if one was given.
    pub fn override_duration(&self) -> Option<TimeInterval> {
        match self.kind {
            GroupKind::Concurrent => self.common.duration,
            GroupKind::Sequential => None,
        }
    }

    /// Duration derived from the children.
    ///
    /// Children without a duration count as [`DEFAULT_DURATION`](crate::DEFAULT_DURATION).
    /// An empty group lasts zero.
    pub fn duration(&self) -> TimeInterval {
        let child_durations = self.children.iter().map(Descriptor::duration);
        match self.kind {
            GroupKind::Concurrent => self
                .override_duration()
                .unwrap_or_else(|| max_effective(child_durations)),
            GroupKind::Sequential => sum_effective(child_durations),
        }
    }

    /// Begin time of each child relative to the group.
    pub fn begin_offsets(&self) -> Vec<TimeInterval> {
        match self.kind {
            GroupKind::Concurrent => vec![0.0; self.children.len()],
            GroupKind::Sequential => self
                .children
                .iter()
                .scan(0.0, |elapsed, child| {
                    let begin = *elapsed;
                    *elapsed += child.effective_duration();
                    Some(begin)
                })
                .collect(),
        }
    }

    /// Union of every descendant's property keys.
    pub fn property_keys(&self) -> BTreeSet<PropertyKey> {
        let mut keys = BTreeSet::new();
        self.collect_keys(&mut keys);
        keys
    }

    pub(crate) fn collect_keys(&self, keys: &mut BTreeSet<PropertyKey>) {
        for child in self.children.iter() {
            child.collect_keys(keys);
        }
    }

    pub(crate) fn common_mut(&mut self) -> &mut DescriptorCommon {
        &mut self.common
    }

    pub(crate) fn materialize(&self, begin_time: Option<TimeInterval>) -> Animation {
        let children = self
            .children
            .iter()
            .zip(self.begin_offsets())
            .map(|(child, offset)| child.materialize(Some(offset)))
            .collect();

        let mut timing = Timing::configured(Some(self.duration()), &self.common.auxiliary);
        if let Some(begin_time) = begin_time {
            timing.begin_time = begin_time;
        }
        tracing::trace!(
            kind = ?self.kind,
            children = self.children.len(),
            duration = ?timing.duration,
            "materialized group"
        );
        Animation::new(AnimationKind::Group { children }, timing)
    }
}

descriptor_builders!(Group);

#[cfg(test)]
#[path = "../../tests/unit/descriptor/group.rs"]
mod tests;
