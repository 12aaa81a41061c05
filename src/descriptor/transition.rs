use crate::{
    animation::object::AnimationKind,
    descriptor::common::{DescriptorCommon, descriptor_builders},
};

/// Built-in whole-node transition effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Crossfade between old and new content.
    Fade,
    /// New content slides in over the old.
    MoveIn,
    /// New content pushes the old out.
    Push,
    /// Old content slides away to reveal the new.
    Reveal,
}

/// Direction of a directional transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionSubtype {
    /// Enters from the left edge.
    FromLeft,
    /// Enters from the right edge.
    FromRight,
    /// Enters from the top edge.
    FromTop,
    /// Enters from the bottom edge.
    FromBottom,
}

/// A content transition on the whole node.
///
/// Binds no property, so it validates against every node category.
#[derive(Clone, Debug)]
pub struct Transition {
    pub(crate) common: DescriptorCommon,
    kind: TransitionKind,
    subtype: Option<TransitionSubtype>,
    start_progress: f64,
    end_progress: f64,
}

fn unit(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { fallback }
}

impl Transition {
    /// Full-range transition without a direction.
    pub fn new(kind: TransitionKind) -> Self {
        Self {
            common: DescriptorCommon::default(),
            kind,
            subtype: None,
            start_progress: 0.0,
            end_progress: 1.0,
        }
    }

    /// Direction of the effect.
    pub fn with_subtype(mut self, subtype: TransitionSubtype) -> Self {
        self.subtype = Some(subtype);
        self
    }

    /// Play only part of the effect.
    ///
    /// Both values are clamped into `[0, 1]` and `end` is raised to `start`
    /// if it falls below it. Non-finite values keep the current bound.
    pub fn with_progress(mut self, start: f64, end: f64) -> Self {
        self.start_progress = unit(start, self.start_progress);
        self.end_progress = unit(end, self.end_progress).max(self.start_progress);
        self
    }

    /// Visual effect.
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Direction, if set.
    pub fn subtype(&self) -> Option<TransitionSubtype> {
        self.subtype
    }

    /// Start and end progress.
    pub fn progress(&self) -> (f64, f64) {
        (self.start_progress, self.end_progress)
    }

    pub(crate) fn common_mut(&mut self) -> &mut DescriptorCommon {
        &mut self.common
    }

    pub(crate) fn animation_kind(&self) -> AnimationKind {
        AnimationKind::Transition {
            kind: self.kind,
            subtype: self.subtype,
            start_progress: self.start_progress,
            end_progress: self.end_progress,
        }
    }
}

descriptor_builders!(Transition, with_duration);
