use crate::{animation::ease::Ease, foundation::core::TimeInterval};

/// What the engine shows outside an animation's active interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Nothing; the model value shows.
    #[default]
    Removed,
    /// Hold the first frame before the start.
    Backwards,
    /// Hold the last frame after the end.
    Forwards,
    /// Both of the above.
    Both,
}

/// Timing settings of a concrete animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timing {
    /// Active duration; `None` lets the engine pick its default.
    pub duration: Option<TimeInterval>,
    /// Start offset relative to the parent timeline.
    pub begin_time: TimeInterval,
    /// Offset into the animation's own timeline.
    pub time_offset: TimeInterval,
    /// Playback rate.
    pub speed: f64,
    /// Number of repetitions; may be fractional.
    pub repeat_count: f64,
    /// Total repeating time, alternative to `repeat_count`.
    pub repeat_duration: TimeInterval,
    /// Play backwards after each forward pass.
    pub autoreverses: bool,
    /// What shows outside the active interval.
    pub fill_mode: FillMode,
    /// Pacing curve; `None` is linear pacing.
    pub timing_function: Option<Ease>,
    /// Remove from the node when finished.
    pub removed_on_completion: bool,
    /// Add to the current presentation value instead of replacing it.
    pub additive: bool,
    /// Accumulate across repetitions.
    pub cumulative: bool,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: None,
            begin_time: 0.0,
            time_offset: 0.0,
            speed: 1.0,
            repeat_count: 0.0,
            repeat_duration: 0.0,
            autoreverses: false,
            fill_mode: FillMode::Removed,
            timing_function: None,
            removed_on_completion: true,
            additive: false,
            cumulative: false,
        }
    }
}

/// One timing setting layered onto a concrete animation after it is built.
///
/// A descriptor keeps a list of these; they are applied in order, so a later
/// entry for the same setting wins.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "name", content = "value", rename_all = "snake_case")]
pub enum AuxiliaryProperty {
    /// Sets [`Timing::begin_time`].
    BeginTime(TimeInterval),
    /// Sets [`Timing::time_offset`].
    TimeOffset(TimeInterval),
    /// Sets [`Timing::speed`].
    Speed(f64),
    /// Sets [`Timing::repeat_count`].
    RepeatCount(f64),
    /// Sets [`Timing::repeat_duration`].
    RepeatDuration(TimeInterval),
    /// Sets [`Timing::autoreverses`].
    Autoreverses(bool),
    /// Sets [`Timing::fill_mode`].
    FillMode(FillMode),
    /// Sets [`Timing::timing_function`].
    TimingFunction(Ease),
    /// Sets [`Timing::removed_on_completion`].
    RemovedOnCompletion(bool),
    /// Sets [`Timing::additive`].
    Additive(bool),
    /// Sets [`Timing::cumulative`].
    Cumulative(bool),
}

impl AuxiliaryProperty {
    /// Write this setting into `timing`.
    pub fn apply(self, timing: &mut Timing) {
        match self {
            Self::BeginTime(v) => timing.begin_time = v,
            Self::TimeOffset(v) => timing.time_offset = v,
            Self::Speed(v) => timing.speed = v,
            Self::RepeatCount(v) => timing.repeat_count = v,
            Self::RepeatDuration(v) => timing.repeat_duration = v,
            Self::Autoreverses(v) => timing.autoreverses = v,
            Self::FillMode(v) => timing.fill_mode = v,
            Self::TimingFunction(v) => timing.timing_function = Some(v),
            Self::RemovedOnCompletion(v) => timing.removed_on_completion = v,
            Self::Additive(v) => timing.additive = v,
            Self::Cumulative(v) => timing.cumulative = v,
        }
    }
}

impl Timing {
    /// Apply an explicit duration and then every auxiliary setting in order.
    pub fn configured(duration: Option<TimeInterval>, auxiliary: &[AuxiliaryProperty]) -> Self {
        let mut timing = Self {
            duration,
            ..Self::default()
        };
        for aux in auxiliary {
            aux.apply(&mut timing);
        }
        timing
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
