use crate::Tween;

/// Lifecycle of a single counter run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CounterState {
    #[default]
    Idle,
    Running {
        tween: Tween,
    },
}

/// One rendered counter frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    /// Interpolated value before formatting.
    pub value: f64,
    /// Formatted display text.
    pub text: String,
    /// True for the final frame of the run; no further frames follow.
    pub done: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoPlay {
    #[default]
    Playing,
    Paused,
}

impl AutoPlay {
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

/// An in-progress touch drag. Exists only between touch start and touch end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub start_x: f64,
    pub current_x: f64,
}

impl Gesture {
    /// Positive when the finger moved left (towards the next slide).
    pub fn diff(&self) -> f64 {
        self.start_x - self.current_x
    }
}

/// Inputs that drive the carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    Next,
    Prev,
    GoTo(usize),
    PointerEnter,
    PointerLeave,
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    TouchEnd,
    AutoPlayTick,
}

/// Visual projection of the carousel index.
///
/// Adapters apply `transform()` to the slide track and toggle the "active" marker on
/// indicators according to `is_indicator_active`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselRender {
    pub index: usize,
    pub indicator_count: usize,
}

impl CarouselRender {
    /// Horizontal track offset in percent of the slide width.
    pub fn offset_percent(&self) -> i64 {
        -(self.index as i64) * 100
    }

    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent())
    }

    pub fn is_indicator_active(&self, indicator: usize) -> bool {
        indicator == self.index && indicator < self.indicator_count
    }

    /// Active flags for every indicator, in order.
    pub fn indicators(self) -> impl Iterator<Item = bool> {
        (0..self.indicator_count).map(move |i| self.is_indicator_active(i))
    }
}
