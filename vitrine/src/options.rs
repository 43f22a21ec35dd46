use crate::{AutoPlay, Easing, Suffix};

/// Default counter run length.
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2_000;
/// Default autoplay period.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5_000;
/// Default minimum horizontal travel for a touch drag to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Configuration for [`crate::Counter`].
///
/// The run always starts from 0 and converges to `target`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CounterOptions {
    pub target: f64,
    pub duration_ms: u64,
    pub suffix: Suffix,
    pub easing: Easing,
}

impl CounterOptions {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<Suffix>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            target: 0.0,
            duration_ms: DEFAULT_COUNTER_DURATION_MS,
            suffix: Suffix::None,
            easing: Easing::EaseOutQuart,
        }
    }
}

/// Configuration for [`crate::Carousel`].
///
/// `indicator_count` must be either 0 (no indicators) or equal to `slide_count`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselOptions {
    pub slide_count: usize,
    pub indicator_count: usize,
    pub autoplay_interval_ms: u64,
    pub swipe_threshold: f64,
    /// Initial autoplay state.
    pub autoplay: AutoPlay,
}

impl CarouselOptions {
    /// Options for `slide_count` slides with one indicator per slide.
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            indicator_count: slide_count,
            ..Self::default()
        }
    }

    pub fn with_indicator_count(mut self, indicator_count: usize) -> Self {
        self.indicator_count = indicator_count;
        self
    }

    pub fn with_autoplay_interval_ms(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn with_autoplay(mut self, autoplay: AutoPlay) -> Self {
        self.autoplay = autoplay;
        self
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            slide_count: 0,
            indicator_count: 0,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            autoplay: AutoPlay::Playing,
        }
    }
}
