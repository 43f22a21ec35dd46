//! A headless presentation-effects engine.
//!
//! For adapter-level utilities (frame scheduling, reveal tracking, page wiring), see the
//! `vitrine-adapter` crate.
//!
//! This crate provides two self-contained engines:
//! - [`Counter`]: a time-driven, eased count-up from 0 to a target, formatted per frame
//!   according to a [`Suffix`] policy.
//! - [`Carousel`]: a circular slide-index state machine with autoplay, hover pause, and
//!   touch swipe handling, projected onto a track offset and indicator flags.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - timestamps (milliseconds, monotonic)
//! - input events (clicks, pointer enter/leave, touch positions)
//! - a place to write the returned text / transforms
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod carousel;
mod counter;
mod easing;
pub mod error;
mod format;
mod options;
mod state;
mod tween;
mod types;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use counter::Counter;
pub use easing::Easing;
pub use error::{Error, Result};
pub use format::Suffix;
pub use options::{
    CarouselOptions, CounterOptions, DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_COUNTER_DURATION_MS,
    DEFAULT_SWIPE_THRESHOLD,
};
pub use state::{CarouselSnapshot, CounterSnapshot};
pub use tween::Tween;
pub use types::{AutoPlay, CarouselEvent, CarouselRender, CounterFrame, CounterState, Gesture};
