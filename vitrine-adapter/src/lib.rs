//! Adapter utilities for the `vitrine` crate.
//!
//! The `vitrine` crate is UI-agnostic and focuses on the counter and carousel engines. This
//! crate provides small, framework-neutral helpers a host needs to put them on a page:
//!
//! - Host traits describing what gets written (text, classes, transforms, image sources)
//! - A cancellable frame scheduler and a counter driver built on it
//! - Scroll-triggered reveal tracking with a once-per-element trigger guard
//! - Lazy image release, active navigation section, anchor scrolling, parallax and scroll
//!   coalescing
//! - Hover style effects and stylesheet preloading
//! - [`Page`], a composition root wiring all of the above from an injected host and layout
//!
//! This crate does not talk to a DOM itself; bindings implement [`PageHost`].
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod driver;
pub mod error;
mod host;
mod hover;
mod key;
mod lazy;
mod page;
mod reveal;
mod scheduler;
mod scroll;


pub use driver::CounterDriver;
pub use error::InitError;
pub use host::{CarouselSink, KeyedText, PageHost, TextSink, apply_carousel_render};
pub use hover::{GLOW_SHADOW, HoverEffect, Hoverable, LIFT_TRANSFORM};
pub use key::ElementKey;
pub use lazy::LazyImages;
pub use page::{
    CarouselLayout, CounterElement, LazyImage, Page, PageEvent, PageLayout, PageOptions, class,
    parse_leading_number,
};
pub use reveal::{
    Bounds, RevealOptions, RevealTracker, TriggerGuard, Viewport, intersection_ratio,
    is_in_initial_view, is_revealed,
};
pub use scheduler::{FrameHandle, FrameScheduler};
pub use scroll::{
    DEFAULT_NAV_OFFSET, DEFAULT_PARALLAX_SPEED, NavSection, ScrollCoalescer, active_section,
    anchor_scroll_target, parallax_offset, parallax_transform,
};
