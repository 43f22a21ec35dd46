use crate::AutoPlay;

/// A lightweight, serializable snapshot of a counter.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterSnapshot {
    pub target: f64,
    pub duration_ms: u64,
    pub is_animating: bool,
    /// Start of the current run, if one is in progress.
    pub start_ms: Option<u64>,
}

/// A lightweight, serializable snapshot of a carousel.
///
/// This is useful for mirroring carousel state into a host (or a test) without
/// coupling the carousel to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselSnapshot {
    pub index: usize,
    pub slide_count: usize,
    pub autoplay: AutoPlay,
    pub is_dragging: bool,
}
