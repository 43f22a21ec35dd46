/// Distance above a section's top at which it becomes the active navigation target.
pub const DEFAULT_NAV_OFFSET: f64 = 200.0;
/// Parallax elements move at this fraction of the scroll speed, in the opposite direction.
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

/// A navigable page section and the navigation link pointing at it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavSection<K> {
    pub section: K,
    pub link: Option<K>,
    /// Document offset of the section's top edge.
    pub top: f64,
}

/// The section the reader is in: the last one (in document order) whose top, less
/// `offset`, has been scrolled past.
pub fn active_section<K>(sections: &[NavSection<K>], scroll_y: f64, offset: f64) -> Option<&K> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - offset)
        .map(|s| &s.section)
}

/// Scroll position that brings `target_top` just below a fixed header.
pub fn anchor_scroll_target(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}

pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed) + 0.0
}

pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, speed))
}

/// Coalesces bursts of scroll events into at most one unit of work per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollCoalescer {
    pending: bool,
}

impl ScrollCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scroll event. Returns `true` only for the first event since the last frame.
    pub fn on_scroll(&mut self) -> bool {
        !core::mem::replace(&mut self.pending, true)
    }

    /// Called once per frame. Returns `true` if scroll work is due.
    pub fn on_frame(&mut self) -> bool {
        core::mem::take(&mut self.pending)
    }
}
