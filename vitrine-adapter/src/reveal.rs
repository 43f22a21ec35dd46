use std::collections::{HashMap, HashSet};

use crate::ElementKey;

/// An element's bounding box in viewport coordinates (CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
            left,
            right: left + width,
        }
    }

    pub fn width(&self) -> f64 {
        (self.right - self.left).max(0.0)
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Visibility trigger configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RevealOptions {
    /// Fraction of the element that must be visible, in `[0, 1]`.
    pub threshold: f64,
    /// Added to the viewport's bottom edge; negative values shrink the trigger area.
    pub root_margin_bottom: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_bottom: -50.0,
        }
    }
}

/// Fraction of `bounds` inside the viewport (extended by `root_margin_bottom`).
///
/// Zero-area elements report 1.0 when they lie within the root and 0.0 otherwise.
pub fn intersection_ratio(bounds: Bounds, viewport: Viewport, root_margin_bottom: f64) -> f64 {
    let root_bottom = viewport.height + root_margin_bottom;
    let top = bounds.top.max(0.0);
    let bottom = bounds.bottom.min(root_bottom);
    let left = bounds.left.max(0.0);
    let right = bounds.right.min(viewport.width);

    if bottom < top || right < left {
        return 0.0;
    }

    let area = bounds.area();
    if area <= 0.0 {
        return 1.0;
    }
    ((bottom - top) * (right - left) / area).clamp(0.0, 1.0)
}

/// Whether an element counts as visible under `options`.
pub fn is_revealed(bounds: Bounds, viewport: Viewport, options: &RevealOptions) -> bool {
    let ratio = intersection_ratio(bounds, viewport, options.root_margin_bottom);
    ratio > 0.0 && ratio >= options.threshold
}

/// The on-load visibility check: any vertical overlap with the viewport.
pub fn is_in_initial_view(bounds: Bounds, viewport: Viewport) -> bool {
    bounds.top < viewport.height && bounds.bottom > 0.0
}

/// Tracks which observed elements have been revealed.
///
/// An element is revealed at most once; later layout updates are ignored.
#[derive(Clone, Debug)]
pub struct RevealTracker<K> {
    options: RevealOptions,
    revealed: HashMap<K, bool>,
}

impl<K: ElementKey> RevealTracker<K> {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            revealed: HashMap::new(),
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn observe(&mut self, key: K) {
        self.revealed.entry(key).or_insert(false);
    }

    pub fn is_observed(&self, key: &K) -> bool {
        self.revealed.contains_key(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.get(key).copied().unwrap_or(false)
    }

    /// Reports new bounds for `key`. Returns `true` only on the update that reveals it.
    pub fn update(&mut self, key: &K, bounds: Bounds, viewport: Viewport) -> bool {
        let Some(revealed) = self.revealed.get_mut(key) else {
            return false;
        };
        if *revealed || !is_revealed(bounds, viewport, &self.options) {
            return false;
        }
        *revealed = true;
        vtrace!(?key, "revealed");
        true
    }
}

impl<K: ElementKey> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new(RevealOptions::default())
    }
}

/// Per-element "already triggered" flags.
///
/// Guards against starting a second counter for an element that was already animated,
/// whichever trigger (on-load check or reveal) gets there first.
#[derive(Clone, Debug)]
pub struct TriggerGuard<K> {
    claimed: HashSet<K>,
}

impl<K: ElementKey> TriggerGuard<K> {
    pub fn new() -> Self {
        Self {
            claimed: HashSet::new(),
        }
    }

    /// Returns `true` the first time it is called for `key`.
    pub fn try_claim(&mut self, key: K) -> bool {
        self.claimed.insert(key)
    }

    pub fn is_claimed(&self, key: &K) -> bool {
        self.claimed.contains(key)
    }
}

impl<K: ElementKey> Default for TriggerGuard<K> {
    fn default() -> Self {
        Self::new()
    }
}
