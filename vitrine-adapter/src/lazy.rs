use std::collections::HashMap;

use crate::{Bounds, ElementKey, Viewport, intersection_ratio};

/// Deferred image sources, released once each image first scrolls into view.
#[derive(Clone, Debug)]
pub struct LazyImages<K> {
    pending: HashMap<K, String>,
}

impl<K: ElementKey> LazyImages<K> {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    /// Registers an image whose real source is `src` (the `data-src` attribute).
    pub fn observe(&mut self, key: K, src: impl Into<String>) {
        self.pending.insert(key, src.into());
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    /// Returns the source to load when `key` first intersects the viewport, and stops
    /// observing it.
    pub fn update(&mut self, key: &K, bounds: Bounds, viewport: Viewport) -> Option<String> {
        if !self.pending.contains_key(key) || intersection_ratio(bounds, viewport, 0.0) <= 0.0 {
            return None;
        }
        let src = self.pending.remove(key)?;
        vtrace!(?key, src = src.as_str(), "lazy image released");
        Some(src)
    }
}

impl<K: ElementKey> Default for LazyImages<K> {
    fn default() -> Self {
        Self::new()
    }
}
