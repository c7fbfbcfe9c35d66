//! SVG synthesis and memoization.
//!
//! Tile and item art is synthesized on demand from the asset
//! description. `SvgCache` remembers what it has produced in a bounded
//! map, evicting the oldest entry first; `SvgSynth` redraws every time
//! and never stores anything. Both are only consulted while the world is
//! generated.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Source of SVG art for an asset description.
pub trait SvgSource: Send + Sync {
    fn svg_for(&self, description: &str) -> String;
}

/// Deterministic placeholder art until a real generator exists.
fn synthesize(description: &str) -> String {
    format!("<svg width='100' height='100'><text x='4' y='52'>{description}</text></svg>")
}

#[derive(Default)]
struct CacheInner {
    map: HashMap<String, String>,
    order: VecDeque<String>,
}

/// Bounded memoizing studio.
pub struct SvgCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

impl SvgCache {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(CacheInner::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        // The cache holds no invariants a panicked writer could break.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SvgSource for SvgCache {
    fn svg_for(&self, description: &str) -> String {
        let mut inner = self.lock();
        if let Some(svg) = inner.map.get(description) {
            return svg.clone();
        }
        let svg = synthesize(description);
        if inner.map.len() == self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.map.remove(&oldest);
            }
        }
        inner.map.insert(description.to_string(), svg.clone());
        inner.order.push_back(description.to_string());
        tracing::debug!(description, "Synthesized SVG asset");
        svg
    }
}

/// Fallback studio: always synthesizes, never persists.
#[derive(Debug, Default)]
pub struct SvgSynth;

impl SvgSource for SvgSynth {
    fn svg_for(&self, description: &str) -> String {
        synthesize(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_lookups_hit_the_cache() {
        let cache = SvgCache::new(8);
        let first = cache.svg_for("grass");
        let second = cache.svg_for("grass");
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_descriptions_get_distinct_art() {
        let cache = SvgCache::new(8);
        assert_ne!(cache.svg_for("grass"), cache.svg_for("water"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn the_cache_never_exceeds_capacity() {
        let cache = SvgCache::new(2);
        cache.svg_for("grass");
        cache.svg_for("water");
        cache.svg_for("rock");
        assert_eq!(cache.len(), 2);
        // oldest entry was evicted, newest survive
        assert_eq!(cache.svg_for("rock"), synthesize("rock"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn fallback_synthesizes_without_persisting() {
        let synth = SvgSynth;
        let svg = synth.svg_for("oak staff");
        assert!(svg.contains("oak staff"));
        assert_eq!(svg, synth.svg_for("oak staff"));
    }
}
