//! Change detection between layout passes.

use rowgrid_core::{ContainerGeometry, Size};

use crate::config::{RowAlignment, RowGridConfig, Spacing};

/// Everything a pass depends on, compared by value.
///
/// The refresh policy is not part of the key: it decides when a pass runs,
/// not what it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct PassKey {
    row_counts: Vec<usize>,
    alignment: RowAlignment,
    spacing: Spacing,
    cell_reference_size: Size,
    geometry: ContainerGeometry,
    child_count: usize,
}

impl PassKey {
    /// Capture `config`, `geometry` and the participating child count.
    #[must_use]
    pub fn new(config: &RowGridConfig, geometry: &ContainerGeometry, child_count: usize) -> Self {
        Self {
            row_counts: config.row_counts.clone(),
            alignment: config.alignment,
            spacing: config.spacing,
            cell_reference_size: config.cell_reference_size,
            geometry: *geometry,
            child_count,
        }
    }
}

/// Remembers the inputs of the last pass.
#[derive(Debug, Default)]
pub struct PassCache {
    last: Option<PassKey>,
    hits: usize,
    misses: usize,
}

impl PassCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `key` matches the last recorded pass.
    ///
    /// Counts a hit when it does, a miss otherwise. A key holding NaN never
    /// matches, so such inputs always get a fresh pass.
    pub fn is_fresh(&mut self, key: &PassKey) -> bool {
        if self.last.as_ref() == Some(key) {
            self.hits += 1;
            true
        } else {
            self.misses += 1;
            false
        }
    }

    /// Record the inputs of a pass that just ran.
    pub fn record(&mut self, key: PassKey) {
        self.last = Some(key);
    }

    /// Forget the last pass and reset counters.
    pub fn clear(&mut self) {
        self.last = None;
        self.hits = 0;
        self.misses = 0;
    }

    /// Get the number of cache hits.
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Get the number of cache misses.
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Check if a pass has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RefreshPolicy;
    use rowgrid_core::Padding;

    fn key(config: &RowGridConfig, width: f32, children: usize) -> PassKey {
        PassKey::new(config, &ContainerGeometry::unpadded(width, 100.0), children)
    }

    #[test]
    fn test_cache_new() {
        let cache = PassCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 0);
    }

    #[test]
    fn test_key_stable_for_same_inputs() {
        let config = RowGridConfig::default();
        assert_eq!(key(&config, 400.0, 10), key(&config, 400.0, 10));
    }

    #[test]
    fn test_key_tracks_every_input() {
        let config = RowGridConfig::default();
        let base = key(&config, 400.0, 10);

        assert_ne!(base, key(&config, 401.0, 10));
        assert_ne!(base, key(&config, 400.0, 9));
        assert_ne!(base, key(&config.clone().with_rows([3, 4]), 400.0, 10));
        assert_ne!(base, key(&config.clone().with_fixed_spacing(1.0, 0.0), 400.0, 10));
        assert_ne!(base, key(&config.clone().with_dynamic_spacing(5.0, 5.0), 400.0, 10));

        let padded = ContainerGeometry::unpadded(400.0, 100.0).with_padding(Padding::uniform(1.0));
        assert_ne!(base, PassKey::new(&config, &padded, 10));
    }

    #[test]
    fn test_key_compares_inputs_exactly() {
        let config = RowGridConfig::default();
        let a = key(&config, 400.0, 10);
        let nudged = key(&config, f32::from_bits(400.0f32.to_bits() + 1), 10);
        assert_ne!(a, nudged);

        let mut cache = PassCache::new();
        cache.record(a.clone());
        assert!(!cache.is_fresh(&nudged));
        assert!(cache.is_fresh(&a));
    }

    #[test]
    fn test_key_ignores_refresh_policy() {
        let config = RowGridConfig::default();
        let polled = config.clone().with_refresh(RefreshPolicy::EveryFrame);
        assert_eq!(key(&config, 400.0, 10), key(&polled, 400.0, 10));
    }

    #[test]
    fn test_nan_key_is_never_fresh() {
        let mut cache = PassCache::new();
        let a = key(&RowGridConfig::default(), f32::NAN, 10);
        cache.record(a.clone());
        assert!(!cache.is_fresh(&a));
    }

    #[test]
    fn test_cache_hits_and_misses() {
        let mut cache = PassCache::new();
        let config = RowGridConfig::default();
        let a = key(&config, 400.0, 10);
        let b = key(&config, 200.0, 10);

        assert!(!cache.is_fresh(&a));
        cache.record(a.clone());
        assert!(cache.is_fresh(&a));
        assert!(cache.is_fresh(&a));
        assert!(!cache.is_fresh(&b));

        assert_eq!(cache.hits(), 2);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_cache_clear_resets_stats() {
        let mut cache = PassCache::new();
        let a = key(&RowGridConfig::default(), 400.0, 10);
        cache.record(a.clone());
        let _ = cache.is_fresh(&a);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
        assert!(!cache.is_fresh(&a));
    }
}
