//! Host callback adapter.
//!
//! UI hosts drive layouts through a fixed set of callbacks: a size query per
//! axis, a placement call per axis, a per-frame tick, and an explicit
//! "recompute now". [`RowGridDriver`] maps each of those onto the pure
//! [`LayoutProvider`] operations of a [`RowGridLayout`] and owns the
//! scheduling state (enabled flag, refresh policy bookkeeping) the layout
//! itself does not keep.

use rowgrid_core::{ContainerGeometry, LayoutInput, LayoutTarget};
use tracing::trace;

use crate::cache::{PassCache, PassKey};
use crate::config::{RefreshPolicy, RowGridConfig};
use crate::provider::{AssignSummary, LayoutProvider};
use crate::row_grid::RowGridLayout;

/// Drives a [`RowGridLayout`] from host callbacks.
#[derive(Debug)]
pub struct RowGridDriver {
    layout: RowGridLayout,
    enabled: bool,
    started: bool,
    cache: PassCache,
    last_vertical: Option<LayoutInput>,
}

impl Default for RowGridDriver {
    fn default() -> Self {
        Self::new(RowGridConfig::default())
    }
}

impl RowGridDriver {
    /// Create an enabled driver.
    #[must_use]
    pub fn new(config: RowGridConfig) -> Self {
        Self {
            layout: RowGridLayout::new(config),
            enabled: true,
            started: false,
            cache: PassCache::new(),
            last_vertical: None,
        }
    }

    /// The driven layout.
    #[must_use]
    pub const fn layout(&self) -> &RowGridLayout {
        &self.layout
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &RowGridConfig {
        self.layout.config()
    }

    /// Mutable configuration.
    ///
    /// Callers changing configuration outside the host's layout cycle should
    /// follow up with [`force_update`](Self::force_update).
    pub fn config_mut(&mut self) -> &mut RowGridConfig {
        self.layout.config_mut()
    }

    /// Enable or disable placement.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether placement runs.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Last vertical input reported to the host.
    #[must_use]
    pub const fn last_vertical_input(&self) -> Option<LayoutInput> {
        self.last_vertical
    }

    /// Change-detection statistics for [`RefreshPolicy::OnChange`].
    #[must_use]
    pub const fn cache(&self) -> &PassCache {
        &self.cache
    }

    /// Horizontal size query: the grid fills whatever width it is given, so
    /// only the padding is required.
    pub fn calculate_layout_input_horizontal(&self, geometry: &ContainerGeometry) -> LayoutInput {
        LayoutInput::fixed(geometry.padding.horizontal())
    }

    /// Vertical size query.
    pub fn calculate_layout_input_vertical(&mut self, geometry: &ContainerGeometry) -> LayoutInput {
        let input = self.layout.vertical_input(geometry);
        self.last_vertical = Some(input);
        input
    }

    /// Horizontal placement callback.
    ///
    /// Children get both axes at once, so this and
    /// [`set_layout_vertical`](Self::set_layout_vertical) are interchangeable.
    pub fn set_layout_horizontal<T: LayoutTarget>(
        &mut self,
        geometry: &ContainerGeometry,
        children: &mut [T],
    ) -> Option<AssignSummary> {
        self.run(geometry, children)
    }

    /// Vertical placement callback.
    pub fn set_layout_vertical<T: LayoutTarget>(
        &mut self,
        geometry: &ContainerGeometry,
        children: &mut [T],
    ) -> Option<AssignSummary> {
        self.run(geometry, children)
    }

    /// Per-frame tick; lays out according to the configured [`RefreshPolicy`].
    ///
    /// Returns `None` when the pass was skipped.
    pub fn update<T: LayoutTarget>(
        &mut self,
        geometry: &ContainerGeometry,
        children: &mut [T],
    ) -> Option<AssignSummary> {
        let due = match self.config().refresh {
            RefreshPolicy::EveryFrame => true,
            RefreshPolicy::OnceAtStart => !self.started,
            RefreshPolicy::OnChange => {
                let key = self.key(geometry, children);
                !self.cache.is_fresh(&key)
            }
        };

        if due {
            self.run(geometry, children)
        } else {
            trace!(policy = ?self.config().refresh, "row grid update skipped");
            None
        }
    }

    /// Recompute size and placement now.
    ///
    /// The vertical input is recomputed even when the driver is disabled;
    /// placement is not.
    pub fn force_update<T: LayoutTarget>(
        &mut self,
        geometry: &ContainerGeometry,
        children: &mut [T],
    ) -> (LayoutInput, Option<AssignSummary>) {
        let input = self.calculate_layout_input_vertical(geometry);
        (input, self.run(geometry, children))
    }

    fn key<T: LayoutTarget>(&self, geometry: &ContainerGeometry, children: &[T]) -> PassKey {
        let participating = children.iter().filter(|c| c.participates()).count();
        PassKey::new(self.config(), geometry, participating)
    }

    fn run<T: LayoutTarget>(
        &mut self,
        geometry: &ContainerGeometry,
        children: &mut [T],
    ) -> Option<AssignSummary> {
        if !self.enabled {
            trace!("row grid disabled, placement skipped");
            return None;
        }

        let summary = self.layout.assign(geometry, children);
        self.started = true;
        let key = self.key(geometry, children);
        self.cache.record(key);
        Some(summary)
    }
}
