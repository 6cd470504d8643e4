//! Variable-row grid layout.
//!
//! Children fill rows top to bottom, each row holding the number of cells
//! its entry in [`RowGridConfig::row_counts`] asks for. All cells share one
//! size: the widest row spans the inner width, and cell height follows from
//! the reference aspect ratio. Narrower rows are aligned left, center or
//! right.
//!
//! ```text
//!   row_counts = [3, 4, 3], alignment = Center
//!
//!   |    [0] [1] [2]    |
//!   |  [3] [4] [5] [6]  |
//!   |    [7] [8] [9]    |
//! ```
//!
//! When children run out, the remaining slots and rows are left empty.
//! Children beyond the last slot get no geometry.

use rowgrid_core::{Axis, ContainerGeometry, LayoutTarget, Rect};
use tracing::{debug, trace};

use crate::config::RowGridConfig;
use crate::metrics::GridMetrics;
use crate::provider::{AssignSummary, LayoutProvider};

/// Geometry of one configured row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSpan {
    /// Row index, top to bottom
    pub index: usize,
    /// Configured cell count
    pub count: usize,
    /// Area covered by the row's cells, gaps included
    pub bounds: Rect,
}

impl RowSpan {
    /// Rectangle of cell `slot` in this row.
    #[must_use]
    pub fn cell(&self, slot: usize, metrics: &GridMetrics) -> Rect {
        Rect::new(
            self.bounds.x + slot as f32 * metrics.column_pitch(),
            self.bounds.y,
            metrics.cell.width,
            metrics.cell.height,
        )
    }
}

/// Lays children out in rows of varying length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowGridLayout {
    config: RowGridConfig,
}

impl RowGridLayout {
    /// Create a layout from its configuration.
    #[must_use]
    pub const fn new(config: RowGridConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &RowGridConfig {
        &self.config
    }

    /// Mutable configuration; changes apply on the next pass.
    pub fn config_mut(&mut self) -> &mut RowGridConfig {
        &mut self.config
    }

    /// Cell and spacing geometry for `geometry`.
    #[must_use]
    pub fn metrics(&self, geometry: &ContainerGeometry) -> GridMetrics {
        GridMetrics::compute(&self.config, geometry)
    }

    /// Geometry of every configured row, whether or not it gets children.
    #[must_use]
    pub fn row_spans(&self, geometry: &ContainerGeometry) -> Vec<RowSpan> {
        let metrics = self.metrics(geometry);
        self.spans(&metrics, geometry)
    }

    /// Rectangles the assignment pass would give to `child_count` children.
    ///
    /// The result holds `min(child_count, slots)` rectangles, in child order.
    #[must_use]
    pub fn plan(&self, geometry: &ContainerGeometry, child_count: usize) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(child_count.min(self.config.slots()));
        self.place_slots(geometry, child_count, |_, rect| rects.push(rect));
        rects
    }

    fn spans(&self, metrics: &GridMetrics, geometry: &ContainerGeometry) -> Vec<RowSpan> {
        let content = geometry.content_rect();
        let mut y = content.y;

        self.config
            .row_counts
            .iter()
            .enumerate()
            .map(|(index, &count)| {
                let width = metrics.row_width(count);
                let x = self.config.alignment.start_x(content.x, content.width, width);
                let span = RowSpan {
                    index,
                    count,
                    bounds: Rect::new(x, y, width, metrics.cell.height),
                };
                y += metrics.row_pitch();
                span
            })
            .collect()
    }

    /// Walk rows and slots in order, handing each of the first
    /// `child_count` slots to `place`.
    fn place_slots(
        &self,
        geometry: &ContainerGeometry,
        child_count: usize,
        mut place: impl FnMut(usize, Rect),
    ) -> AssignSummary {
        let metrics = self.metrics(geometry);
        debug!(
            rows = metrics.rows,
            columns = metrics.columns,
            cell_width = metrics.cell.width,
            cell_height = metrics.cell.height,
            spacing_x = metrics.spacing.x,
            spacing_y = metrics.spacing.y,
            children = child_count,
            "row grid pass"
        );

        let mut summary = AssignSummary::default();
        let mut child = 0;

        for span in self.spans(&metrics, geometry) {
            if child >= child_count {
                trace!(row = span.index, "children exhausted, remaining rows skipped");
                break;
            }

            let first = child;
            for slot in 0..span.count {
                if child >= child_count {
                    break;
                }
                place(child, span.cell(slot, &metrics));
                child += 1;
            }

            if child > first {
                summary.rows_used += 1;
            }
            trace!(
                row = span.index,
                count = span.count,
                placed = child - first,
                x = span.bounds.x,
                y = span.bounds.y,
                "row placed"
            );
        }

        summary.placed = child;
        summary.empty_slots = self.config.slots().saturating_sub(child);
        summary.unplaced = child_count - child;
        summary
    }
}

impl LayoutProvider for RowGridLayout {
    fn required_height(&self, geometry: &ContainerGeometry) -> f32 {
        let metrics = self.metrics(geometry);
        let height = metrics.content_height() + geometry.padding.vertical();
        debug!(rows = metrics.rows, height, "row grid required height");
        height
    }

    fn assign<T: LayoutTarget>(
        &self,
        geometry: &ContainerGeometry,
        children: &mut [T],
    ) -> AssignSummary {
        let targets: Vec<usize> = children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.participates())
            .map(|(i, _)| i)
            .collect();

        self.place_slots(geometry, targets.len(), |k, rect| {
            let child = &mut children[targets[k]];
            child.set_along_axis(Axis::Horizontal, rect.x, rect.width);
            child.set_along_axis(Axis::Vertical, rect.y, rect.height);
        })
    }
}
