//! Derived grid geometry shared by the size query and the assignment pass.

use rowgrid_core::{ContainerGeometry, Size};

use crate::config::{Gap, RowGridConfig};

/// Cell and spacing geometry for one pass.
///
/// Both the height query and the assignment pass build their numbers from
/// [`GridMetrics::compute`], so the height reported to the host is always
/// the height the children end up occupying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Resolved spacing
    pub spacing: Gap,
    /// Column count of the widest row (at least 1)
    pub columns: usize,
    /// Configured row count
    pub rows: usize,
    /// Cell size; `height == width * aspect ratio`
    pub cell: Size,
}

impl GridMetrics {
    /// Compute metrics for `config` inside `geometry`.
    #[must_use]
    pub fn compute(config: &RowGridConfig, geometry: &ContainerGeometry) -> Self {
        let inner_width = geometry.inner_width();
        let spacing = config
            .spacing
            .resolve(inner_width, geometry.inner_height());
        let columns = config.columns();
        let cols = columns as f32;

        let cell_width = (inner_width - spacing.x * (cols - 1.0)) / cols;
        let cell_height = cell_width * config.aspect_ratio();

        Self {
            spacing,
            columns,
            rows: config.rows(),
            cell: Size::new(cell_width, cell_height),
        }
    }

    /// Width of a row holding `count` cells.
    ///
    /// An empty row has a width of `-spacing.x`, mirroring the slot formula.
    #[must_use]
    pub fn row_width(&self, count: usize) -> f32 {
        let n = count as f32;
        n * self.cell.width + (n - 1.0) * self.spacing.x
    }

    /// Distance from one row's top edge to the next.
    #[must_use]
    pub fn row_pitch(&self) -> f32 {
        self.cell.height + self.spacing.y
    }

    /// Distance from one cell's left edge to the next in the same row.
    #[must_use]
    pub fn column_pitch(&self) -> f32 {
        self.cell.width + self.spacing.x
    }

    /// Height taken by the rows alone, without padding.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        let rows = self.rows as f32;
        let gaps = self.rows.saturating_sub(1) as f32;
        rows * self.cell.height + gaps * self.spacing.y
    }
}
