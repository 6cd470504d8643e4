//! Row grid configuration types.

use rowgrid_core::Size;
use serde::{Deserialize, Serialize};

/// Horizontal placement of a row narrower than the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAlignment {
    /// Pack against the left padding
    Left,
    /// Center in the available width
    #[default]
    Center,
    /// Pack against the right padding
    Right,
}

impl RowAlignment {
    /// X where a row of `row_width` starts.
    ///
    /// `left` is the left padding, `available` the width between paddings.
    /// Rows wider than `available` start left of the padding when centered
    /// or right-aligned; nothing is clamped.
    #[must_use]
    pub fn start_x(self, left: f32, available: f32, row_width: f32) -> f32 {
        match self {
            Self::Left => left,
            Self::Center => left + (available - row_width) / 2.0,
            Self::Right => left + (available - row_width),
        }
    }
}

/// A horizontal/vertical pair of gaps.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Gap {
    /// Gap between neighbouring cells of a row
    pub x: f32,
    /// Gap between rows
    pub y: f32,
}

impl Gap {
    /// No gap
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a gap pair.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

}

/// Spacing between cells, fixed or relative to the container.
///
/// Both vectors stay editable while `dynamic` is toggled; only the active
/// one feeds the layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Fixed gaps in layout units
    pub fixed: Gap,
    /// Use `percent` instead of `fixed`
    pub dynamic: bool,
    /// Gaps as a percentage of the inner width (x) and inner height (y)
    pub percent: Gap,
}

impl Spacing {
    /// Percentage used when dynamic spacing is switched on without values.
    pub const DEFAULT_PERCENT: Gap = Gap { x: 5.0, y: 5.0 };

    /// Fixed spacing.
    #[must_use]
    pub const fn fixed(x: f32, y: f32) -> Self {
        Self {
            fixed: Gap::new(x, y),
            dynamic: false,
            percent: Self::DEFAULT_PERCENT,
        }
    }

    /// Dynamic spacing, in percent of the inner container extent.
    #[must_use]
    pub const fn percent(x: f32, y: f32) -> Self {
        Self {
            fixed: Gap::ZERO,
            dynamic: true,
            percent: Gap::new(x, y),
        }
    }

    /// Gaps for a container whose inner extent is `inner_width` x `inner_height`.
    #[must_use]
    pub fn resolve(&self, inner_width: f32, inner_height: f32) -> Gap {
        if self.dynamic {
            Gap::new(
                inner_width * self.percent.x / 100.0,
                inner_height * self.percent.y / 100.0,
            )
        } else {
            self.fixed
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::fixed(0.0, 0.0)
    }
}

/// When the per-frame hook recomputes the layout.
///
/// Host layout callbacks always run a pass; this only governs
/// [`RowGridDriver::update`](crate::RowGridDriver::update).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Lay out on the first update only
    #[default]
    OnceAtStart,
    /// Lay out on every update, unconditionally
    EveryFrame,
    /// Lay out when configuration, geometry or child count changed
    OnChange,
}

/// Configuration of a variable-row grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowGridConfig {
    /// Number of elements in each row, top to bottom
    pub row_counts: Vec<usize>,
    /// Horizontal alignment of each row
    pub alignment: RowAlignment,
    /// Spacing between cells and rows
    pub spacing: Spacing,
    /// Reference cell size; only its height/width ratio is used
    pub cell_reference_size: Size,
    /// Per-frame recomputation policy
    pub refresh: RefreshPolicy,
}

impl Default for RowGridConfig {
    fn default() -> Self {
        Self {
            row_counts: vec![3, 4, 3],
            alignment: RowAlignment::Center,
            spacing: Spacing::default(),
            cell_reference_size: Size::square(100.0),
            refresh: RefreshPolicy::OnceAtStart,
        }
    }
}

impl RowGridConfig {
    /// Create a config with the given row counts and default everything else.
    #[must_use]
    pub fn new(row_counts: impl IntoIterator<Item = usize>) -> Self {
        Self::default().with_rows(row_counts)
    }

    /// Set row counts.
    #[must_use]
    pub fn with_rows(mut self, row_counts: impl IntoIterator<Item = usize>) -> Self {
        self.row_counts = row_counts.into_iter().collect();
        self
    }

    /// Set alignment.
    #[must_use]
    pub const fn with_alignment(mut self, alignment: RowAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Use fixed spacing.
    #[must_use]
    pub const fn with_fixed_spacing(mut self, x: f32, y: f32) -> Self {
        self.spacing.fixed = Gap::new(x, y);
        self.spacing.dynamic = false;
        self
    }

    /// Use spacing as a percentage of the inner container extent.
    #[must_use]
    pub const fn with_dynamic_spacing(mut self, x_percent: f32, y_percent: f32) -> Self {
        self.spacing.percent = Gap::new(x_percent, y_percent);
        self.spacing.dynamic = true;
        self
    }

    /// Set the reference cell size.
    #[must_use]
    pub const fn with_cell_reference_size(mut self, size: Size) -> Self {
        self.cell_reference_size = size;
        self
    }

    /// Set the refresh policy.
    #[must_use]
    pub const fn with_refresh(mut self, refresh: RefreshPolicy) -> Self {
        self.refresh = refresh;
        self
    }

    /// Height/width ratio of a cell (1 for a zero-width reference).
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.cell_reference_size.height_per_width()
    }

    /// Column count of the widest row, floored at 1.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.row_counts.iter().copied().max().unwrap_or(1).max(1)
    }

    /// Number of configured rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.row_counts.len()
    }

    /// Total slots across all rows, saturating at `usize::MAX`.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.row_counts
            .iter()
            .fold(0usize, |total, &count| total.saturating_add(count))
    }
}
