//! Host-facing layout types.
//!
//! A host framework owns the container and its children. It hands this
//! crate a [`ContainerGeometry`] snapshot and a slice of [`LayoutTarget`]s,
//! asks for a [`LayoutInput`] along an [`Axis`], and lets the layout write
//! one `(position, size)` pair per axis onto each child.
//!
//! # Examples
//!
//! ```
//! use rowgrid_core::{Axis, LayoutTarget, Rect};
//!
//! let mut child = Rect::default();
//! child.set_along_axis(Axis::Horizontal, 10.0, 80.0);
//! child.set_along_axis(Axis::Vertical, 5.0, 40.0);
//! assert_eq!(child, Rect::new(10.0, 5.0, 80.0, 40.0));
//! ```

use crate::geometry::{Padding, Rect, Size};
use serde::{Deserialize, Serialize};

/// Layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// X axis
    Horizontal,
    /// Y axis
    Vertical,
}

/// Size requirements reported to the host along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutInput {
    /// Minimum extent
    pub min: f32,
    /// Preferred extent
    pub preferred: f32,
    /// Flexible weight; `None` means the container does not grow
    pub flexible: Option<f32>,
}

impl LayoutInput {
    /// A rigid extent: min and preferred are both `extent`, no flex.
    #[must_use]
    pub const fn fixed(extent: f32) -> Self {
        Self {
            min: extent,
            preferred: extent,
            flexible: None,
        }
    }
}

/// Snapshot of the container rectangle the host is laying out.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerGeometry {
    /// Full container size, padding included
    pub size: Size,
    /// Padding inside the container
    #[serde(default)]
    pub padding: Padding,
}

impl ContainerGeometry {
    /// Create a geometry snapshot.
    #[must_use]
    pub const fn new(size: Size, padding: Padding) -> Self {
        Self { size, padding }
    }

    /// Container of the given size with no padding.
    #[must_use]
    pub const fn unpadded(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height), Padding::ZERO)
    }

    /// Set padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Width left after horizontal padding.
    #[must_use]
    pub fn inner_width(&self) -> f32 {
        self.size.width - self.padding.horizontal()
    }

    /// Height left after vertical padding.
    #[must_use]
    pub fn inner_height(&self) -> f32 {
        self.size.height - self.padding.vertical()
    }

    /// Content rectangle in container-local coordinates.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        Rect::from_size(self.size).deflate(&self.padding)
    }
}

/// A child element whose rectangle a layout can write.
///
/// Positions are relative to the container's top-left corner, y growing
/// downwards.
pub trait LayoutTarget {
    /// Set position and size along one axis.
    fn set_along_axis(&mut self, axis: Axis, position: f32, size: f32);

    /// Whether this child takes part in layout.
    ///
    /// Children returning `false` are skipped: they consume no slot and keep
    /// whatever geometry they had.
    fn participates(&self) -> bool {
        true
    }
}

impl LayoutTarget for Rect {
    fn set_along_axis(&mut self, axis: Axis, position: f32, size: f32) {
        match axis {
            Axis::Horizontal => {
                self.x = position;
                self.width = size;
            }
            Axis::Vertical => {
                self.y = position;
                self.height = size;
            }
        }
    }
}

impl<T: LayoutTarget + ?Sized> LayoutTarget for Box<T> {
    fn set_along_axis(&mut self, axis: Axis, position: f32, size: f32) {
        (**self).set_along_axis(axis, position, size);
    }

    fn participates(&self) -> bool {
        (**self).participates()
    }
}

impl<T: LayoutTarget + ?Sized> LayoutTarget for &mut T {
    fn set_along_axis(&mut self, axis: Axis, position: f32, size: f32) {
        (**self).set_along_axis(axis, position, size);
    }

    fn participates(&self) -> bool {
        (**self).participates()
    }
}
