#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Variable-row grid layout for rowgrid hosts.
//!
//! Arranges children into rows whose lengths vary per row (3, then 4, then
//! 3, ...) with fixed or container-relative spacing, a shared cell aspect
//! ratio, and per-row left/center/right alignment.
//!
//! - [`RowGridLayout`] is the pure layout, implementing [`LayoutProvider`]
//! - [`RowGridDriver`] adapts it to host callbacks and refresh policies
//!
//! # Example
//!
//! ```
//! use rowgrid_core::{ContainerGeometry, Rect};
//! use rowgrid_layout::{LayoutProvider, RowGridConfig, RowGridLayout};
//!
//! let layout = RowGridLayout::new(RowGridConfig::new([3, 4, 3]));
//! let geometry = ContainerGeometry::unpadded(400.0, 300.0);
//! let mut children = vec![Rect::default(); 10];
//!
//! assert_eq!(layout.required_height(&geometry), 300.0);
//! layout.assign(&geometry, &mut children);
//! assert_eq!(children[0], Rect::new(50.0, 0.0, 100.0, 100.0));
//! ```

mod cache;
mod config;
mod driver;
mod metrics;
mod provider;
mod row_grid;

pub use cache::{PassCache, PassKey};
pub use config::{Gap, RefreshPolicy, RowAlignment, RowGridConfig, Spacing};
pub use driver::RowGridDriver;
pub use metrics::GridMetrics;
pub use provider::{AssignSummary, LayoutProvider};
pub use row_grid::{RowGridLayout, RowSpan};
