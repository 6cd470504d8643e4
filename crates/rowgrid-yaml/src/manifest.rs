//! YAML manifest for a row grid.

use rowgrid_core::ContainerGeometry;
use rowgrid_layout::{RowGridConfig, RowGridDriver};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// A row grid configuration, optionally with the container it is laid out in.
///
/// ```yaml
/// grid:
///   row_counts: [3, 4, 3]
///   alignment: center
///   spacing:
///     dynamic: true
///     percent: { x: 5, y: 5 }
///   cell_reference_size: { width: 160, height: 90 }
///   refresh: on_change
/// container:
///   size: { width: 800, height: 600 }
///   padding: { left: 16, right: 16, top: 8, bottom: 8 }
/// ```
///
/// Missing grid fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridManifest {
    /// Grid configuration
    #[serde(default)]
    pub grid: RowGridConfig,
    /// Container geometry, for hosts that size the container from config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerGeometry>,
}

impl GridManifest {
    /// Parse a manifest from YAML without validating values.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse and validate a manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or a value fails
    /// [`validate`](Self::validate).
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let manifest = Self::from_yaml(yaml)?;
        manifest.validate()?;
        debug!(
            rows = manifest.grid.row_counts.len(),
            has_container = manifest.container.is_some(),
            "loaded row grid manifest"
        );
        Ok(manifest)
    }

    /// Serialize manifest to YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Reject values no sensible layout can be built from.
    ///
    /// The layout itself tolerates all of these; validation only guards
    /// hand-written configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = &self.grid;
        grid.row_counts
            .iter()
            .try_fold(0usize, |total, &count| total.checked_add(count))
            .ok_or_else(|| ConfigError::invalid("grid.row_counts", "total slot count overflows"))?;
        let spacing = &grid.spacing;
        non_negative("grid.spacing.fixed.x", spacing.fixed.x)?;
        non_negative("grid.spacing.fixed.y", spacing.fixed.y)?;
        non_negative("grid.spacing.percent.x", spacing.percent.x)?;
        non_negative("grid.spacing.percent.y", spacing.percent.y)?;
        non_negative(
            "grid.cell_reference_size.width",
            grid.cell_reference_size.width,
        )?;
        non_negative(
            "grid.cell_reference_size.height",
            grid.cell_reference_size.height,
        )?;

        if let Some(container) = &self.container {
            non_negative("container.size.width", container.size.width)?;
            non_negative("container.size.height", container.size.height)?;
            let padding = &container.padding;
            non_negative("container.padding.left", padding.left)?;
            non_negative("container.padding.right", padding.right)?;
            non_negative("container.padding.top", padding.top)?;
            non_negative("container.padding.bottom", padding.bottom)?;
        }

        Ok(())
    }

    /// Build a driver for the configured grid.
    #[must_use]
    pub fn driver(&self) -> RowGridDriver {
        RowGridDriver::new(self.grid.clone())
    }
}

fn non_negative(field: &str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        Err(ConfigError::invalid(field, "must be finite"))
    } else if value < 0.0 {
        Err(ConfigError::invalid(field, "must not be negative"))
    } else {
        Ok(())
    }
}
