//! YAML configuration loader for rowgrid layouts.
//!
//! ```
//! use rowgrid_yaml::GridManifest;
//!
//! let manifest = GridManifest::parse("grid:\n  row_counts: [2, 3]\n").unwrap();
//! assert_eq!(manifest.grid.row_counts, vec![2, 3]);
//! ```

mod error;
mod manifest;

pub use error::ConfigError;
pub use manifest::GridManifest;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rowgrid_layout::RowGridConfig;

    proptest! {
        #[test]
        fn prop_non_negative_config_validates(
            rows in prop::collection::vec(0usize..10, 0..6),
            gap in 0.0f32..100.0,
            pct in 0.0f32..50.0,
            ref_w in 0.0f32..500.0,
            ref_h in 0.0f32..500.0,
        ) {
            let manifest = GridManifest {
                grid: RowGridConfig::new(rows)
                    .with_fixed_spacing(gap, gap)
                    .with_dynamic_spacing(pct, pct)
                    .with_cell_reference_size(rowgrid_core::Size::new(ref_w, ref_h)),
                container: None,
            };
            prop_assert!(manifest.validate().is_ok());
        }

        #[test]
        fn prop_negative_gap_rejected(gap in -100.0f32..-0.001) {
            let manifest = GridManifest {
                grid: RowGridConfig::default().with_fixed_spacing(1.0, gap),
                container: None,
            };
            prop_assert!(
                matches!(manifest.validate(), Err(ConfigError::InvalidValue { .. })),
                "negative gap must be rejected"
            );
        }
    }
}
