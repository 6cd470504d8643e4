//! Integration tests for rowgrid-layout.
//!
//! These tests drive the layout the way a host framework would: through the
//! driver's callbacks, over a heterogeneous list of boxed children.

use rowgrid_core::{Axis, ContainerGeometry, LayoutTarget, Padding, Rect, Size};
use rowgrid_layout::{
    LayoutProvider, RefreshPolicy, RowAlignment, RowGridConfig, RowGridDriver, RowGridLayout,
};

// =============================================================================
// Test Children
// =============================================================================

/// A child that records every axis write it receives.
#[derive(Debug, Default)]
struct Recorder {
    rect: Rect,
    writes: Vec<Axis>,
    hidden: bool,
}

impl Recorder {
    fn hidden(rect: Rect) -> Self {
        Self {
            rect,
            writes: Vec::new(),
            hidden: true,
        }
    }
}

impl LayoutTarget for Recorder {
    fn set_along_axis(&mut self, axis: Axis, position: f32, size: f32) {
        self.writes.push(axis);
        self.rect.set_along_axis(axis, position, size);
    }

    fn participates(&self) -> bool {
        !self.hidden
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("rowgrid_layout=trace")
        .try_init();
}

// =============================================================================
// Host lifecycle
// =============================================================================

#[test]
fn test_host_cycle_size_then_place() {
    init_tracing();
    let mut driver = RowGridDriver::new(
        RowGridConfig::new([3, 4, 3]).with_fixed_spacing(10.0, 10.0),
    );
    let geometry =
        ContainerGeometry::new(Size::new(450.0, 0.0), Padding::new(10.0, 10.0, 20.0, 20.0));
    let mut children: Vec<Box<dyn LayoutTarget>> =
        (0..10).map(|_| Box::new(Recorder::default()) as Box<dyn LayoutTarget>).collect();

    let horizontal = driver.calculate_layout_input_horizontal(&geometry);
    assert_eq!(horizontal.min, 20.0);

    // inner width 430, 4 columns, 3 gaps of 10 -> cells of 100
    let vertical = driver.calculate_layout_input_vertical(&geometry);
    assert_eq!(vertical.preferred, 20.0 + 3.0 * 100.0 + 2.0 * 10.0 + 20.0);

    let summary = driver
        .set_layout_horizontal(&geometry, &mut children)
        .expect("driver is enabled");
    assert_eq!(summary.placed, 10);
    assert!(driver.set_layout_vertical(&geometry, &mut children).is_some());
}

#[test]
fn test_every_child_gets_both_axes() {
    let layout = RowGridLayout::new(RowGridConfig::new([2, 1]));
    let geometry = ContainerGeometry::unpadded(200.0, 200.0);
    let mut children: Vec<Recorder> = (0..3).map(|_| Recorder::default()).collect();

    layout.assign(&geometry, &mut children);

    for child in &children {
        assert_eq!(child.writes, vec![Axis::Horizontal, Axis::Vertical]);
    }
    assert_eq!(children[2].rect, Rect::new(50.0, 100.0, 100.0, 100.0));
}

#[test]
fn test_inactive_children_do_not_consume_slots() {
    let layout = RowGridLayout::new(RowGridConfig::new([2]).with_alignment(RowAlignment::Left));
    let geometry = ContainerGeometry::unpadded(200.0, 100.0);
    let parked = Rect::new(-50.0, -50.0, 10.0, 10.0);

    let mut children = vec![
        Recorder::hidden(parked),
        Recorder::default(),
        Recorder::default(),
    ];

    let summary = layout.assign(&geometry, &mut children);
    assert_eq!(summary.placed, 2);
    assert_eq!(summary.unplaced, 0);
    assert_eq!(summary.empty_slots, 0);

    assert_eq!(children[0].rect, parked);
    assert!(children[0].writes.is_empty());
    assert_eq!(children[1].rect, Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(children[2].rect, Rect::new(100.0, 0.0, 100.0, 100.0));
}

#[test]
fn test_reported_height_matches_placement() {
    let configs = [
        RowGridConfig::new([3, 4, 3]),
        RowGridConfig::new([1, 5]).with_fixed_spacing(6.0, 12.0),
        RowGridConfig::new([2, 2, 2, 2])
            .with_dynamic_spacing(5.0, 5.0)
            .with_cell_reference_size(Size::new(16.0, 9.0)),
    ];
    let geometry =
        ContainerGeometry::new(Size::new(640.0, 480.0), Padding::new(8.0, 8.0, 16.0, 4.0));

    for config in configs {
        let layout = RowGridLayout::new(config);
        let slots = layout.config().slots();
        let mut children = vec![Rect::default(); slots];
        layout.assign(&geometry, &mut children);

        let bottom = children.iter().map(Rect::bottom).fold(0.0f32, f32::max);
        let required = layout.required_height(&geometry);
        assert!(
            (required - (bottom + geometry.padding.bottom)).abs() < 1e-2,
            "required {required} vs laid out {bottom}"
        );
    }
}

#[test]
fn test_per_frame_policies() {
    let geometry = ContainerGeometry::unpadded(300.0, 300.0);
    let mut children = vec![Rect::default(); 3];

    let mut polled =
        RowGridDriver::new(RowGridConfig::new([3]).with_refresh(RefreshPolicy::EveryFrame));
    let mut once = RowGridDriver::new(RowGridConfig::new([3]));

    let polled_runs = (0..5)
        .filter(|_| polled.update(&geometry, &mut children).is_some())
        .count();
    let once_runs = (0..5)
        .filter(|_| once.update(&geometry, &mut children).is_some())
        .count();

    assert_eq!(polled_runs, 5);
    assert_eq!(once_runs, 1);
}

#[test]
fn test_programmatic_change_then_force_update() {
    let geometry = ContainerGeometry::unpadded(300.0, 300.0);
    let mut children = vec![Rect::default(); 3];
    let mut driver = RowGridDriver::new(RowGridConfig::new([3]));
    driver.update(&geometry, &mut children);
    assert_eq!(children[2], Rect::new(200.0, 0.0, 100.0, 100.0));

    driver.config_mut().row_counts = vec![1, 2];
    driver.config_mut().alignment = RowAlignment::Right;
    // once-only policy: the tick does nothing, the forced pass applies it
    assert!(driver.update(&geometry, &mut children).is_none());
    let (input, _) = driver.force_update(&geometry, &mut children);

    assert_eq!(input.preferred, 300.0);
    assert_eq!(children[0], Rect::new(150.0, 0.0, 150.0, 150.0));
    assert_eq!(children[2], Rect::new(150.0, 150.0, 150.0, 150.0));
}
