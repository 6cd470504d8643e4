//! The contract between a layout and the host that drives it.

use rowgrid_core::{ContainerGeometry, LayoutInput, LayoutTarget};

/// Outcome of one assignment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssignSummary {
    /// Children that received geometry
    pub placed: usize,
    /// Rows holding at least one placed child
    pub rows_used: usize,
    /// Configured slots left empty because children ran out
    pub empty_slots: usize,
    /// Participating children left untouched because slots ran out
    pub unplaced: usize,
}

impl AssignSummary {
    /// Whether slots were left empty.
    #[must_use]
    pub const fn truncated(&self) -> bool {
        self.empty_slots > 0
    }
}

/// A layout the host can query for size and ask to place children.
///
/// Both methods are pure functions of the layout's configuration and their
/// arguments, so the host may call them in either order and any number of
/// times.
pub trait LayoutProvider {
    /// Vertical extent the layout needs inside `geometry`.
    fn required_height(&self, geometry: &ContainerGeometry) -> f32;

    /// Write position and size onto the participating `children`.
    fn assign<T: LayoutTarget>(
        &self,
        geometry: &ContainerGeometry,
        children: &mut [T],
    ) -> AssignSummary;

    /// The required height as min and preferred extent.
    fn vertical_input(&self, geometry: &ContainerGeometry) -> LayoutInput {
        LayoutInput::fixed(self.required_height(geometry))
    }
}
