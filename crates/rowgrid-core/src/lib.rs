//! Core types and traits for rowgrid layouts.
//!
//! This crate provides the types shared between a host UI framework and the
//! layouts in `rowgrid-layout`:
//! - Geometric primitives: [`Size`], [`Rect`], [`Padding`]
//! - Host contract: [`ContainerGeometry`], [`LayoutTarget`], [`LayoutInput`], [`Axis`]

mod geometry;
mod target;

pub use geometry::{Padding, Rect, Size};
pub use target::{Axis, ContainerGeometry, LayoutInput, LayoutTarget};
