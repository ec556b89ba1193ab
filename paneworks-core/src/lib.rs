//! `PaneWorks` Core Library
//!
//! This crate provides the split-layout engine for the `PaneWorks` terminal
//! workspace: the recursive tree that partitions a window into pane regions,
//! the copy-on-write mutations that reshape it, the pointer-drag resize
//! controller, and the glue that maps the tree onto host-rendered panes.
//!
//! # Crate Structure
//!
//! - [`layout`] - Workspace tree, mutations, drag controller, render glue
//!
//! The engine is deliberately host-agnostic: it performs no I/O, draws
//! nothing, and owns no pane content. Hosts supply pane groups, renderers,
//! and measurement through the capability traits in [`layout::view`] and
//! [`layout::drag`].

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod layout;

// =============================================================================
// Convenience re-exports
//
// Flat re-exports for property tests and host crates that want the engine's
// surface without the module path.
// =============================================================================

pub use layout::{
    Axis, DragController, DragState, FixedMeasurement, GroupId, GroupLeaf, LayoutCell,
    LayoutRegion, MeasurementProvider, NodeId, NoopHooks, PaneEvent, PaneGroup, PaneKind,
    PaneRenderer, PaneTab, SplitDirection, SplitNode, TabId, TreeInvariantError, Workspace,
    WorkspaceHooks, WorkspaceNode, build_view, close, dispatch_pane_event, resize, split,
};
pub use layout::{FULL_PERCENT, MIN_PANE_PERCENT, SIZE_TOLERANCE};
