//! Workspace split-layout engine
//!
//! This module implements the recursive split layout that divides a
//! workspace window into resizable pane regions:
//!
//! - [`types`] - identifier newtypes and the split direction enum
//! - [`tree`] - the immutable workspace tree and its invariants
//! - [`ops`] - copy-on-write split / close / resize operations
//! - [`drag`] - the pointer-drag resize session controller
//! - [`view`] - render glue and the host callback surface
//! - [`workspace`] - the stateful façade combining tree and focus
//!
//! The engine owns only layout: pane content, sessions, and tab state live
//! in the host application and are referenced by id.

pub mod drag;
pub mod ops;
pub mod tree;
pub mod types;
pub mod view;
pub mod workspace;

pub use drag::{Axis, DragController, DragState, FixedMeasurement, MeasurementProvider};
pub use ops::{clamp_to_minimum, close, rescale_surplus_to_full, rescale_to_full, resize, split};
pub use tree::{
    FULL_PERCENT, GroupLeaf, MIN_PANE_PERCENT, SIZE_TOLERANCE, SplitNode, TreeInvariantError,
    WorkspaceNode, equal_sizes,
};
pub use types::{GroupId, NodeId, SplitDirection, TabId};
pub use view::{
    LayoutCell, LayoutRegion, NoopHooks, PaneEvent, PaneGroup, PaneKind, PaneRenderer, PaneTab,
    WorkspaceHooks, build_view, dispatch_pane_event,
};
pub use workspace::Workspace;
