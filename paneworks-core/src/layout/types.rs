//! Core type definitions for the workspace split-layout engine
//!
//! This module contains the fundamental identifier types and enums used
//! throughout the layout system.

use std::fmt;
use uuid::Uuid;

use super::drag::Axis;

/// Unique identifier for a node in the workspace tree.
///
/// Both Group leaves and Split containers carry a `NodeId` that persists
/// throughout the node's lifetime, even as the tree structure around it
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Creates a new random node ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Foreign reference to an externally-owned pane group.
///
/// A pane group holds a tab strip and the active pane content for one leaf
/// region of the workspace. The engine never owns pane groups; it only
/// stores their identifiers in Group leaves and hands them back to the host
/// through the render glue and callback surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub Uuid);

impl GroupId {
    /// Creates a new random group ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a group ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group({})", self.0)
    }
}

/// Unique identifier for a tab inside a pane group.
///
/// Tabs are owned by the host's pane-group store. The engine only routes
/// tab identifiers between the render glue and the host callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(pub Uuid);

impl TabId {
    /// Creates a new random tab ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tab({})", self.0)
    }
}

/// Split direction for dividing a region among children.
///
/// A horizontal split stacks its children top to bottom (each spans the full
/// width); a vertical split arranges them side by side (each spans the full
/// height).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDirection {
    /// Children stacked top to bottom.
    Horizontal,
    /// Children arranged left to right.
    Vertical,
}

impl SplitDirection {
    /// Returns the axis along which a drag handle moves for this direction.
    ///
    /// Resizing a horizontal split moves handles up and down, so the
    /// container's pixel *height* is measured; a vertical split's handles
    /// move left and right, so its *width* is measured.
    #[must_use]
    pub const fn cross_axis(self) -> Axis {
        match self {
            Self::Horizontal => Axis::Vertical,
            Self::Vertical => Axis::Horizontal,
        }
    }
}

impl fmt::Display for SplitDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "Horizontal"),
            Self::Vertical => write!(f, "Vertical"),
        }
    }
}
