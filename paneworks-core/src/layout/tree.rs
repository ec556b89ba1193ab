//! Workspace tree structure for split layouts
//!
//! This module provides the recursive tree that represents how workspace
//! space is partitioned into pane groups. Each node is either a Group leaf
//! (referencing an externally-owned pane group) or a Split containing two or
//! more children arranged along one axis.
//!
//! # Tree Structure
//!
//! ```text
//! Split(Vertical, sizes: [50, 50])
//! ├── Group(g1)
//! └── Split(Horizontal, sizes: [40, 60])
//!     ├── Group(g2)
//!     └── Group(g3)
//! ```
//!
//! The tree supports arbitrary nesting depth. Mutations never edit a tree in
//! place; see [`crate::layout::ops`] for the copy-on-write mutation API.

use thiserror::Error;

use super::types::{GroupId, NodeId, SplitDirection};

/// Minimum share of a split any child may occupy, in percent.
pub const MIN_PANE_PERCENT: f64 = 10.0;

/// The total share a split distributes among its children, in percent.
pub const FULL_PERCENT: f64 = 100.0;

/// Numeric tolerance when comparing size sums against [`FULL_PERCENT`].
pub const SIZE_TOLERANCE: f64 = 1e-6;

/// A node in the workspace tree.
///
/// The tree is an N-ary strict tree where each node is either:
/// - A `Group` leaf referencing one externally-owned pane group
/// - A `Split` dividing its allotted space among two or more children
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceNode {
    /// A leaf region displaying one pane group.
    Group(GroupLeaf),
    /// An internal node dividing space among its children.
    Split(SplitNode),
}

/// A leaf of the workspace tree.
///
/// The leaf does not own any pane content; `pane_group` is a foreign
/// reference into the host's pane-group store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupLeaf {
    /// Unique identifier of this tree node.
    pub id: NodeId,
    /// The externally-owned pane group shown in this region.
    pub pane_group: GroupId,
}

/// An internal node dividing space among two or more children.
///
/// `sizes[i]` is the percentage of the split's extent allotted to
/// `children[i]`. The sizes always sum to [`FULL_PERCENT`] (within
/// [`SIZE_TOLERANCE`]) and each entry is at least [`MIN_PANE_PERCENT`].
#[derive(Debug, Clone, PartialEq)]
pub struct SplitNode {
    /// Unique identifier of this tree node.
    pub id: NodeId,
    /// Axis along which the children are arranged.
    pub direction: SplitDirection,
    /// Child regions, in visual order.
    pub children: Vec<WorkspaceNode>,
    /// Percentage of the split's extent per child, parallel to `children`.
    pub sizes: Vec<f64>,
}

/// Violation of a workspace-tree structural or numeric invariant.
///
/// Produced only by [`WorkspaceNode::validate`], which exists for tests;
/// production mutations are invariant-preserving by construction.
#[derive(Debug, Error)]
pub enum TreeInvariantError {
    /// A split's `children` and `sizes` arrays have different lengths.
    #[error("split {0} has {1} children but {2} sizes")]
    ChildCountMismatch(NodeId, usize, usize),

    /// A split has fewer than two children.
    #[error("split {0} has fewer than 2 children")]
    DegenerateSplit(NodeId),

    /// A split's sizes do not sum to 100 percent.
    #[error("split {0} sizes sum to {1}, expected {FULL_PERCENT}")]
    SizeSum(NodeId, f64),

    /// A child's size is below the minimum share.
    #[error("split {0} child {1} has size {2}, below minimum {MIN_PANE_PERCENT}")]
    BelowMinimum(NodeId, usize, f64),

    /// Two nodes share the same node ID.
    #[error("duplicate node id {0}")]
    DuplicateNodeId(NodeId),

    /// Two Group leaves reference the same pane group.
    #[error("duplicate pane group reference {0}")]
    DuplicateGroupId(GroupId),
}

impl GroupLeaf {
    /// Creates a new leaf referencing the given pane group.
    #[must_use]
    pub fn new(pane_group: GroupId) -> Self {
        Self {
            id: NodeId::new(),
            pane_group,
        }
    }

    /// Creates a leaf with explicit node and group identifiers.
    #[must_use]
    pub const fn with_ids(id: NodeId, pane_group: GroupId) -> Self {
        Self { id, pane_group }
    }
}

impl SplitNode {
    /// Creates a new split with equal shares for every child.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two children are supplied; a split with fewer
    /// than two children is invalid and must never be constructed.
    #[must_use]
    pub fn new(direction: SplitDirection, children: Vec<WorkspaceNode>) -> Self {
        assert!(
            children.len() >= 2,
            "a split requires at least 2 children, got {}",
            children.len()
        );
        let sizes = equal_sizes(children.len());
        Self {
            id: NodeId::new(),
            direction,
            children,
            sizes,
        }
    }

    /// Creates a new split with explicit per-child shares.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two children are supplied or if `sizes` is not
    /// parallel to `children`.
    #[must_use]
    pub fn with_sizes(
        direction: SplitDirection,
        children: Vec<WorkspaceNode>,
        sizes: Vec<f64>,
    ) -> Self {
        assert!(
            children.len() >= 2,
            "a split requires at least 2 children, got {}",
            children.len()
        );
        assert_eq!(
            children.len(),
            sizes.len(),
            "sizes must be parallel to children"
        );
        Self {
            id: NodeId::new(),
            direction,
            children,
            sizes,
        }
    }
}

/// Returns `n` equal shares summing to [`FULL_PERCENT`].
#[must_use]
pub fn equal_sizes(n: usize) -> Vec<f64> {
    vec![FULL_PERCENT / n as f64; n]
}

impl WorkspaceNode {
    /// Creates a new Group leaf node.
    #[must_use]
    pub fn group(pane_group: GroupId) -> Self {
        Self::Group(GroupLeaf::new(pane_group))
    }

    /// Creates a new Split node with equal shares.
    #[must_use]
    pub fn split(direction: SplitDirection, children: Vec<Self>) -> Self {
        Self::Split(SplitNode::new(direction, children))
    }

    /// Returns this node's identifier.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        match self {
            Self::Group(leaf) => leaf.id,
            Self::Split(split) => split.id,
        }
    }

    /// Returns true if this is a Group leaf.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// Returns true if this is a Split node.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        matches!(self, Self::Split(_))
    }

    /// Returns the Group leaf if this is a leaf node.
    #[must_use]
    pub const fn as_group(&self) -> Option<&GroupLeaf> {
        match self {
            Self::Group(leaf) => Some(leaf),
            Self::Split(_) => None,
        }
    }

    /// Returns the Split node if this is an internal node.
    #[must_use]
    pub const fn as_split(&self) -> Option<&SplitNode> {
        match self {
            Self::Group(_) => None,
            Self::Split(split) => Some(split),
        }
    }

    // ========================================================================
    // Tree Traversal
    // ========================================================================

    /// Finds the Group leaf referencing the given pane group.
    #[must_use]
    pub fn find_group(&self, pane_group: GroupId) -> Option<&GroupLeaf> {
        match self {
            Self::Group(leaf) => (leaf.pane_group == pane_group).then_some(leaf),
            Self::Split(split) => split
                .children
                .iter()
                .find_map(|child| child.find_group(pane_group)),
        }
    }

    /// Finds the Split node with the given node ID.
    #[must_use]
    pub fn find_split(&self, split_id: NodeId) -> Option<&SplitNode> {
        match self {
            Self::Group(_) => None,
            Self::Split(split) => {
                if split.id == split_id {
                    Some(split)
                } else {
                    split
                        .children
                        .iter()
                        .find_map(|child| child.find_split(split_id))
                }
            }
        }
    }

    /// Returns true if the tree contains a leaf referencing `pane_group`.
    #[must_use]
    pub fn contains_group(&self, pane_group: GroupId) -> bool {
        self.find_group(pane_group).is_some()
    }

    /// Returns all pane-group references in visual order
    /// (depth-first, left-to-right).
    #[must_use]
    pub fn group_ids(&self) -> Vec<GroupId> {
        let mut ids = Vec::new();
        self.collect_group_ids(&mut ids);
        ids
    }

    fn collect_group_ids(&self, ids: &mut Vec<GroupId>) {
        match self {
            Self::Group(leaf) => ids.push(leaf.pane_group),
            Self::Split(split) => {
                for child in &split.children {
                    child.collect_group_ids(ids);
                }
            }
        }
    }

    /// Returns the number of Group leaves in the tree.
    #[must_use]
    pub fn group_count(&self) -> usize {
        match self {
            Self::Group(_) => 1,
            Self::Split(split) => split.children.iter().map(Self::group_count).sum(),
        }
    }

    /// Returns the number of Split nodes in the tree.
    #[must_use]
    pub fn split_count(&self) -> usize {
        match self {
            Self::Group(_) => 0,
            Self::Split(split) => {
                1 + split.children.iter().map(Self::split_count).sum::<usize>()
            }
        }
    }

    /// Returns the depth of the tree.
    ///
    /// A single leaf has depth 0. Each level of splits adds 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Group(_) => 0,
            Self::Split(split) => {
                1 + split
                    .children
                    .iter()
                    .map(Self::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Returns the first Group leaf in visual order (leftmost/topmost).
    #[must_use]
    pub fn first_group(&self) -> &GroupLeaf {
        match self {
            Self::Group(leaf) => leaf,
            // A split always has children, so indexing is safe.
            Self::Split(split) => split.children[0].first_group(),
        }
    }

    /// Returns the current sizes of the Split with the given ID.
    #[must_use]
    pub fn sizes_of(&self, split_id: NodeId) -> Option<&[f64]> {
        self.find_split(split_id).map(|split| split.sizes.as_slice())
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Checks every structural and numeric invariant of the tree.
    ///
    /// Used by tests; production mutations are invariant-preserving by
    /// construction and never call this.
    ///
    /// # Errors
    ///
    /// Returns the first [`TreeInvariantError`] found in depth-first order.
    pub fn validate(&self) -> Result<(), TreeInvariantError> {
        let mut node_ids = std::collections::HashSet::new();
        let mut pane_groups = std::collections::HashSet::new();
        self.validate_node(&mut node_ids, &mut pane_groups)
    }

    /// Returns true if [`Self::validate`] reports no violation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn validate_node(
        &self,
        node_ids: &mut std::collections::HashSet<NodeId>,
        pane_groups: &mut std::collections::HashSet<GroupId>,
    ) -> Result<(), TreeInvariantError> {
        if !node_ids.insert(self.id()) {
            return Err(TreeInvariantError::DuplicateNodeId(self.id()));
        }
        match self {
            Self::Group(leaf) => {
                if !pane_groups.insert(leaf.pane_group) {
                    return Err(TreeInvariantError::DuplicateGroupId(leaf.pane_group));
                }
                Ok(())
            }
            Self::Split(split) => {
                if split.children.len() != split.sizes.len() {
                    return Err(TreeInvariantError::ChildCountMismatch(
                        split.id,
                        split.children.len(),
                        split.sizes.len(),
                    ));
                }
                if split.children.len() < 2 {
                    return Err(TreeInvariantError::DegenerateSplit(split.id));
                }
                let sum: f64 = split.sizes.iter().sum();
                if (sum - FULL_PERCENT).abs() > SIZE_TOLERANCE {
                    return Err(TreeInvariantError::SizeSum(split.id, sum));
                }
                for (i, &size) in split.sizes.iter().enumerate() {
                    if size < MIN_PANE_PERCENT {
                        return Err(TreeInvariantError::BelowMinimum(split.id, i, size));
                    }
                }
                for child in &split.children {
                    child.validate_node(node_ids, pane_groups)?;
                }
                Ok(())
            }
        }
    }
}
