//! Workspace state combining the layout tree with focus tracking
//!
//! [`Workspace`] is the engine's stateful façade: it owns the current tree
//! value and the identity of the focused pane group, and routes mutations
//! through the copy-on-write operations so the stored tree is always
//! replaced wholesale, never edited in place.

use tracing::{debug, info};

use super::ops;
use super::tree::WorkspaceNode;
use super::types::{GroupId, NodeId, SplitDirection};

/// The layout state of one workspace window.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    root: WorkspaceNode,
    focused_group: GroupId,
}

impl Workspace {
    /// Creates a workspace showing a single pane group, which gets focus.
    #[must_use]
    pub fn new(initial_group: GroupId) -> Self {
        info!(%initial_group, "workspace created");
        Self {
            root: WorkspaceNode::group(initial_group),
            focused_group: initial_group,
        }
    }

    /// Returns the current layout tree.
    #[must_use]
    pub const fn root(&self) -> &WorkspaceNode {
        &self.root
    }

    /// Returns the focused pane group.
    #[must_use]
    pub const fn focused_group(&self) -> GroupId {
        self.focused_group
    }

    /// Returns true if the workspace shows a single unsplit pane group.
    #[must_use]
    pub const fn is_single_pane(&self) -> bool {
        self.root.is_group()
    }

    /// Returns the number of pane groups in the workspace.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.root.group_count()
    }

    /// Returns all pane groups in visual order.
    #[must_use]
    pub fn group_ids(&self) -> Vec<GroupId> {
        self.root.group_ids()
    }

    /// Returns true if the workspace contains the given pane group.
    #[must_use]
    pub fn contains_group(&self, group: GroupId) -> bool {
        self.root.contains_group(group)
    }

    /// Moves focus to the given pane group.
    ///
    /// A group not present in the tree is ignored; the layout is never
    /// affected by focus changes.
    pub fn focus_group(&mut self, group: GroupId) {
        if !self.root.contains_group(group) {
            debug!(%group, "focus target not in workspace; ignored");
            return;
        }
        self.focused_group = group;
    }

    /// Splits the pane group `target` in the given direction.
    ///
    /// The new sibling group `new_group` takes the second half of the
    /// region and receives focus. An unknown `target` leaves the workspace
    /// unchanged.
    pub fn split_group(&mut self, target: GroupId, direction: SplitDirection, new_group: GroupId) {
        let next = ops::split(&self.root, target, direction, new_group);
        if next.contains_group(new_group) {
            info!(%target, %direction, %new_group, "pane group split");
            self.focused_group = new_group;
        }
        self.root = next;
    }

    /// Closes the pane group `target` and collapses the layout around it.
    ///
    /// If the focused group was removed, focus moves to the first remaining
    /// group in visual order. Closing the sole remaining group, or an
    /// unknown one, is a no-op.
    pub fn close_group(&mut self, target: GroupId) {
        if !self.root.contains_group(target) {
            debug!(%target, "close target not in workspace; ignored");
            return;
        }
        let next = ops::close(&self.root, target);
        if next.contains_group(target) {
            // Sole remaining group; refused by the close operation.
            return;
        }
        info!(%target, "pane group closed");
        self.root = next;
        if !self.root.contains_group(self.focused_group) {
            self.focused_group = self.root.first_group().pane_group;
        }
    }

    /// Applies new sizes to the split with id `split_id`.
    ///
    /// The sizes are clamped and renormalized as described in
    /// [`ops::resize`]. Focus is unaffected.
    pub fn resize_split(&mut self, split_id: NodeId, sizes: &[f64]) {
        self.root = ops::resize(&self.root, split_id, sizes);
    }
}
