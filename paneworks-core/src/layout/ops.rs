//! Copy-on-write mutation operations for the workspace tree
//!
//! Every operation here is a pure, total function from `(tree, args)` to a
//! new tree; the input tree is never modified or aliased. Operating on an
//! unknown identifier is defined behavior, not a fault: the tree comes back
//! unchanged. Stale ids are an expected consequence of concurrent UI actions
//! (a pane closing while a resize is mid-flight) and must never crash the
//! layout, so there is no error path, only the no-op policy.

use tracing::debug;

use super::tree::{
    FULL_PERCENT, GroupLeaf, MIN_PANE_PERCENT, SIZE_TOLERANCE, SplitNode, WorkspaceNode,
};
use super::types::{GroupId, NodeId, SplitDirection};

/// Replaces the Group leaf referencing `target_group` with a new Split.
///
/// The new Split has the given `direction` and exactly two children: the
/// original leaf (unchanged, keeping its node identity) followed by a fresh
/// leaf referencing `new_group`. Both children start at 50 percent.
///
/// `new_group` must not already be referenced anywhere in the tree; reusing
/// a live group id is a programmer error. An unknown `target_group` is a
/// no-op and returns the tree unchanged.
#[must_use]
pub fn split(
    tree: &WorkspaceNode,
    target_group: GroupId,
    direction: SplitDirection,
    new_group: GroupId,
) -> WorkspaceNode {
    debug_assert!(
        !tree.contains_group(new_group),
        "split: new group id {new_group} already present in the tree"
    );
    if !tree.contains_group(target_group) {
        debug!(%target_group, "split target not found; layout unchanged");
        return tree.clone();
    }
    split_in(tree, target_group, direction, new_group)
}

fn split_in(
    node: &WorkspaceNode,
    target_group: GroupId,
    direction: SplitDirection,
    new_group: GroupId,
) -> WorkspaceNode {
    match node {
        WorkspaceNode::Group(leaf) if leaf.pane_group == target_group => {
            WorkspaceNode::Split(SplitNode::with_sizes(
                direction,
                vec![
                    WorkspaceNode::Group(*leaf),
                    WorkspaceNode::Group(GroupLeaf::new(new_group)),
                ],
                vec![FULL_PERCENT / 2.0, FULL_PERCENT / 2.0],
            ))
        }
        WorkspaceNode::Group(leaf) => WorkspaceNode::Group(*leaf),
        WorkspaceNode::Split(split) => WorkspaceNode::Split(SplitNode {
            id: split.id,
            direction: split.direction,
            children: split
                .children
                .iter()
                .map(|child| split_in(child, target_group, direction, new_group))
                .collect(),
            sizes: split.sizes.clone(),
        }),
    }
}

/// Outcome of the recursive close search.
enum CloseOutcome {
    /// The target group is not in this subtree.
    NotFound,
    /// The subtree was rebuilt without the target; the parent should use
    /// this node in its place.
    Replaced(WorkspaceNode),
}

/// Removes the Group leaf referencing `target_group` from the tree.
///
/// The leaf is removed from its parent Split and the surviving siblings'
/// sizes are proportionally rescaled to sum to 100 again. A Split left with
/// exactly one child is replaced by that child in its own parent, so no
/// degenerate Split ever exists, even transiently.
///
/// Closing the sole root Group is a no-op; the workspace can never become
/// empty through this call. An unknown id is also a no-op.
#[must_use]
pub fn close(tree: &WorkspaceNode, target_group: GroupId) -> WorkspaceNode {
    if let WorkspaceNode::Group(leaf) = tree {
        if leaf.pane_group == target_group {
            debug!(%target_group, "refusing to close the last pane group");
        }
        return tree.clone();
    }
    match close_in(tree, target_group) {
        CloseOutcome::Replaced(node) => node,
        CloseOutcome::NotFound => {
            debug!(%target_group, "close target not found; layout unchanged");
            tree.clone()
        }
    }
}

fn close_in(node: &WorkspaceNode, target_group: GroupId) -> CloseOutcome {
    let WorkspaceNode::Split(split) = node else {
        return CloseOutcome::NotFound;
    };

    // Direct child: remove it and renormalize the survivors.
    let direct = split.children.iter().position(
        |child| matches!(child, WorkspaceNode::Group(leaf) if leaf.pane_group == target_group),
    );
    if let Some(removed) = direct {
        let mut children: Vec<WorkspaceNode> = Vec::with_capacity(split.children.len() - 1);
        let mut sizes: Vec<f64> = Vec::with_capacity(split.sizes.len() - 1);
        for (i, child) in split.children.iter().enumerate() {
            if i != removed {
                children.push(child.clone());
                sizes.push(split.sizes[i]);
            }
        }
        if children.len() == 1 {
            // Structural collapse: the split is replaced by its remaining
            // child in the parent.
            return CloseOutcome::Replaced(children.remove(0));
        }
        rescale_to_full(&mut sizes);
        return CloseOutcome::Replaced(WorkspaceNode::Split(SplitNode {
            id: split.id,
            direction: split.direction,
            children,
            sizes,
        }));
    }

    // Otherwise search the subtrees; at most one child changes.
    for (i, child) in split.children.iter().enumerate() {
        if let CloseOutcome::Replaced(rebuilt) = close_in(child, target_group) {
            let mut children = split.children.clone();
            children[i] = rebuilt;
            return CloseOutcome::Replaced(WorkspaceNode::Split(SplitNode {
                id: split.id,
                direction: split.direction,
                children,
                sizes: split.sizes.clone(),
            }));
        }
    }
    CloseOutcome::NotFound
}

/// Replaces the sizes of the Split with id `split_id`.
///
/// `requested` must be parallel to the split's children (a mismatched length
/// is a contract violation, not a recoverable condition). Each value is
/// clamped to at least [`MIN_PANE_PERCENT`] first; the excess above the
/// minimums is then rescaled so the sum is exactly [`FULL_PERCENT`] without
/// any share dropping back below the minimum. Clamping first prevents a
/// child from vanishing under extreme drag deltas; the surplus rescale
/// restores the 100 percent invariant that clamping may have perturbed.
///
/// An unknown `split_id` is a no-op.
#[must_use]
pub fn resize(tree: &WorkspaceNode, split_id: NodeId, requested: &[f64]) -> WorkspaceNode {
    match resize_in(tree, split_id, requested) {
        Some(node) => node,
        None => {
            debug!(%split_id, "resize target not found; layout unchanged");
            tree.clone()
        }
    }
}

fn resize_in(node: &WorkspaceNode, split_id: NodeId, requested: &[f64]) -> Option<WorkspaceNode> {
    let WorkspaceNode::Split(split) = node else {
        return None;
    };
    if split.id == split_id {
        debug_assert_eq!(
            requested.len(),
            split.children.len(),
            "resize: requested sizes must be parallel to children"
        );
        if requested.len() != split.children.len() {
            return Some(node.clone());
        }
        let mut sizes = requested.to_vec();
        clamp_to_minimum(&mut sizes);
        rescale_surplus_to_full(&mut sizes);
        return Some(WorkspaceNode::Split(SplitNode {
            id: split.id,
            direction: split.direction,
            children: split.children.clone(),
            sizes,
        }));
    }
    for (i, child) in split.children.iter().enumerate() {
        if let Some(rebuilt) = resize_in(child, split_id, requested) {
            let mut children = split.children.clone();
            children[i] = rebuilt;
            return Some(WorkspaceNode::Split(SplitNode {
                id: split.id,
                direction: split.direction,
                children,
                sizes: split.sizes.clone(),
            }));
        }
    }
    None
}

/// Raises every entry to at least [`MIN_PANE_PERCENT`].
pub fn clamp_to_minimum(sizes: &mut [f64]) {
    for size in sizes {
        if *size < MIN_PANE_PERCENT {
            *size = MIN_PANE_PERCENT;
        }
    }
}

/// Proportionally rescales `sizes` so the sum is exactly [`FULL_PERCENT`].
///
/// A sum already within [`SIZE_TOLERANCE`] is left untouched. Used for
/// close survivors, whose shares only grow here, so a share at the minimum
/// never shrinks below it.
pub fn rescale_to_full(sizes: &mut [f64]) {
    let sum: f64 = sizes.iter().sum();
    if (sum - FULL_PERCENT).abs() <= SIZE_TOLERANCE || sum <= 0.0 {
        return;
    }
    let scale = FULL_PERCENT / sum;
    for size in sizes {
        *size *= scale;
    }
}

/// Rescales `sizes` so the sum is exactly [`FULL_PERCENT`] without pushing
/// any entry below [`MIN_PANE_PERCENT`].
///
/// Every entry keeps its minimum share; only the excess above the minimum
/// is scaled. A whole-array scale after clamping could drag a just-clamped
/// entry back below the minimum, so the minimum portion is held fixed
/// instead. Entries must already be at least the minimum (resize clamps
/// first). A sum already within [`SIZE_TOLERANCE`] is left untouched, which
/// makes a resize with the current sizes an exact identity. When there is
/// no excess to scale, the shares fall back to equal splits.
pub fn rescale_surplus_to_full(sizes: &mut [f64]) {
    let sum: f64 = sizes.iter().sum();
    if (sum - FULL_PERCENT).abs() <= SIZE_TOLERANCE {
        return;
    }
    let n = sizes.len() as f64;
    let surplus = FULL_PERCENT - MIN_PANE_PERCENT * n;
    let excess = sum - MIN_PANE_PERCENT * n;
    if surplus <= 0.0 || excess <= 0.0 {
        for size in sizes.iter_mut() {
            *size = FULL_PERCENT / n;
        }
        return;
    }
    let scale = surplus / excess;
    for size in sizes.iter_mut() {
        *size = MIN_PANE_PERCENT + (*size - MIN_PANE_PERCENT) * scale;
    }
}
