//! Property-based tests for the workspace split-layout engine
//!
//! These tests exercise the copy-on-write mutation operations and the drag
//! controller over randomized operation sequences, checking that the tree
//! invariants (size sums, minimum shares, no degenerate splits, unique ids)
//! hold after every mutation.

use proptest::prelude::*;
use paneworks_core::layout::{
    DragController, DragState, FixedMeasurement, FULL_PERCENT, GroupId, MIN_PANE_PERCENT,
    NoopHooks, SIZE_TOLERANCE, SplitDirection, WorkspaceNode, ops,
};

// ============================================================================
// Test Strategies
// ============================================================================

/// Strategy for generating split directions
fn split_direction_strategy() -> impl Strategy<Value = SplitDirection> {
    prop_oneof![
        Just(SplitDirection::Horizontal),
        Just(SplitDirection::Vertical),
    ]
}

/// An operation that can be performed on a workspace tree
#[derive(Debug, Clone)]
enum LayoutOperation {
    /// Split the pane group at the given index (modulo group count)
    Split {
        group_index: usize,
        direction: SplitDirection,
    },
    /// Close the pane group at the given index (modulo group count)
    Close { group_index: usize },
    /// Resize a split (chosen by walking to the first split) with raw sizes
    Resize { raw_sizes: Vec<f64> },
}

/// Strategy for generating layout operations
fn layout_operation_strategy() -> impl Strategy<Value = LayoutOperation> {
    prop_oneof![
        (0usize..10, split_direction_strategy()).prop_map(|(group_index, direction)| {
            LayoutOperation::Split {
                group_index,
                direction,
            }
        }),
        (0usize..10).prop_map(|group_index| LayoutOperation::Close { group_index }),
        proptest::collection::vec(0.0f64..200.0, 2..=4)
            .prop_map(|raw_sizes| LayoutOperation::Resize { raw_sizes }),
    ]
}

/// Strategy for generating a sequence of layout operations
fn layout_operations_strategy(max_ops: usize) -> impl Strategy<Value = Vec<LayoutOperation>> {
    proptest::collection::vec(layout_operation_strategy(), 0..=max_ops)
}

/// Apply an operation to a tree, returning the new tree
fn apply_operation(tree: &WorkspaceNode, op: &LayoutOperation) -> WorkspaceNode {
    match op {
        LayoutOperation::Split {
            group_index,
            direction,
        } => {
            let groups = tree.group_ids();
            let target = groups[group_index % groups.len()];
            ops::split(tree, target, *direction, GroupId::new())
        }
        LayoutOperation::Close { group_index } => {
            let groups = tree.group_ids();
            let target = groups[group_index % groups.len()];
            ops::close(tree, target)
        }
        LayoutOperation::Resize { raw_sizes } => match tree.as_split() {
            Some(split) if split.sizes.len() == raw_sizes.len() => {
                ops::resize(tree, split.id, raw_sizes)
            }
            _ => tree.clone(),
        },
    }
}

// ============================================================================
// Property 1: Invariant Preservation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any sequence of split/close/resize operations leaves a tree where
    /// every split's sizes sum to 100 within tolerance, every share is at
    /// least the minimum, and no split has fewer than 2 children.
    #[test]
    fn prop_operations_preserve_invariants(
        ops_seq in layout_operations_strategy(12),
    ) {
        let mut tree = WorkspaceNode::group(GroupId::new());

        for op in &ops_seq {
            tree = apply_operation(&tree, op);
            prop_assert!(
                tree.validate().is_ok(),
                "Tree should stay valid after {:?}: {:?}",
                op,
                tree.validate()
            );
        }
    }

    /// A tree always keeps at least one pane group, no matter how many
    /// close operations are applied.
    #[test]
    fn prop_workspace_never_becomes_empty(
        split_count in 0usize..6,
        close_count in 0usize..12,
    ) {
        let mut tree = WorkspaceNode::group(GroupId::new());

        for _ in 0..split_count {
            let target = tree.group_ids()[0];
            tree = ops::split(&tree, target, SplitDirection::Vertical, GroupId::new());
        }
        for _ in 0..close_count {
            let target = tree.group_ids()[0];
            tree = ops::close(&tree, target);
        }

        prop_assert!(tree.group_count() >= 1);
        prop_assert!(tree.validate().is_ok());
    }

    /// Split adds exactly one pane group and never removes any.
    #[test]
    fn prop_split_adds_exactly_one_group(
        ops_seq in layout_operations_strategy(6),
        direction in split_direction_strategy(),
        group_index in 0usize..10,
    ) {
        let mut tree = WorkspaceNode::group(GroupId::new());
        for op in &ops_seq {
            tree = apply_operation(&tree, op);
        }

        let groups_before = tree.group_ids();
        let target = groups_before[group_index % groups_before.len()];
        let new_group = GroupId::new();

        let after = ops::split(&tree, target, direction, new_group);

        prop_assert_eq!(after.group_count(), tree.group_count() + 1);
        for g in &groups_before {
            prop_assert!(after.contains_group(*g), "existing group {} should survive", g);
        }
        prop_assert!(after.contains_group(new_group));
    }

    /// Close removes exactly one pane group (when more than one exists).
    #[test]
    fn prop_close_removes_exactly_one_group(
        split_count in 1usize..6,
        group_index in 0usize..10,
    ) {
        let mut tree = WorkspaceNode::group(GroupId::new());
        for _ in 0..split_count {
            let groups = tree.group_ids();
            let target = groups[group_index % groups.len()];
            tree = ops::split(&tree, target, SplitDirection::Horizontal, GroupId::new());
        }

        let groups = tree.group_ids();
        let target = groups[group_index % groups.len()];

        let after = ops::close(&tree, target);

        prop_assert_eq!(after.group_count(), tree.group_count() - 1);
        prop_assert!(!after.contains_group(target));
    }
}

// ============================================================================
// Property 2: Resize Semantics
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Resizing a split with its current sizes yields an equal tree.
    #[test]
    fn prop_resize_with_current_sizes_is_identity(
        ops_seq in layout_operations_strategy(8),
    ) {
        let mut tree = WorkspaceNode::group(GroupId::new());
        for op in &ops_seq {
            tree = apply_operation(&tree, op);
        }

        if let Some(split) = tree.as_split() {
            let current = split.sizes.clone();
            let result = ops::resize(&tree, split.id, &current);
            prop_assert_eq!(result, tree);
        }
    }

    /// Resize output always sums to 100 and respects minimum shares,
    /// whatever raw values come in.
    #[test]
    fn prop_resize_normalizes_arbitrary_input(
        raw_sizes in proptest::collection::vec(0.0f64..500.0, 2..=5),
    ) {
        let children: Vec<WorkspaceNode> = (0..raw_sizes.len())
            .map(|_| WorkspaceNode::group(GroupId::new()))
            .collect();
        let tree = WorkspaceNode::split(SplitDirection::Vertical, children);
        let split_id = tree.id();

        let result = ops::resize(&tree, split_id, &raw_sizes);

        let sizes = result.sizes_of(split_id).expect("split survives resize");
        let sum: f64 = sizes.iter().sum();
        prop_assert!((sum - FULL_PERCENT).abs() <= SIZE_TOLERANCE);
        for &s in sizes {
            prop_assert!(s >= MIN_PANE_PERCENT - SIZE_TOLERANCE);
        }
    }

    /// Resize never changes structure: same children, same ids, same
    /// directions.
    #[test]
    fn prop_resize_only_changes_sizes(
        a in 10.0f64..90.0,
    ) {
        let g1 = GroupId::new();
        let tree = ops::split(
            &WorkspaceNode::group(g1),
            g1,
            SplitDirection::Vertical,
            GroupId::new(),
        );
        let split_id = tree.id();

        let result = ops::resize(&tree, split_id, &[a, FULL_PERCENT - a]);

        prop_assert_eq!(result.id(), tree.id());
        prop_assert_eq!(result.group_ids(), tree.group_ids());
        prop_assert_eq!(
            result.as_split().unwrap().direction,
            tree.as_split().unwrap().direction
        );
    }
}

// ============================================================================
// Property 3: Split/Close Round-Trip
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Splitting a group and immediately closing the new sibling restores
    /// the original tree exactly.
    #[test]
    fn prop_split_close_round_trip(
        ops_seq in layout_operations_strategy(8),
        direction in split_direction_strategy(),
        group_index in 0usize..10,
    ) {
        let mut tree = WorkspaceNode::group(GroupId::new());
        for op in &ops_seq {
            tree = apply_operation(&tree, op);
        }

        let groups = tree.group_ids();
        let target = groups[group_index % groups.len()];
        let new_group = GroupId::new();

        let round_trip = ops::close(&ops::split(&tree, target, direction, new_group), new_group);

        prop_assert_eq!(round_trip, tree);
    }

    /// Unknown ids are no-ops for every operation.
    #[test]
    fn prop_unknown_ids_are_noops(
        ops_seq in layout_operations_strategy(8),
        direction in split_direction_strategy(),
    ) {
        let mut tree = WorkspaceNode::group(GroupId::new());
        for op in &ops_seq {
            tree = apply_operation(&tree, op);
        }

        let stranger = GroupId::new();
        prop_assert_eq!(ops::split(&tree, stranger, direction, GroupId::new()), tree.clone());
        prop_assert_eq!(ops::close(&tree, stranger), tree.clone());
        prop_assert_eq!(
            ops::resize(&tree, paneworks_core::NodeId::new(), &[50.0, 50.0]),
            tree
        );
    }
}

// ============================================================================
// Property 4: Drag Controller
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// With a zero cached container measurement, any number of moves
    /// leaves the tree unchanged.
    #[test]
    fn prop_zero_container_drag_is_inert(
        deltas in proptest::collection::vec(-500.0f64..500.0, 0..20),
    ) {
        let g1 = GroupId::new();
        let tree = ops::split(
            &WorkspaceNode::group(g1),
            g1,
            SplitDirection::Horizontal,
            GroupId::new(),
        );
        let controller = DragController::new(FixedMeasurement(0.0));
        let state = controller.begin(&tree, tree.id());
        prop_assert!(state.is_dragging());

        let mut current = tree.clone();
        for delta in deltas {
            current = controller.drag(&state, &current, 0, delta, &mut NoopHooks);
        }

        prop_assert_eq!(current, tree);
    }

    /// Every drag move commits a valid tree whose adjacent pair keeps its
    /// combined share.
    #[test]
    fn prop_drag_moves_preserve_invariants(
        container_px in 100.0f64..4000.0,
        deltas in proptest::collection::vec(-2000.0f64..2000.0, 1..15),
    ) {
        let g1 = GroupId::new();
        let tree = ops::split(
            &WorkspaceNode::group(g1),
            g1,
            SplitDirection::Vertical,
            GroupId::new(),
        );
        let split_id = tree.id();
        let controller = DragController::new(FixedMeasurement(container_px));
        let state = controller.begin(&tree, split_id);

        let mut current = tree;
        for delta in deltas {
            current = controller.drag(&state, &current, 0, delta, &mut NoopHooks);
            prop_assert!(current.validate().is_ok(), "{:?}", current.validate());

            let sizes = current.sizes_of(split_id).expect("split survives drags");
            for &s in sizes {
                prop_assert!(s >= MIN_PANE_PERCENT - SIZE_TOLERANCE);
            }
        }
    }

    /// A drag followed by the opposite drag returns to the starting sizes,
    /// provided no clamping occurred.
    #[test]
    fn prop_small_drag_is_reversible(
        container_px in 500.0f64..4000.0,
        delta in -50.0f64..50.0,
    ) {
        let g1 = GroupId::new();
        let tree = ops::split(
            &WorkspaceNode::group(g1),
            g1,
            SplitDirection::Vertical,
            GroupId::new(),
        );
        let split_id = tree.id();
        let controller = DragController::new(FixedMeasurement(container_px));
        let state = controller.begin(&tree, split_id);

        let there = controller.drag(&state, &tree, 0, delta, &mut NoopHooks);
        let back = controller.drag(&state, &there, 0, -delta, &mut NoopHooks);

        let sizes = back.sizes_of(split_id).unwrap();
        prop_assert!((sizes[0] - 50.0).abs() < 1e-9);
        prop_assert!((sizes[1] - 50.0).abs() < 1e-9);
    }

    /// Ending a session always returns to idle regardless of prior state.
    #[test]
    fn prop_end_always_idles(
        container_px in 0.0f64..2000.0,
    ) {
        let g1 = GroupId::new();
        let tree = ops::split(
            &WorkspaceNode::group(g1),
            g1,
            SplitDirection::Horizontal,
            GroupId::new(),
        );
        let controller = DragController::new(FixedMeasurement(container_px));

        let state = controller.begin(&tree, tree.id());
        prop_assert_eq!(controller.end(state), DragState::Idle);
        prop_assert_eq!(controller.end(DragState::Idle), DragState::Idle);
    }
}
