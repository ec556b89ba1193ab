//! Pointer-drag controller for interactive split resizing
//!
//! A drag session spans one pointer-down on a split's drag handle to the
//! following pointer-up. The controller measures the container's cross-axis
//! extent exactly once at session start and caches it for the whole session
//! (layout measurement is relatively expensive and the extent does not
//! change during a single drag), then converts each raw pixel delta into a
//! percentage delta and commits a fully renormalized tree through
//! [`ops::resize`] on every move.
//!
//! Session state is an explicit tagged value ([`DragState`]) passed through
//! the API rather than held in ambient references, so session transitions
//! are directly testable. Measurement itself is an injected capability
//! ([`MeasurementProvider`]) so the controller runs without any UI runtime.

use std::fmt;

use tracing::{debug, trace};

use super::ops;
use super::tree::{FULL_PERCENT, MIN_PANE_PERCENT, WorkspaceNode};
use super::types::NodeId;
use super::view::WorkspaceHooks;

/// Screen axis along which a pixel extent is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left-to-right extent (width).
    Horizontal,
    /// Top-to-bottom extent (height).
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "Horizontal"),
            Self::Vertical => write!(f, "Vertical"),
        }
    }
}

/// Capability for measuring a live container's pixel extent.
///
/// Implemented by the host against its rendering environment; the engine
/// never performs layout queries itself. The container is identified by the
/// node id of the split being resized.
pub trait MeasurementProvider {
    /// Returns the container's current pixel extent along `axis`.
    fn measure(&self, container: NodeId, axis: Axis) -> f64;
}

/// A provider that reports the same extent for every container.
///
/// Intended for tests and headless use.
#[derive(Debug, Clone, Copy)]
pub struct FixedMeasurement(pub f64);

impl MeasurementProvider for FixedMeasurement {
    fn measure(&self, _container: NodeId, _axis: Axis) -> f64 {
        self.0
    }
}

/// State of one interactive resize session.
///
/// At most one session exists at a time: pointer capture on a single handle
/// is exclusive, and the host owns exactly one `DragState` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    Idle,
    /// A handle of the given split is being dragged.
    Dragging {
        /// The split whose sizes are being adjusted.
        split_id: NodeId,
        /// Cross-axis extent measured once at pointer-down. A zero (or
        /// negative) extent makes every move a no-op.
        container_px: f64,
    },
}

impl DragState {
    /// Returns true if a drag session is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Converts pointer deltas on a drag handle into resize operations.
///
/// The controller is stateless between calls; per-session state travels in
/// the [`DragState`] values it returns.
#[derive(Debug)]
pub struct DragController<M> {
    provider: M,
}

impl<M: MeasurementProvider> DragController<M> {
    /// Creates a controller using the given measurement capability.
    #[must_use]
    pub const fn new(provider: M) -> Self {
        Self { provider }
    }

    /// Starts a drag session on a handle of the given split.
    ///
    /// Measures the container's cross-axis extent exactly once (height for
    /// horizontal splits, width for vertical ones) and caches it in the
    /// returned state. An unknown split id yields [`DragState::Idle`]. A
    /// zero measurement still enters the session; subsequent moves are then
    /// no-ops.
    #[must_use]
    pub fn begin(&self, tree: &WorkspaceNode, split_id: NodeId) -> DragState {
        let Some(split) = tree.find_split(split_id) else {
            debug!(%split_id, "drag start on unknown split; staying idle");
            return DragState::Idle;
        };
        let axis = split.direction.cross_axis();
        let container_px = self.provider.measure(split_id, axis);
        trace!(%split_id, %axis, container_px, "drag session started");
        DragState::Dragging {
            split_id,
            container_px,
        }
    }

    /// Applies one pointer-move to the tree and returns the new tree.
    ///
    /// `delta_px` is the raw pixel delta along the cross axis since the last
    /// move. The two children adjacent to the dragged handle (indices
    /// `handle_index` and `handle_index + 1`) gain and lose the converted
    /// percentage delta. The delta is bounded so neither neighbor drops
    /// below [`MIN_PANE_PERCENT`], which keeps the pair's sum intact and
    /// leaves the other children's shares untouched; the full array then
    /// goes through [`ops::resize`] for global renormalization, so every
    /// move commits a normalized tree immediately.
    ///
    /// No-ops (returning the tree unchanged): an idle state, a zero cached
    /// extent, an unknown split id. After a successful commit the hook
    /// `on_resize_split` fires with the normalized sizes.
    #[must_use]
    pub fn drag(
        &self,
        state: &DragState,
        tree: &WorkspaceNode,
        handle_index: usize,
        delta_px: f64,
        hooks: &mut impl WorkspaceHooks,
    ) -> WorkspaceNode {
        let DragState::Dragging {
            split_id,
            container_px,
        } = *state
        else {
            trace!("drag move without active session; layout unchanged");
            return tree.clone();
        };
        if container_px <= 0.0 {
            trace!(%split_id, "zero-sized container; drag move ignored");
            return tree.clone();
        }
        let Some(split) = tree.find_split(split_id) else {
            debug!(%split_id, "dragged split no longer in tree; layout unchanged");
            return tree.clone();
        };
        debug_assert!(
            handle_index + 1 < split.sizes.len(),
            "drag: handle index {handle_index} out of bounds for {} children",
            split.sizes.len()
        );
        if handle_index + 1 >= split.sizes.len() {
            return tree.clone();
        }

        let delta_percent = delta_px / container_px * FULL_PERCENT;
        let mut sizes = split.sizes.clone();
        // Bound the delta so neither neighbor drops below the minimum
        // share. The pair's combined share is preserved, so only these two
        // children move.
        let max_gain = (sizes[handle_index + 1] - MIN_PANE_PERCENT).max(0.0);
        let max_loss = (sizes[handle_index] - MIN_PANE_PERCENT).max(0.0);
        let delta = delta_percent.min(max_gain).max(-max_loss);
        sizes[handle_index] += delta;
        sizes[handle_index + 1] -= delta;

        let next = ops::resize(tree, split_id, &sizes);
        if let Some(normalized) = next.sizes_of(split_id) {
            hooks.on_resize_split(split_id, normalized);
        }
        next
    }

    /// Ends the session, returning to [`DragState::Idle`].
    ///
    /// No additional mutation occurs; whatever sizes the last move committed
    /// remain in effect.
    #[must_use]
    pub fn end(&self, state: DragState) -> DragState {
        if state.is_dragging() {
            trace!("drag session ended");
        }
        DragState::Idle
    }
}
