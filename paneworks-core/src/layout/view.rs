//! Render glue and host callback surface
//!
//! The engine never draws anything itself. [`build_view`] walks the
//! workspace tree and produces a [`LayoutRegion`] description that mirrors
//! the tree's structure, with each leaf resolved against the host's
//! pane-group store and passed through an injected [`PaneRenderer`]. The
//! host turns the description into real widgets or cells.
//!
//! Interaction flows the other way through [`WorkspaceHooks`]: the host
//! wires its input events into [`PaneEvent`] values and the engine routes
//! them to the right callback. All hooks default to no-ops so hosts
//! implement only what they care about.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::types::{GroupId, NodeId, SplitDirection, TabId};
use super::tree::WorkspaceNode;

/// What a pane group currently displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneKind {
    /// An interactive terminal session.
    Terminal,
    /// A remote file browser.
    Sftp,
    /// A port-forwarding status view.
    Tunnel,
    /// Connection or application settings.
    Settings,
    /// A placeholder with no content yet.
    Empty,
}

/// One tab in a pane group's tab strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneTab {
    /// Identifier routed back to the host on selection or close.
    pub id: TabId,
    /// Title shown in the tab strip.
    pub title: String,
}

impl PaneTab {
    /// Creates a tab with a fresh id.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TabId::new(),
            title: title.into(),
        }
    }
}

/// Host-owned state for one leaf region of the workspace.
///
/// The engine stores only [`GroupId`] references in the tree; the group
/// data itself lives in the host's store and is looked up at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneGroup {
    /// Identifier referenced by Group leaves in the tree.
    pub id: GroupId,
    /// Content kind of the active pane.
    pub kind: PaneKind,
    /// Tabs in display order.
    pub tabs: Vec<PaneTab>,
    /// Currently selected tab, if any.
    pub active_tab: Option<TabId>,
}

impl PaneGroup {
    /// Creates an empty group with a fresh id.
    #[must_use]
    pub fn new(kind: PaneKind) -> Self {
        Self {
            id: GroupId::new(),
            kind,
            tabs: Vec::new(),
            active_tab: None,
        }
    }

    /// Returns the active tab's data, if one is selected and still present.
    #[must_use]
    pub fn active_tab(&self) -> Option<&PaneTab> {
        let active = self.active_tab?;
        self.tabs.iter().find(|tab| tab.id == active)
    }
}

/// Capability for turning pane groups into host-specific output.
///
/// The associated `Output` is whatever the host builds regions from (a
/// widget handle, a draw list, a plain string in tests).
pub trait PaneRenderer {
    /// Host-specific rendered value for one pane.
    type Output;

    /// Renders the content of a resolved pane group.
    fn render(&self, kind: PaneKind, group: &PaneGroup) -> Self::Output;

    /// Renders a placeholder for a Group leaf whose id has no entry in the
    /// host store. The layout slot is preserved so the tree and the view
    /// stay structurally aligned.
    fn render_missing(&self, group_id: GroupId) -> Self::Output;
}

/// One entry inside a rendered split container.
///
/// Children and drag handles interleave: a handle sits between every pair
/// of adjacent children, never before the first or after the last.
#[derive(Debug)]
pub enum LayoutCell<R> {
    /// A child region and the share of the container it occupies.
    Child {
        /// Percentage of the container along the split direction.
        size_percent: f64,
        /// The rendered child.
        region: LayoutRegion<R>,
    },
    /// A drag handle between children `index` and `index + 1`.
    Handle {
        /// Position of this handle among the container's handles.
        index: usize,
    },
}

/// Structural description of a rendered workspace region.
#[derive(Debug)]
pub enum LayoutRegion<R> {
    /// A leaf region showing one pane group.
    Pane {
        /// Group the leaf refers to.
        group_id: GroupId,
        /// Output produced by the renderer for this group.
        content: R,
    },
    /// A split container with interleaved children and handles.
    Container {
        /// Identifier of the split node, used to start drag sessions.
        split_id: NodeId,
        /// Direction children are laid out in.
        direction: SplitDirection,
        /// Children and handles in display order.
        cells: Vec<LayoutCell<R>>,
    },
}

/// Builds a render description for the whole workspace tree.
///
/// Group leaves are resolved against `groups`; a missing entry renders via
/// [`PaneRenderer::render_missing`] rather than dropping the slot, so a
/// transiently stale store never distorts the layout.
pub fn build_view<R: PaneRenderer>(
    node: &WorkspaceNode,
    groups: &HashMap<GroupId, PaneGroup>,
    renderer: &R,
) -> LayoutRegion<R::Output> {
    match node {
        WorkspaceNode::Group(leaf) => {
            let content = match groups.get(&leaf.pane_group) {
                Some(group) => renderer.render(group.kind, group),
                None => {
                    debug!(group_id = %leaf.pane_group, "pane group missing from store; rendering placeholder");
                    renderer.render_missing(leaf.pane_group)
                }
            };
            LayoutRegion::Pane {
                group_id: leaf.pane_group,
                content,
            }
        }
        WorkspaceNode::Split(split) => {
            let mut cells = Vec::with_capacity(split.children.len() * 2 - 1);
            for (index, (child, size)) in
                split.children.iter().zip(split.sizes.iter()).enumerate()
            {
                if index > 0 {
                    cells.push(LayoutCell::Handle { index: index - 1 });
                }
                cells.push(LayoutCell::Child {
                    size_percent: *size,
                    region: build_view(child, groups, renderer),
                });
            }
            trace!(split_id = %split.id, children = split.children.len(), "built split container");
            LayoutRegion::Container {
                split_id: split.id,
                direction: split.direction,
                cells,
            }
        }
    }
}

/// Callbacks the engine fires toward the host.
///
/// Every method has a no-op default body, so a host implements only the
/// notifications it consumes.
pub trait WorkspaceHooks {
    /// A split's sizes changed through a resize or drag commit.
    ///
    /// `sizes` is the normalized size array after the change.
    fn on_resize_split(&mut self, split_id: NodeId, sizes: &[f64]) {
        let _ = (split_id, sizes);
    }

    /// The user selected a tab inside a pane group.
    fn on_tab_select(&mut self, group_id: GroupId, tab_id: TabId) {
        let _ = (group_id, tab_id);
    }

    /// The user closed a tab.
    fn on_tab_close(&mut self, tab_id: TabId) {
        let _ = tab_id;
    }

    /// Input focus moved to a pane group.
    fn on_focus_group(&mut self, group_id: GroupId) {
        let _ = group_id;
    }

    /// The user asked to close a whole pane group.
    fn on_close_pane(&mut self, group_id: GroupId) {
        let _ = group_id;
    }
}

/// A hooks implementation that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl WorkspaceHooks for NoopHooks {}

/// An input event the host captured on a rendered pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneEvent {
    /// A tab in the group's strip was clicked.
    TabSelected(GroupId, TabId),
    /// A tab's close affordance was activated.
    TabClosed(TabId),
    /// The pane received input focus.
    FocusEntered(GroupId),
    /// The pane's close affordance was activated.
    CloseRequested(GroupId),
}

/// Routes a captured pane event to the matching hook.
pub fn dispatch_pane_event(event: PaneEvent, hooks: &mut impl WorkspaceHooks) {
    trace!(?event, "dispatching pane event");
    match event {
        PaneEvent::TabSelected(group_id, tab_id) => hooks.on_tab_select(group_id, tab_id),
        PaneEvent::TabClosed(tab_id) => hooks.on_tab_close(tab_id),
        PaneEvent::FocusEntered(group_id) => hooks.on_focus_group(group_id),
        PaneEvent::CloseRequested(group_id) => hooks.on_close_pane(group_id),
    }
}
