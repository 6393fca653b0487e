// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editing session: tree, selection, inline editor, and pending label.

use alloc::string::String;
use kurbo::Point;
use sapling_scene::{Highlight, HitPart, Scene, SceneStyle, project};
use sapling_tree::{Level, NodeId, Side, Tree};

use crate::config::EditorConfig;
use crate::error::EditError;
use crate::intent::{Changes, Intent, Response};
use crate::state::EditState;

/// Everything the rendering boundary needs to draw the editor.
#[derive(Clone, Copy, Debug)]
pub struct View<'a> {
    /// The diagram, or `None` while the canvas is still hidden.
    pub scene: Option<&'a Scene>,
    /// The selected node.
    pub selection: Option<NodeId>,
    /// The node being edited inline and its draft.
    pub editing: Option<(NodeId, &'a str)>,
    /// Whether the canvas and the branch controls are shown.
    pub canvas_visible: bool,
    /// Contents of the top-level "Enter label" field.
    pub pending_label: &'a str,
}

/// An editing session over one tree.
///
/// The session is the only owner of the tree; every mutation goes through
/// `&mut self`. After each call that changes the tree, the selection, or the
/// inline editor, the [`Scene`] is rebuilt from scratch.
///
/// ```
/// use sapling_editor::{Editor, Intent};
/// use sapling_tree::Side;
///
/// let mut editor = Editor::new();
/// let root = editor.tree().root();
///
/// editor.handle(Intent::SubmitLabelClicked);
/// editor.handle(Intent::NodeClicked(root));
/// let response = editor.handle(Intent::AddBranchClicked(Side::Left));
/// assert!(response.warning.is_none());
/// assert_eq!(editor.tree().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Editor {
    tree: Tree,
    state: EditState,
    pending: String,
    label_submitted: bool,
    style: SceneStyle,
    scene: Scene,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// A session with the default configuration: a root labeled "Root" at
    /// (300, 100).
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// A session with a custom configuration.
    pub fn with_config(config: EditorConfig) -> Self {
        let tree = Tree::with_rule(config.root_label.clone(), config.root_position, config.rule);
        let state = EditState::new();
        let scene = project(&tree, Highlight::default(), &config.style);
        Self {
            tree,
            state,
            pending: config.root_label,
            label_submitted: false,
            style: config.style,
            scene,
        }
    }

    /// The tree being edited.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The selected node.
    pub fn selection(&self) -> Option<NodeId> {
        self.state.selection()
    }

    /// The node being edited inline and its draft.
    pub fn editing(&self) -> Option<(NodeId, &str)> {
        self.state.editing()
    }

    /// Contents of the top-level label field.
    pub fn pending_label(&self) -> &str {
        &self.pending
    }

    /// Whether a non-empty label has ever been submitted. Never resets.
    pub fn label_submitted(&self) -> bool {
        self.label_submitted
    }

    /// The current scene, kept up to date even while the canvas is hidden.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Canvas metrics.
    pub fn style(&self) -> &SceneStyle {
        &self.style
    }

    /// Snapshot of everything the boundary draws.
    pub fn view(&self) -> View<'_> {
        View {
            scene: self.label_submitted.then_some(&self.scene),
            selection: self.state.selection(),
            editing: self.state.editing(),
            canvas_visible: self.label_submitted,
            pending_label: &self.pending,
        }
    }

    /// Apply one user intent.
    pub fn handle(&mut self, intent: Intent) -> Response {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("handle_intent", intent = ?intent).entered();

        match intent {
            Intent::NodeClicked(node) => self.click_node(node).into(),
            Intent::LabelClicked(node) => self.click_label(node).into(),
            Intent::LabelDraftChanged(node, text) => self.change_draft(node, &text).into(),
            Intent::LabelEditCommitted(node) => self.commit_edit(node).into(),
            Intent::PendingLabelChanged(text) => self.set_pending_label(text).into(),
            Intent::SubmitLabelClicked => self.submit_label().into(),
            Intent::AddBranchClicked(side) => match self.add_branch(side) {
                Ok(_) => Changes::TREE.into(),
                Err(err) => Response::refused(err),
            },
        }
    }

    /// Translate a pointer click at `pt` (canvas coordinates) into intents.
    ///
    /// Nothing is clickable while the canvas is hidden. A click anywhere but
    /// inside the open inline editor blurs it, which commits its draft before
    /// the click itself is applied.
    pub fn click_at(&mut self, pt: Point, tolerance: f64) -> Response {
        if !self.label_submitted {
            return Response::none();
        }
        let hit = self.scene.hit_test(pt, tolerance);
        let mut changes = Changes::empty();
        if let Some(editing) = self.state.editing().map(|(n, _)| n)
            && !hit.is_some_and(|h| h.node == editing && h.part == HitPart::Editor)
        {
            changes |= self.commit_edit(editing);
        }
        match hit {
            Some(hit) if hit.part == HitPart::Circle => changes |= self.click_node(hit.node),
            Some(hit) if hit.part == HitPart::Label => changes |= self.click_label(hit.node),
            _ => {}
        }
        changes.into()
    }

    /// Select `node`. Unknown ids and re-selection change nothing.
    pub fn click_node(&mut self, node: NodeId) -> Changes {
        if !self.tree.contains(node) || !self.state.select(node) {
            return Changes::empty();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(node = node.index(), "selected");
        self.refresh(Changes::SELECTION)
    }

    /// Open the inline editor on `node`'s label.
    ///
    /// An editor already open on another node is committed first.
    pub fn click_label(&mut self, node: NodeId) -> Changes {
        if self.state.editing().is_some_and(|(n, _)| n == node) {
            return Changes::empty();
        }
        let Some(label) = self.tree.label(node) else {
            return Changes::empty();
        };
        let mut changes = Changes::empty();
        if let Some(previous) = self.state.begin_edit(node, label) {
            changes |= self.rename(previous.node, previous.draft);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(node = node.index(), "label edit started");
        self.refresh(changes | Changes::EDITING)
    }

    /// Replace the draft of `node`'s inline editor. The committed label is untouched.
    pub fn change_draft(&mut self, node: NodeId, text: &str) -> Changes {
        if !self.state.update_draft(node, text) {
            return Changes::empty();
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(node = node.index(), draft = text, "draft changed");
        self.refresh(Changes::EDITING)
    }

    /// Close `node`'s inline editor, committing its draft via
    /// [`Editor::rename_node`].
    ///
    /// The editor closes even when the rename is dropped because `node` is not
    /// the selection.
    pub fn commit_edit(&mut self, node: NodeId) -> Changes {
        let Some(finished) = self.state.finish_edit(node) else {
            return Changes::empty();
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(node = node.index(), draft = %finished.draft, "label edit committed");
        let changes = self.rename(finished.node, finished.draft);
        self.refresh(changes | Changes::EDITING)
    }

    /// Replace the top-level pending label.
    pub fn set_pending_label(&mut self, text: impl Into<String>) -> Changes {
        let text = text.into();
        if self.pending == text {
            return Changes::empty();
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(pending = %text, "pending label changed");
        self.pending = text;
        Changes::PENDING
    }

    /// Submit the top-level pending label.
    ///
    /// A blank (whitespace-only) label does nothing. Otherwise the canvas is
    /// revealed for good, and the selected node, if any, is renamed to the
    /// pending label as typed.
    pub fn submit_label(&mut self) -> Changes {
        if self.pending.trim().is_empty() {
            return Changes::empty();
        }
        let mut changes = Changes::empty();
        if !self.label_submitted {
            self.label_submitted = true;
            changes |= Changes::CANVAS;
            #[cfg(feature = "tracing")]
            tracing::debug!("canvas revealed");
        }
        if let Some(selection) = self.state.selection() {
            changes |= self.rename(selection, self.pending.clone());
        }
        self.refresh(changes)
    }

    /// Grow a level-one branch from the selected node.
    pub fn add_branch(&mut self, side: Side) -> Result<NodeId, EditError> {
        let Some(selection) = self.state.selection() else {
            #[cfg(feature = "tracing")]
            tracing::warn!(?side, "add branch refused: nothing selected");
            return Err(EditError::NoSelection);
        };
        self.add_child(selection, side, Level::ONE)
    }

    /// Rename `target` to `label`, but only if `target` is the selection.
    ///
    /// Anything else is a silent no-op. Returns `true` if the label was
    /// written.
    pub fn rename_node(&mut self, target: NodeId, label: impl Into<String>) -> bool {
        let changes = self.rename(target, label.into());
        self.refresh(changes);
        changes.contains(Changes::TREE)
    }

    /// Append a child to `parent`, labeled with the *selected* node's label.
    ///
    /// Refused if nothing is selected. `parent` does not have to be the
    /// selection.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        side: Side,
        level: Level,
    ) -> Result<NodeId, EditError> {
        let selection = self.state.selection().ok_or(EditError::NoSelection)?;
        let label = self
            .tree
            .label(selection)
            .map(String::from)
            .ok_or(EditError::UnknownNode(selection))?;
        let child = self
            .tree
            .push_child(parent, side, level, label)
            .ok_or(EditError::UnknownNode(parent))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            parent = parent.index(),
            child = child.index(),
            ?side,
            level = level.get(),
            "branch added"
        );
        self.refresh(Changes::TREE);
        Ok(child)
    }

    fn rename(&mut self, target: NodeId, label: String) -> Changes {
        if !self.state.is_selected(target) {
            #[cfg(feature = "tracing")]
            tracing::trace!(node = target.index(), "rename dropped: not selected");
            return Changes::empty();
        }
        if !self.tree.set_label(target, label) {
            return Changes::empty();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(node = target.index(), "renamed");
        let mut changes = Changes::TREE;
        if let Some(current) = self.tree.label(target)
            && self.state.resync_draft(target, current)
        {
            changes |= Changes::EDITING;
        }
        changes
    }

    fn refresh(&mut self, changes: Changes) -> Changes {
        if changes.needs_redraw() {
            let highlight = Highlight {
                selected: self.state.selection(),
                editing: self.state.editing(),
            };
            self.scene = project(&self.tree, highlight, &self.style);
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapling_scene::MarkFlags;

    fn submitted() -> Editor {
        let mut editor = Editor::new();
        editor.submit_label();
        editor
    }

    #[test]
    fn starts_hidden_with_root_only() {
        let editor = Editor::new();
        let view = editor.view();
        assert!(view.scene.is_none());
        assert!(!view.canvas_visible);
        assert_eq!(view.pending_label, "Root");
        assert_eq!(view.selection, None);
        assert_eq!(editor.tree().len(), 1);
    }

    #[test]
    fn submit_reveals_canvas_once() {
        let mut editor = Editor::new();
        assert_eq!(editor.submit_label(), Changes::CANVAS);
        assert!(editor.view().scene.is_some());
        assert_eq!(editor.submit_label(), Changes::empty());
        assert!(editor.label_submitted());
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut editor = Editor::new();
        editor.set_pending_label("   ");
        assert_eq!(editor.submit_label(), Changes::empty());
        assert!(!editor.label_submitted());
    }

    #[test]
    fn submit_renames_selection_with_untrimmed_text() {
        let mut editor = submitted();
        let root = editor.tree().root();
        editor.click_node(root);
        editor.set_pending_label(" Trunk ");
        assert_eq!(editor.submit_label(), Changes::TREE);
        assert_eq!(editor.tree().label(root), Some(" Trunk "));
    }

    #[test]
    fn add_branch_without_selection_is_refused() {
        let mut editor = submitted();
        let response = editor.handle(Intent::AddBranchClicked(Side::Left));
        assert_eq!(response.warning, Some(EditError::NoSelection));
        assert!(response.changes.is_empty());
        assert_eq!(editor.tree().len(), 1);
    }

    #[test]
    fn add_child_copies_selected_label_not_pending() {
        let mut editor = submitted();
        let root = editor.tree().root();
        editor.click_node(root);
        editor.set_pending_label("typed but not submitted");
        let child = editor.add_branch(Side::Right).unwrap();
        assert_eq!(editor.tree().label(child), Some("Root"));
        assert_eq!(editor.tree().position(child), Some(Point::new(390.0, 200.0)));
        assert_eq!(editor.selection(), Some(root), "selection survives mutation");
    }

    #[test]
    fn add_child_to_unselected_parent() {
        let mut editor = submitted();
        let root = editor.tree().root();
        editor.click_node(root);
        let a = editor.add_branch(Side::Left).unwrap();
        editor.rename_node(root, "Selected");
        // Parent is `a`, label still comes from the selected root.
        let b = editor.add_child(a, Side::Left, Level::ONE).unwrap();
        assert_eq!(editor.tree().parent_of(b), Some(a));
        assert_eq!(editor.tree().label(b), Some("Selected"));
    }

    #[test]
    fn ids_from_another_tree_are_refused() {
        let mut other = Tree::new("Other", Point::ZERO);
        let foreign = other
            .push_child(other.root(), Side::Left, Level::ONE, "x")
            .unwrap();
        let mut editor = submitted();
        let root = editor.tree().root();
        editor.click_node(root);
        // The local tree has a node with the same index as `foreign`.
        let local = editor.add_branch(Side::Right).unwrap();
        assert_eq!(local.index(), foreign.index());

        assert_eq!(
            editor.add_child(foreign, Side::Left, Level::ONE),
            Err(EditError::UnknownNode(foreign))
        );
        assert_eq!(editor.click_node(foreign), Changes::empty());
        assert_eq!(editor.selection(), Some(root));
        assert!(!editor.rename_node(foreign, "x"));
        assert_eq!(editor.click_label(foreign), Changes::empty());
        assert_eq!(editor.tree().len(), 2);
        assert_eq!(editor.tree().label(local), Some("Root"));
    }

    #[test]
    fn rename_is_gated_by_selection() {
        let mut editor = submitted();
        let root = editor.tree().root();
        editor.click_node(root);
        let child = editor.add_branch(Side::Left).unwrap();
        assert!(!editor.rename_node(child, "nope"));
        assert_eq!(editor.tree().label(child), Some("Root"));
        assert!(editor.rename_node(root, "yes"));
        assert_eq!(editor.tree().label(root), Some("yes"));
    }

    #[test]
    fn inline_edit_of_unselected_node_is_dropped_on_commit() {
        let mut editor = submitted();
        let root = editor.tree().root();
        editor.click_label(root);
        editor.change_draft(root, "Draft");
        assert_eq!(editor.scene().node(root).unwrap().display_text(), "Draft");
        assert_eq!(editor.commit_edit(root), Changes::EDITING);
        assert_eq!(editor.editing(), None);
        assert_eq!(editor.tree().label(root), Some("Root"));
    }

    #[test]
    fn inline_edit_of_selected_node_commits() {
        let mut editor = submitted();
        let root = editor.tree().root();
        editor.click_node(root);
        editor.click_label(root);
        editor.change_draft(root, "Trunk");
        assert_eq!(editor.commit_edit(root), Changes::TREE | Changes::EDITING);
        assert_eq!(editor.tree().label(root), Some("Trunk"));
    }

    #[test]
    fn clicking_another_label_commits_open_editor() {
        let mut editor = submitted();
        let root = editor.tree().root();
        editor.click_node(root);
        let child = editor.add_branch(Side::Left).unwrap();
        editor.click_label(root);
        editor.change_draft(root, "Trunk");
        let changes = editor.click_label(child);
        assert!(changes.contains(Changes::TREE | Changes::EDITING));
        assert_eq!(editor.tree().label(root), Some("Trunk"));
        assert_eq!(editor.editing(), Some((child, "Root")));
    }

    #[test]
    fn global_submit_resyncs_open_draft() {
        let mut editor = submitted();
        let root = editor.tree().root();
        editor.click_node(root);
        editor.click_label(root);
        editor.change_draft(root, "half-typed");
        editor.set_pending_label("Trunk");
        assert_eq!(editor.submit_label(), Changes::TREE | Changes::EDITING);
        assert_eq!(editor.editing(), Some((root, "Trunk")));
    }

    #[test]
    fn draft_changes_leave_label_alone() {
        let mut editor = submitted();
        let root = editor.tree().root();
        editor.click_node(root);
        editor.click_label(root);
        let epoch = editor.tree().epoch();
        assert_eq!(editor.change_draft(root, "x"), Changes::EDITING);
        assert_eq!(editor.tree().epoch(), epoch);
        assert_eq!(editor.tree().label(root), Some("Root"));
    }

    #[test]
    fn selection_moves_highlight() {
        let mut editor = submitted();
        let root = editor.tree().root();
        editor.click_node(root);
        let child = editor.add_branch(Side::Left).unwrap();
        editor.click_node(child);
        let selected: alloc::vec::Vec<_> = editor.scene().selected().collect();
        assert_eq!(selected, alloc::vec![child]);
        assert!(
            !editor
                .scene()
                .node(root)
                .unwrap()
                .flags
                .contains(MarkFlags::SELECTED)
        );
    }

    #[test]
    fn reclick_is_idempotent() {
        let mut editor = submitted();
        let root = editor.tree().root();
        editor.click_node(root);
        let epoch = editor.tree().epoch();
        assert_eq!(editor.click_node(root), Changes::empty());
        assert_eq!(editor.selection(), Some(root));
        assert_eq!(editor.tree().epoch(), epoch);
    }

    #[test]
    fn click_at_routes_hits() {
        let mut editor = Editor::new();
        let root = editor.tree().root();
        assert_eq!(
            editor.click_at(Point::new(300.0, 100.0), 0.0),
            Response::none(),
            "hidden canvas is not clickable"
        );
        editor.submit_label();
        let response = editor.click_at(Point::new(300.0, 100.0), 0.0);
        assert_eq!(response.changes, Changes::SELECTION);
        assert_eq!(editor.selection(), Some(root));

        let response = editor.click_at(Point::new(300.0, 65.0), 0.0);
        assert_eq!(response.changes, Changes::EDITING);
        assert_eq!(editor.editing(), Some((root, "Root")));

        // Typing, then clicking empty canvas blurs and commits.
        editor.change_draft(root, "Trunk");
        let response = editor.click_at(Point::new(0.0, 0.0), 0.0);
        assert_eq!(response.changes, Changes::TREE | Changes::EDITING);
        assert_eq!(editor.tree().label(root), Some("Trunk"));
        assert_eq!(editor.editing(), None);
    }

    #[test]
    fn click_inside_open_editor_keeps_it_open() {
        let mut editor = submitted();
        let root = editor.tree().root();
        editor.click_label(root);
        // Inside the editor box, outside the circle.
        let response = editor.click_at(Point::new(260.0, 75.0), 0.0);
        assert_eq!(response, Response::none());
        assert_eq!(editor.editing(), Some((root, "Root")));
    }
}
