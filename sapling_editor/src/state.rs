// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection and inline-edit state machine.
//!
//! Two orthogonal pieces of state are tracked:
//!
//! - **Selection**: at most one node, changed only by an explicit node click.
//!   Tree mutations never clear it.
//! - **Editing**: at most one node whose label is open in the inline editor,
//!   together with its uncommitted draft.
//!
//! ## Transition rules
//!
//! 1. **Select**: replaces any prior selection. Re-selecting the selected node
//!    changes nothing.
//! 2. **Begin edit**: opens the editor on a node with `draft = label`. Does not
//!    require the node to be selected. Opening on the node already being edited
//!    changes nothing; opening on another node hands back the previous editor
//!    so the caller can commit it first.
//! 3. **Update draft**: only the node being edited accepts draft text.
//! 4. **Finish edit**: closes the editor and hands back the draft. There is no
//!    cancel: whoever closes the editor is expected to commit the draft.
//!
//! Whether a committed draft actually changes the label is not decided here;
//! see [`Editor::rename_node`](crate::Editor::rename_node).
//!
//! ```
//! use sapling_editor::EditState;
//! # use kurbo::Point;
//! # use sapling_tree::Tree;
//! # let tree = Tree::new("Root", Point::ZERO);
//! # let root = tree.root();
//!
//! let mut state = EditState::new();
//! assert!(state.select(root));
//! assert!(!state.select(root), "re-selecting is a no-op");
//!
//! state.begin_edit(root, "Root");
//! assert!(state.update_draft(root, "Trunk"));
//! let finished = state.finish_edit(root).unwrap();
//! assert_eq!(finished.draft, "Trunk");
//! assert_eq!(state.editing(), None);
//! ```

use alloc::string::String;
use sapling_tree::NodeId;

/// An open inline editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Editing {
    /// The node whose label is being edited.
    pub node: NodeId,
    /// Uncommitted text.
    pub draft: String,
}

/// Selection and inline-edit state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditState {
    selection: Option<NodeId>,
    editing: Option<Editing>,
}

impl EditState {
    /// Nothing selected, nothing being edited.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected node.
    pub fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    /// Identity check against the selection.
    pub fn is_selected(&self, node: NodeId) -> bool {
        self.selection == Some(node)
    }

    /// The node being edited and its draft.
    pub fn editing(&self) -> Option<(NodeId, &str)> {
        self.editing
            .as_ref()
            .map(|e| (e.node, e.draft.as_str()))
    }

    /// Select `node`. Returns `true` if the selection changed.
    pub fn select(&mut self, node: NodeId) -> bool {
        if self.selection == Some(node) {
            return false;
        }
        self.selection = Some(node);
        true
    }

    /// Open the editor on `node` with its committed `label` as the draft.
    ///
    /// Returns the editor that was open on a different node, if any; it is
    /// closed by this call and its draft still has to be committed.
    pub fn begin_edit(&mut self, node: NodeId, label: &str) -> Option<Editing> {
        if self.editing.as_ref().is_some_and(|e| e.node == node) {
            return None;
        }
        self.editing.replace(Editing {
            node,
            draft: label.into(),
        })
    }

    /// Replace the draft of `node`'s open editor.
    ///
    /// Returns `false` if `node` is not being edited or the text is unchanged.
    pub fn update_draft(&mut self, node: NodeId, text: &str) -> bool {
        match &mut self.editing {
            Some(e) if e.node == node && e.draft != text => {
                e.draft.clear();
                e.draft.push_str(text);
                true
            }
            _ => false,
        }
    }

    /// Close `node`'s editor and hand back its draft.
    ///
    /// Returns `None` if `node` is not being edited.
    pub fn finish_edit(&mut self, node: NodeId) -> Option<Editing> {
        if self.editing.as_ref().is_some_and(|e| e.node == node) {
            self.editing.take()
        } else {
            None
        }
    }

    /// Reset `node`'s draft to its freshly committed `label`.
    ///
    /// Called after a label changes underneath an open editor. Returns `true`
    /// if the draft changed.
    pub fn resync_draft(&mut self, node: NodeId, label: &str) -> bool {
        self.update_draft(node, label)
    }
}
