// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! User intents coming from the rendering boundary, and what they changed.

use alloc::string::String;
use sapling_tree::{NodeId, Side};

use crate::error::EditError;

/// A discrete user action reported by the rendering boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// The node's circle was clicked.
    NodeClicked(NodeId),
    /// The node's label text was clicked.
    LabelClicked(NodeId),
    /// The inline editor of the node received new text.
    LabelDraftChanged(NodeId, String),
    /// The inline editor of the node was blurred or submitted.
    LabelEditCommitted(NodeId),
    /// The top-level "Enter label" field changed.
    PendingLabelChanged(String),
    /// The top-level "Submit Label" button was pressed.
    SubmitLabelClicked,
    /// An "Add Left/Right Branch" button was pressed.
    AddBranchClicked(Side),
}

bitflags::bitflags! {
    /// Parts of the editor state touched by an intent.
    ///
    /// Any of `TREE`, `SELECTION`, `EDITING`, or `CANVAS` means the scene was
    /// rebuilt and the boundary should redraw.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// A label changed or a node was added.
        const TREE      = 0b0000_0001;
        /// The selection moved.
        const SELECTION = 0b0000_0010;
        /// An inline editor opened, closed, or its draft changed.
        const EDITING   = 0b0000_0100;
        /// The top-level pending label changed.
        const PENDING   = 0b0000_1000;
        /// The canvas and branch controls became visible.
        const CANVAS    = 0b0001_0000;
    }
}

impl Changes {
    /// Whether the scene needs to be redrawn.
    pub fn needs_redraw(self) -> bool {
        self.intersects(Self::TREE | Self::SELECTION | Self::EDITING | Self::CANVAS)
    }
}

/// Outcome of [`Editor::handle`](crate::Editor::handle).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// What changed.
    pub changes: Changes,
    /// Blocking warning to show the user, if the intent was refused.
    pub warning: Option<EditError>,
}

impl Response {
    /// Nothing happened.
    pub const fn none() -> Self {
        Self {
            changes: Changes::empty(),
            warning: None,
        }
    }

    /// A refused intent; nothing changed.
    pub const fn refused(warning: EditError) -> Self {
        Self {
            changes: Changes::empty(),
            warning: Some(warning),
        }
    }
}

impl From<Changes> for Response {
    fn from(changes: Changes) -> Self {
        Self {
            changes,
            warning: None,
        }
    }
}
