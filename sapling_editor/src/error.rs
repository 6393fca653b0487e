// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Refusals surfaced to the user.

use sapling_tree::NodeId;
use thiserror::Error;

/// Why an editing operation was refused.
///
/// Only refusals the user must be told about are errors. Renames of a node
/// that is not selected and submits of an empty label are silent no-ops and
/// never produce an `EditError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EditError {
    /// A branch was requested while nothing is selected.
    #[error("please select a node first")]
    NoSelection,
    /// The id was not issued by this editor's tree.
    #[error("node {0:?} is not part of this tree")]
    UnknownNode(NodeId),
}
