// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sapling Editor: selection, inline label editing, and branch growth over a
//! Sapling tree.
//!
//! An [`Editor`] owns one [`Tree`](sapling_tree::Tree) and the interaction
//! state around it. The rendering boundary feeds it [`Intent`]s (or raw clicks
//! through [`Editor::click_at`]) and draws [`Editor::view`] afterwards.
//!
//! ## Rules
//!
//! - At most one node is selected. Only a node click moves the selection, and
//!   nothing ever clears it.
//! - Renames are gated by identity: only the selected node can be renamed.
//!   Renames of any other node are dropped silently.
//! - Growing a branch needs a selection and copies the *selected* node's label.
//!   Without a selection the intent is refused with [`EditError::NoSelection`],
//!   which the boundary shows as a blocking warning.
//! - The canvas stays hidden until the first non-blank label submit.
//!
//! The state machine itself lives in [`EditState`]; see its module docs for the
//! transition rules.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: `no_std` + `alloc` builds relying on `libm` for float math.
//! - `tracing`: debug events for selection, edits, and branch growth, a warning
//!   for refused intents, and one span per handled intent.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod editor;
mod error;
mod intent;
mod state;

pub use config::EditorConfig;
pub use editor::{Editor, View};
pub use error::EditError;
pub use intent::{Changes, Intent, Response};
pub use state::{EditState, Editing};
