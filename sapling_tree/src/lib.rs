// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sapling Tree: a labeled tree whose nodes are placed once, by a fixed rule.
//!
//! Sapling Tree is the data model behind a small tree-diagram editor: a user
//! picks a node and grows a left or right branch from it, and can rename nodes
//! in place.
//!
//! - Stores nodes in an arena addressed by stable [`NodeId`]s; nodes are only
//!   ever appended.
//! - Places each new child exactly once with a [`BranchRule`] that depends on
//!   the parent's position, the [`Side`], and a [`Level`].
//! - Bumps a single [`Tree::epoch`] counter on every mutation, so consumers can
//!   treat the whole tree as changed instead of diffing it.
//!
//! ## Not a layout engine
//!
//! There is no re-layout, balancing, or overlap avoidance. Positions are
//! permanent once assigned, and deep levels produce degenerate branch lengths
//! (see the [`layout`] module docs). The policy of *who* may rename or grow
//! which node (selection, inline editing) lives in `sapling_editor`.
//!
//! ## API overview
//!
//! - [`Tree::new`] / [`Tree::with_rule`]: a tree holding only its root.
//! - [`Tree::push_child`] → [`NodeId`], [`Tree::set_label`].
//! - [`Tree::label`], [`Tree::position`], [`Tree::parent_of`],
//!   [`Tree::children_of`], [`Tree::depth_of`].
//! - [`Tree::next_depth_first`] and [`Tree::iter_depth_first`] for pre-order
//!   traversal (parent first, children in insertion order).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod layout;
mod tree;
mod types;

pub use layout::BranchRule;
pub use tree::Tree;
pub use types::{Level, NodeId, Side};
