// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sapling Scene: the render model of a Sapling tree.
//!
//! This crate sits between [`sapling_tree`] and whatever actually draws. It
//! walks a [`Tree`](sapling_tree::Tree) depth-first and produces a flat,
//! ordered [`Scene`]:
//!
//! - one [`NodeMark`] per node: a circle, its label (or the inline editor
//!   while the label is being edited), and [`MarkFlags`] for selection/editing;
//! - one [`Elbow`] per parent→child edge: a horizontal segment at the parent's
//!   height followed by a vertical segment down to the child.
//!
//! The root is pinned at [`SceneStyle::anchor`]; everything else keeps its
//! stored offset from the root. Projection is always a full rebuild.
//!
//! [`Scene::hit_test`] maps canvas points back to node circles, labels, and
//! open editors, so a boundary that only sees raw pointer input can still
//! report which node was clicked.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use sapling_scene::{Highlight, SceneStyle, project};
//! use sapling_tree::{Level, Side, Tree};
//!
//! let mut tree = Tree::new("Root", Point::new(300.0, 100.0));
//! let child = tree.push_child(tree.root(), Side::Left, Level::ONE, "leaf").unwrap();
//!
//! let scene = project(
//!     &tree,
//!     Highlight { selected: Some(child), editing: None },
//!     &SceneStyle::default(),
//! );
//! assert_eq!(scene.nodes().count(), 2);
//! assert_eq!(scene.connectors().count(), 1);
//! assert_eq!(scene.selected().collect::<Vec<_>>(), vec![child]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: `no_std` + `alloc` builds relying on `libm` for float math.
//! - `tracing`: emits a `project_scene` debug span per projection.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hit;
mod scene;
mod style;

pub use hit::{HitPart, SceneHit};
pub use scene::{
    Elbow, Highlight, InlineEditor, MarkFlags, NodeMark, Primitive, Scene, project,
};
pub use style::SceneStyle;
