// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the tree: node identifiers, branch sides, and levels.

use core::num::NonZeroU32;

/// Identifier for a node in a [`Tree`](crate::Tree).
///
/// Ids are assigned at creation and never reused: nodes are never removed, so
/// an id stays valid for the lifetime of the tree that issued it. Each id also
/// carries the tag of its tree, so an id from another tree is never mistaken
/// for a local node with the same index. Clones of a tree share its tag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId {
    tree: u32,
    idx: u32,
}

impl NodeId {
    pub(crate) const fn new(tree: u32, idx: u32) -> Self {
        Self { tree, idx }
    }

    pub(crate) const fn tree(self) -> u32 {
        self.tree
    }

    pub(crate) const fn idx(self) -> usize {
        self.idx as usize
    }

    /// Creation index of this node; the root is `0`.
    pub const fn index(self) -> u32 {
        self.idx
    }
}

/// Which side of its parent a new branch grows towards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Grow towards negative x.
    Left,
    /// Grow towards positive x.
    Right,
}

impl Side {
    /// `-1.0` for [`Side::Left`], `+1.0` for [`Side::Right`].
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Nesting level fed to the branch rule. Always at least one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(NonZeroU32);

impl Level {
    /// The level used for branches added from the top-level controls.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Returns `None` for `0`.
    pub const fn new(level: u32) -> Option<Self> {
        match NonZeroU32::new(level) {
            Some(l) => Some(Self(l)),
            None => None,
        }
    }

    /// The raw level.
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// The next deeper level, saturating at `u32::MAX`.
    pub const fn deeper(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::ONE
    }
}
