// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, mutation, traversal.

use alloc::{string::String, vec::Vec};
use core::sync::atomic::{AtomicU32, Ordering};
use kurbo::Point;
use smallvec::SmallVec;

use crate::layout::BranchRule;
use crate::types::{Level, NodeId, Side};

static NEXT_TAG: AtomicU32 = AtomicU32::new(0);

/// A labeled tree with a single root and permanently placed nodes.
///
/// Nodes are stored in an arena and addressed by [`NodeId`]. They are only
/// ever appended, never removed or moved, so every id handed out stays valid.
///
/// Every mutation bumps [`Tree::epoch`]. Consumers treat any epoch change as
/// "the whole tree changed" and rebuild whatever they derived from it.
///
/// ## Example
///
/// ```rust
/// use kurbo::Point;
/// use sapling_tree::{Level, Side, Tree};
///
/// let mut tree = Tree::new("Root", Point::new(300.0, 100.0));
/// let root = tree.root();
/// let left = tree.push_child(root, Side::Left, Level::ONE, "Root").unwrap();
///
/// assert_eq!(tree.position(left), Some(Point::new(210.0, 200.0)));
/// assert_eq!(tree.children_of(root), &[left]);
/// ```
#[derive(Clone)]
pub struct Tree {
    tag: u32,
    nodes: Vec<Node>,
    rule: BranchRule,
    epoch: u64,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tree")
            .field("tag", &self.tag)
            .field("nodes", &self.nodes.len())
            .field("rule", &self.rule)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    label: String,
    position: Point,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 2]>,
}

impl Node {
    fn new(label: String, position: Point, parent: Option<NodeId>) -> Self {
        Self {
            label,
            position,
            parent,
            children: SmallVec::new(),
        }
    }
}

impl Tree {
    /// Create a tree holding only a root, placed with [`BranchRule::CLASSIC`].
    pub fn new(root_label: impl Into<String>, root_position: Point) -> Self {
        Self::with_rule(root_label, root_position, BranchRule::CLASSIC)
    }

    /// Create a tree holding only a root, using a custom placement rule.
    pub fn with_rule(
        root_label: impl Into<String>,
        root_position: Point,
        rule: BranchRule,
    ) -> Self {
        Self {
            tag: NEXT_TAG.fetch_add(1, Ordering::Relaxed),
            nodes: alloc::vec![Node::new(root_label.into(), root_position, None)],
            rule,
            epoch: 0,
        }
    }

    /// The root node.
    pub const fn root(&self) -> NodeId {
        NodeId::new(self.tag, 0)
    }

    /// Number of nodes, root included. Never zero.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Placement rule used by [`Tree::push_child`].
    pub fn rule(&self) -> &BranchRule {
        &self.rule
    }

    /// Mutation counter. Bumped once per successful mutation.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Returns true if `id` was issued by this tree (or the tree it was cloned from).
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Committed label of a node.
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.label.as_str())
    }

    /// Permanent position of a node.
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.node(id).map(|n| n.position)
    }

    /// Returns the parent of a node, or `None` for the root and unknown ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Children in insertion order, or an empty slice for unknown ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Some(n) => &n.children,
            None => &[],
        }
    }

    /// Number of edges between the root and `id`.
    pub fn depth_of(&self, id: NodeId) -> Option<usize> {
        if !self.contains(id) {
            return None;
        }
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent_of(current) {
            depth += 1;
            current = parent;
        }
        Some(depth)
    }

    /// Replace a node's label.
    ///
    /// Returns `false` (and leaves the epoch alone) for unknown ids. Setting
    /// the same text again still counts as a mutation.
    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> bool {
        let Some(n) = self.node_mut(id) else {
            return false;
        };
        n.label = label.into();
        self.epoch += 1;
        true
    }

    /// Append a child to `parent`, placed by the tree's [`BranchRule`].
    ///
    /// Returns `None` if `parent` is unknown.
    pub fn push_child(
        &mut self,
        parent: NodeId,
        side: Side,
        level: Level,
        label: impl Into<String>,
    ) -> Option<NodeId> {
        let parent_position = self.position(parent)?;
        let position = self.rule.place(parent_position, side, level);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId::new(self.tag, self.nodes.len() as u32);
        self.nodes.push(Node::new(label.into(), position, Some(parent)));
        self.node_mut(parent)?.children.push(id);
        self.epoch += 1;
        Some(id)
    }

    /// Get the next node in pre-order (parent first, children in insertion order).
    ///
    /// Returns `None` after the last node or for unknown ids.
    pub fn next_depth_first(&self, current: NodeId) -> Option<NodeId> {
        if let Some(&first_child) = self.children_of(current).first() {
            return Some(first_child);
        }

        let mut node = current;
        while let Some(parent) = self.parent_of(node) {
            if let Some(next_sibling) = self.next_sibling(node) {
                return Some(next_sibling);
            }
            node = parent;
        }
        None
    }

    /// Iterate all nodes in pre-order, starting at the root.
    pub fn iter_depth_first(&self) -> impl Iterator<Item = NodeId> + '_ {
        core::iter::successors(Some(self.root()), move |&id| self.next_depth_first(id))
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent_of(node)?;
        let siblings = self.children_of(parent);
        let pos = siblings.iter().position(|&id| id == node)?;
        siblings.get(pos + 1).copied()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        if id.tree() != self.tag {
            return None;
        }
        self.nodes.get(id.idx())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.tree() != self.tag {
            return None;
        }
        self.nodes.get_mut(id.idx())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> (Tree, NodeId, NodeId, NodeId) {
        let mut tree = Tree::new("Root", Point::new(300.0, 100.0));
        let root = tree.root();
        let a = tree.push_child(root, Side::Left, Level::ONE, "a").unwrap();
        let b = tree.push_child(root, Side::Right, Level::ONE, "b").unwrap();
        let c = tree.push_child(a, Side::Right, Level::ONE, "c").unwrap();
        (tree, a, b, c)
    }

    #[test]
    fn new_tree_is_a_single_root() {
        let tree = Tree::new("Root", Point::new(300.0, 100.0));
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.label(tree.root()), Some("Root"));
        assert_eq!(tree.parent_of(tree.root()), None);
        assert_eq!(tree.epoch(), 0);
    }

    #[test]
    fn push_child_places_and_links() {
        let (tree, a, b, c) = sample();
        let root = tree.root();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.children_of(root), &[a, b]);
        assert_eq!(tree.parent_of(c), Some(a));
        assert_eq!(tree.position(a), Some(Point::new(210.0, 200.0)));
        assert_eq!(tree.position(b), Some(Point::new(390.0, 200.0)));
        // Placed relative to its own parent, not the root.
        assert_eq!(tree.position(c), Some(Point::new(300.0, 300.0)));
        assert_eq!(tree.depth_of(c), Some(2));
        assert_eq!(tree.epoch(), 3);
    }

    #[test]
    fn children_keep_insertion_order_not_side() {
        let mut tree = Tree::new("Root", Point::ZERO);
        let root = tree.root();
        let right = tree.push_child(root, Side::Right, Level::ONE, "r").unwrap();
        let left = tree.push_child(root, Side::Left, Level::ONE, "l").unwrap();
        assert_eq!(tree.children_of(root), &[right, left]);
    }

    #[test]
    fn positions_are_permanent() {
        let (mut tree, a, _, _) = sample();
        let before = tree.position(a);
        tree.push_child(a, Side::Left, Level::ONE, "d").unwrap();
        tree.set_label(a, "renamed");
        assert_eq!(tree.position(a), before);
    }

    #[test]
    fn set_label_bumps_epoch() {
        let (mut tree, a, _, _) = sample();
        let epoch = tree.epoch();
        assert!(tree.set_label(a, "x"));
        assert_eq!(tree.label(a), Some("x"));
        assert_eq!(tree.epoch(), epoch + 1);
    }

    #[test]
    fn unknown_ids_are_refused() {
        let (mut tree, ..) = sample();
        let stranger = NodeId::new(tree.tag, 99);
        let epoch = tree.epoch();
        assert!(!tree.contains(stranger));
        assert!(!tree.set_label(stranger, "x"));
        assert!(tree.push_child(stranger, Side::Left, Level::ONE, "x").is_none());
        assert_eq!(tree.label(stranger), None);
        assert_eq!(tree.children_of(stranger), &[] as &[NodeId]);
        assert_eq!(tree.depth_of(stranger), None);
        assert_eq!(tree.next_depth_first(stranger), None);
        assert_eq!(tree.epoch(), epoch, "refused mutations are not changes");
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn ids_from_another_tree_are_unknown() {
        let (mut tree, a, ..) = sample();
        let (other, other_a, ..) = sample();
        assert_eq!(a.index(), other_a.index());
        assert!(!tree.contains(other_a));
        assert!(!tree.contains(other.root()));
        assert_eq!(tree.label(other_a), None);
        assert!(!tree.set_label(other_a, "x"));
        assert!(tree.push_child(other_a, Side::Left, Level::ONE, "x").is_none());
        assert_eq!(tree.label(a), Some("a"));
        assert_eq!(tree.len(), 4);

        // A clone keeps accepting the ids of the tree it came from.
        let copy = tree.clone();
        assert!(copy.contains(a));
        assert_eq!(copy.root(), tree.root());
    }

    #[test]
    fn depth_first_is_pre_order() {
        let (tree, a, b, c) = sample();
        let order: Vec<NodeId> = tree.iter_depth_first().collect();
        assert_eq!(order, vec![tree.root(), a, c, b]);
        assert_eq!(tree.next_depth_first(b), None);
    }

    #[test]
    fn custom_rule_is_used_for_placement() {
        let rule = BranchRule {
            vertical_growth: 0.0,
            ..BranchRule::CLASSIC
        };
        let mut tree = Tree::with_rule("Root", Point::ZERO, rule);
        assert_eq!(tree.rule(), &rule);
        let root = tree.root();
        let child = tree.push_child(root, Side::Right, Level::ONE, "c").unwrap();
        assert_eq!(tree.position(child), Some(Point::new(90.0, 50.0)));
    }
}
