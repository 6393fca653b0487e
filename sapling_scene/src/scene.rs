// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene primitives and the tree → scene projection.

use alloc::{string::String, vec, vec::Vec};
use kurbo::{Circle, Line, Point, Rect, Vec2};
use sapling_tree::{NodeId, Tree};

use crate::style::SceneStyle;

bitflags::bitflags! {
    /// Interaction state of a node mark.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MarkFlags: u8 {
        /// The node is the current selection.
        const SELECTED = 0b0000_0001;
        /// The node's label is open in the inline editor.
        const EDITING  = 0b0000_0010;
    }
}

/// Which nodes to highlight while projecting.
#[derive(Clone, Copy, Debug, Default)]
pub struct Highlight<'a> {
    /// The selected node, if any.
    pub selected: Option<NodeId>,
    /// The node whose label is being edited, with its current draft.
    pub editing: Option<(NodeId, &'a str)>,
}

/// An inline label editor drawn in place of a node's label.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineEditor {
    /// Uncommitted text shown in the editor.
    pub draft: String,
    /// Editor rectangle in canvas coordinates.
    pub rect: Rect,
}

/// A node circle and its label, in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeMark {
    /// The node this mark draws.
    pub node: NodeId,
    /// The node circle.
    pub circle: Circle,
    /// Committed label.
    pub label: String,
    /// Label baseline anchor (text is centred horizontally on it).
    pub label_anchor: Point,
    /// Clickable label box.
    pub label_bounds: Rect,
    /// Present while the label is being edited; replaces the label text.
    pub editor: Option<InlineEditor>,
    /// Selection and editing state.
    pub flags: MarkFlags,
}

impl NodeMark {
    /// Centre of the node circle.
    pub fn center(&self) -> Point {
        self.circle.center
    }

    /// Whether this node is the current selection.
    pub fn is_selected(&self) -> bool {
        self.flags.contains(MarkFlags::SELECTED)
    }

    /// Text the boundary shows: the draft while editing, else the label.
    pub fn display_text(&self) -> &str {
        match &self.editor {
            Some(editor) => &editor.draft,
            None => &self.label,
        }
    }
}

/// Right-angle connector from a parent to one of its children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Elbow {
    /// Parent end.
    pub parent: NodeId,
    /// Child end.
    pub child: NodeId,
    /// From the parent centre, at parent height, to the child's x.
    pub horizontal: Line,
    /// From the corner down to the child centre.
    pub vertical: Line,
}

impl Elbow {
    fn between(parent: NodeId, from: Point, child: NodeId, to: Point) -> Self {
        let corner = Point::new(to.x, from.y);
        Self {
            parent,
            child,
            horizontal: Line::new(from, corner),
            vertical: Line::new(corner, to),
        }
    }
}

/// One drawable item.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A node circle with its label.
    Node(NodeMark),
    /// The connector leading into a child.
    Connector(Elbow),
}

/// A flat, ordered display list for one state of the tree.
///
/// Order is pre-order: a node's mark, then for each child in insertion order
/// the child's connector followed by the child's own subtree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Pan applied to every stored position.
    pub offset: Vec2,
    /// [`Tree::epoch`] of the tree this scene was projected from.
    pub epoch: u64,
    /// Draw-ordered primitives.
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Node marks in draw order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeMark> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Node(mark) => Some(mark),
            Primitive::Connector(_) => None,
        })
    }

    /// Connectors in draw order.
    pub fn connectors(&self) -> impl Iterator<Item = &Elbow> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Connector(elbow) => Some(elbow),
            Primitive::Node(_) => None,
        })
    }

    /// The mark drawing `node`.
    pub fn node(&self, node: NodeId) -> Option<&NodeMark> {
        self.nodes().find(|mark| mark.node == node)
    }

    /// Nodes currently marked selected. At most one.
    pub fn selected(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes()
            .filter(|mark| mark.is_selected())
            .map(|mark| mark.node)
    }
}

/// Project `tree` into a [`Scene`].
///
/// The whole tree is walked every time; there is no incremental update. The
/// root is pinned at [`SceneStyle::anchor`] and every other node keeps its
/// stored offset from the root.
pub fn project(tree: &Tree, highlight: Highlight<'_>, style: &SceneStyle) -> Scene {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("project_scene", nodes = tree.len(), epoch = tree.epoch())
        .entered();

    let root = tree.root();
    let offset = style.anchor - tree.position(root).unwrap_or(style.anchor);
    let mut primitives = Vec::with_capacity(tree.len() * 2);

    // Each entry carries the canvas position of the node's parent, so the
    // connector can be emitted right before the node it leads into.
    let mut stack = vec![(root, None::<(NodeId, Point)>)];
    while let Some((id, parent)) = stack.pop() {
        let Some(position) = tree.position(id) else {
            continue;
        };
        let center = position + offset;
        if let Some((parent_id, parent_center)) = parent {
            primitives.push(Primitive::Connector(Elbow::between(
                parent_id,
                parent_center,
                id,
                center,
            )));
        }
        primitives.push(Primitive::Node(mark(tree, id, center, highlight, style)));

        // Reversed so children pop in insertion order.
        for &child in tree.children_of(id).iter().rev() {
            stack.push((child, Some((id, center))));
        }
    }

    Scene {
        offset,
        epoch: tree.epoch(),
        primitives,
    }
}

fn mark(
    tree: &Tree,
    id: NodeId,
    center: Point,
    highlight: Highlight<'_>,
    style: &SceneStyle,
) -> NodeMark {
    let mut flags = MarkFlags::empty();
    if highlight.selected == Some(id) {
        flags |= MarkFlags::SELECTED;
    }
    let editor = match highlight.editing {
        Some((editing, draft)) if editing == id => {
            flags |= MarkFlags::EDITING;
            Some(InlineEditor {
                draft: draft.into(),
                rect: style.editor_rect(center),
            })
        }
        _ => None,
    };
    NodeMark {
        node: id,
        circle: Circle::new(center, style.node_radius),
        label: tree.label(id).unwrap_or_default().into(),
        label_anchor: style.label_anchor(center),
        label_bounds: style.label_bounds(center),
        editor,
        flags,
    }
}
