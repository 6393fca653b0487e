// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing metrics shared by the projector and hit testing.

use kurbo::{Point, Rect, Size};

/// Canvas metrics used when projecting a tree.
///
/// The defaults reproduce the editor's classic canvas: the root pinned at
/// (300, 100), radius-20 nodes, labels 25 units above the node centre, and a
/// 100×40 inline editor whose top edge sits 30 units above the centre.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneStyle {
    /// Where the root is drawn, whatever its stored position.
    pub anchor: Point,
    /// Radius of every node circle.
    pub node_radius: f64,
    /// Distance from a node centre up to its label baseline.
    pub label_rise: f64,
    /// Clickable box around a label, centred horizontally on the anchor and
    /// resting on the baseline.
    pub label_size: Size,
    /// Size of the inline label editor.
    pub editor_size: Size,
    /// Distance from a node centre up to the top edge of its inline editor.
    pub editor_rise: f64,
}

impl SceneStyle {
    /// Label baseline anchor for a node drawn at `center`.
    pub fn label_anchor(&self, center: Point) -> Point {
        Point::new(center.x, center.y - self.label_rise)
    }

    /// Clickable label box for a node drawn at `center`.
    pub fn label_bounds(&self, center: Point) -> Rect {
        let anchor = self.label_anchor(center);
        Rect::from_center_size(
            Point::new(anchor.x, anchor.y - self.label_size.height / 2.0),
            self.label_size,
        )
    }

    /// Inline editor rectangle for a node drawn at `center`.
    pub fn editor_rect(&self, center: Point) -> Rect {
        Rect::from_origin_size(
            Point::new(
                center.x - self.editor_size.width / 2.0,
                center.y - self.editor_rise,
            ),
            self.editor_size,
        )
    }
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            anchor: Point::new(300.0, 100.0),
            node_radius: 20.0,
            label_rise: 25.0,
            label_size: Size::new(100.0, 20.0),
            editor_size: Size::new(100.0, 40.0),
            editor_rise: 30.0,
        }
    }
}
