// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer hit testing against a projected [`Scene`].
//!
//! A rendering boundary that only reports raw pointer positions can use
//! [`Scene::hit_test`] to turn a click into a node-circle click or a
//! label click, which is all the editor distinguishes.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Circle, Point, Rect};
use sapling_tree::NodeId;

use crate::scene::{NodeMark, Scene};

/// Part of a node mark that was hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitPart {
    /// The node circle.
    Circle,
    /// The label text (not being edited).
    Label,
    /// The open inline editor.
    Editor,
}

/// Result of a scene hit test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneHit {
    /// The node whose mark was hit.
    pub node: NodeId,
    /// Which part of it.
    pub part: HitPart,
    /// Distance outside the shape; `0.0` for points inside.
    pub distance: f64,
}

impl Scene {
    /// Find the mark under `pt`, a point in canvas coordinates.
    ///
    /// Shapes are inflated by `tolerance` (inclusive). The closest candidate
    /// wins; on equal distance the mark drawn last (topmost) wins, and a
    /// node's circle wins over its own label.
    pub fn hit_test(&self, pt: Point, tolerance: f64) -> Option<SceneHit> {
        let mut best: Option<SceneHit> = None;
        for mark in self.nodes() {
            for (part, area) in parts(mark) {
                let Some(distance) = area.distance_within(pt, tolerance) else {
                    continue;
                };
                if best.is_none_or(|b| distance <= b.distance) {
                    best = Some(SceneHit {
                        node: mark.node,
                        part,
                        distance,
                    });
                }
            }
        }
        best
    }
}

#[derive(Clone, Copy)]
enum Area {
    Disk(Circle),
    Box(Rect),
}

impl Area {
    fn distance_within(self, pt: Point, tolerance: f64) -> Option<f64> {
        let distance = match self {
            Self::Disk(c) => {
                let d = (pt - c.center).hypot();
                if d <= c.radius { 0.0 } else { d - c.radius }
            }
            Self::Box(r) => {
                let dx = if pt.x < r.x0 {
                    r.x0 - pt.x
                } else if pt.x > r.x1 {
                    pt.x - r.x1
                } else {
                    0.0
                };
                let dy = if pt.y < r.y0 {
                    r.y0 - pt.y
                } else if pt.y > r.y1 {
                    pt.y - r.y1
                } else {
                    0.0
                };
                (dx * dx + dy * dy).sqrt()
            }
        };
        (distance <= tolerance.max(0.0)).then_some(distance)
    }
}

/// Hit areas of a mark, lowest priority first.
fn parts(mark: &NodeMark) -> [(HitPart, Area); 2] {
    let text = match &mark.editor {
        Some(editor) => (HitPart::Editor, Area::Box(editor.rect)),
        None => (HitPart::Label, Area::Box(mark.label_bounds)),
    };
    [text, (HitPart::Circle, Area::Disk(mark.circle))]
}
