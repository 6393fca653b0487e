// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted editing session, driven the way a UI boundary would drive it.
//!
//! The boundary only sees raw pointer positions and form controls. Pointer
//! clicks go through [`Editor::click_at`], which hit tests the current scene;
//! buttons and text fields become [`Intent`]s.
//!
//! Run:
//! - `cargo run -p sapling_demos --example scripted_session`

use kurbo::Point;
use sapling_editor::{Editor, Intent, Response};
use sapling_scene::{Primitive, Scene};
use sapling_tree::Side;

/// Pointer slop in canvas units.
const TOLERANCE: f64 = 2.0;

fn main() {
    let mut editor = Editor::new();
    let root_center = editor.style().anchor;

    step(&mut editor, "press Submit Label", |e| {
        e.handle(Intent::SubmitLabelClicked)
    });
    step(&mut editor, "add a branch before selecting", |e| {
        e.handle(Intent::AddBranchClicked(Side::Left))
    });
    step(&mut editor, "click the root circle", |e| {
        e.click_at(root_center, TOLERANCE)
    });
    step(&mut editor, "press Add Left Branch", |e| {
        e.handle(Intent::AddBranchClicked(Side::Left))
    });
    step(&mut editor, "press Add Right Branch", |e| {
        e.handle(Intent::AddBranchClicked(Side::Right))
    });
    step(&mut editor, "click the left child", |e| {
        e.click_at(Point::new(210.0, 200.0), TOLERANCE)
    });
    step(&mut editor, "type \"Leaf\" and submit", |e| {
        e.handle(Intent::PendingLabelChanged("Leaf".into()));
        e.handle(Intent::SubmitLabelClicked)
    });
    step(&mut editor, "click the right child's label", |e| {
        e.click_at(Point::new(390.0, 165.0), TOLERANCE)
    });
    let right = editor.editing().map(|(node, _)| node);
    step(&mut editor, "type \"Ignored\" into the inline editor", |e| {
        match right {
            Some(node) => e.handle(Intent::LabelDraftChanged(node, "Ignored".into())),
            None => Response::none(),
        }
    });
    step(&mut editor, "click empty canvas", |e| {
        e.click_at(Point::new(20.0, 20.0), TOLERANCE)
    });
}

fn step(editor: &mut Editor, what: &str, f: impl FnOnce(&mut Editor) -> Response) {
    let response = f(editor);
    println!("\n== {what} ==");
    println!("changes: {:?}", response.changes);
    if let Some(warning) = response.warning {
        println!("warning: {warning}");
    }
    match editor.view().scene {
        Some(scene) if response.changes.needs_redraw() => print_scene(scene),
        Some(_) => {}
        None => println!("(canvas hidden)"),
    }
}

fn print_scene(scene: &Scene) {
    for primitive in &scene.primitives {
        match primitive {
            Primitive::Node(mark) => println!(
                "  node {:>2} @ ({:>5.1}, {:>5.1})  {:<10} {:?}",
                mark.node.index(),
                mark.center().x,
                mark.center().y,
                mark.display_text(),
                mark.flags,
            ),
            Primitive::Connector(elbow) => println!(
                "  edge {:>2} -> {:<2}   ({:.0}, {:.0}) -> ({:.0}, {:.0}) -> ({:.0}, {:.0})",
                elbow.parent.index(),
                elbow.child.index(),
                elbow.horizontal.p0.x,
                elbow.horizontal.p0.y,
                elbow.horizontal.p1.x,
                elbow.horizontal.p1.y,
                elbow.vertical.p1.x,
                elbow.vertical.p1.y,
            ),
        }
    }
}
