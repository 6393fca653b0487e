// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where children land as the level grows.
//!
//! Branch length shrinks by ten per level, so from level 5 on it is zero or
//! negative and left children start drifting to the right of where a
//! shallower sibling would sit. The editor only ever uses level 1; deeper
//! levels are reachable through [`Editor::add_child`].
//!
//! Run:
//! - `cargo run -p sapling_demos --example deep_levels`

use sapling_editor::{Editor, Intent};
use sapling_tree::{Level, Side};

fn main() {
    println!("level  branch   left child        right child");
    let mut editor = Editor::new();
    let root = editor.tree().root();
    editor.handle(Intent::NodeClicked(root));

    let mut level = Level::ONE;
    for _ in 0..7 {
        let placed = [Side::Left, Side::Right].map(|side| {
            editor
                .add_child(root, side, level)
                .ok()
                .and_then(|id| editor.tree().position(id))
        });
        let [Some(left), Some(right)] = placed else {
            eprintln!("could not grow level {}", level.get());
            return;
        };
        println!(
            "{:>5}  {:>6.1}   ({:>6.1}, {:>5.1})   ({:>6.1}, {:>5.1})",
            level.get(),
            editor.tree().rule().branch_length(level),
            left.x,
            left.y,
            right.x,
            right.y,
        );
        level = level.deeper();
    }
}
