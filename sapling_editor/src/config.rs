// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Startup configuration.

use alloc::string::String;
use kurbo::Point;
use sapling_scene::SceneStyle;
use sapling_tree::BranchRule;

/// Startup configuration of an [`Editor`](crate::Editor).
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    /// Label of the root, also the initial pending label.
    pub root_label: String,
    /// Stored position of the root.
    pub root_position: Point,
    /// Placement rule for new branches.
    pub rule: BranchRule,
    /// Canvas metrics.
    pub style: SceneStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            root_label: "Root".into(),
            root_position: Point::new(300.0, 100.0),
            rule: BranchRule::CLASSIC,
            style: SceneStyle::default(),
        }
    }
}
