// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-rule placement of new branches.
//!
//! A child's position is derived once, from its parent's position, the side it
//! grows towards, and its [`Level`]. There is no later layout pass: positions
//! never change after insertion.
//!
//! With the [`BranchRule::CLASSIC`] constants:
//!
//! ```text
//! branch_length = 50 - level * 10
//! dx            = side * 50 + side * branch_length
//! dy            = 50 + level * 50
//! ```
//!
//! The branch length is not clamped. From level 5 on it is zero or negative,
//! which pulls children back towards (and eventually across) the parent's
//! column.

use kurbo::{Point, Vec2};

use crate::types::{Level, Side};

/// Constants of the branch placement rule.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BranchRule {
    /// Branch length at level zero.
    pub base_length: f64,
    /// Branch length lost per level.
    pub level_decay: f64,
    /// Fixed horizontal step applied before the branch length.
    pub side_step: f64,
    /// Fixed vertical step between a parent and any child.
    pub vertical_step: f64,
    /// Extra vertical spacing gained per level.
    pub vertical_growth: f64,
}

impl BranchRule {
    /// The rule the editor has always used: 50/10/50/50/50.
    pub const CLASSIC: Self = Self {
        base_length: 50.0,
        level_decay: 10.0,
        side_step: 50.0,
        vertical_step: 50.0,
        vertical_growth: 50.0,
    };

    /// Branch length at `level`. May be zero or negative for deep levels.
    pub fn branch_length(&self, level: Level) -> f64 {
        self.base_length - f64::from(level.get()) * self.level_decay
    }

    /// Displacement from a parent to a new child.
    pub fn offset(&self, side: Side, level: Level) -> Vec2 {
        let sign = side.sign();
        let dx = sign * self.side_step + sign * self.branch_length(level);
        let dy = self.vertical_step + f64::from(level.get()) * self.vertical_growth;
        Vec2::new(dx, dy)
    }

    /// Position of a new child of a parent at `parent`.
    pub fn place(&self, parent: Point, side: Side, level: Level) -> Point {
        parent + self.offset(side, level)
    }
}

impl Default for BranchRule {
    fn default() -> Self {
        Self::CLASSIC
    }
}
