// Copyright 2021 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! The output of a layout pass.

use crate::kurbo::{Point, Rect, Size};
use crate::{AlignmentLine, Measured};

/// Where one child goes, relative to its parent's origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// The child's position in the input sequence (or item index, for lazy
    /// lists).
    pub index: usize,
    /// The child's top-left corner.
    pub origin: Point,
    /// The child's measurement, kept so parents can read its size and lines.
    pub measured: Measured,
}

impl Placement {
    pub fn new(index: usize, origin: Point, measured: Measured) -> Placement {
        Placement {
            index,
            origin,
            measured,
        }
    }

    /// The child's layout rect in parent coordinates.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.measured.size())
    }

    /// The position of `line` in parent coordinates, if the child exposes it.
    pub fn line(&self, line: AlignmentLine) -> Option<f64> {
        self.measured.get(line).map(|pos| pos + self.origin.y)
    }
}

/// The result of laying out several children.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayout {
    /// The size reported to the parent.
    pub size: Size,
    /// One entry per placed child, in placement order.
    pub placements: Vec<Placement>,
}

impl StackLayout {
    pub fn new(size: Size) -> StackLayout {
        StackLayout {
            size,
            placements: Vec::new(),
        }
    }

    /// Invoke `f` with each child's index and origin, in placement order.
    pub fn place_with(&self, mut f: impl FnMut(usize, Point)) {
        for placement in &self.placements {
            f(placement.index, placement.origin);
        }
    }

    /// The origins alone, in placement order.
    pub fn origins(&self) -> Vec<Point> {
        self.placements.iter().map(|p| p.origin).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// `line` merged over every placed child that has it, in this layout's
    /// coordinates.
    ///
    /// First baselines merge to the topmost one and last baselines to the
    /// bottommost one.
    pub fn merged_line(&self, line: AlignmentLine) -> Option<f64> {
        let mut positions = self.placements.iter().filter_map(|p| p.line(line));
        let first = positions.next()?;
        Some(match line {
            AlignmentLine::FirstBaseline => positions.fold(first, f64::min),
            AlignmentLine::LastBaseline => positions.fold(first, f64::max),
        })
    }
}

/// The result of laying out exactly one child.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleLayout {
    pub size: Size,
    pub placement: Placement,
}

impl SingleLayout {
    /// The child's lines, in this layout's coordinates.
    pub fn child_line(&self, line: AlignmentLine) -> Option<f64> {
        self.placement.line(line)
    }
}
