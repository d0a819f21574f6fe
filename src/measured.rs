// Copyright 2019 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! The result of measuring an element: its size and its alignment lines.

use std::collections::BTreeMap;
use std::fmt;

use crate::kurbo::Size;

/// A named reference position inside a measured element.
///
/// Positions are measured downward from the top edge of the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlignmentLine {
    /// The baseline of the first line of text.
    FirstBaseline,
    /// The baseline of the last line of text.
    LastBaseline,
}

impl fmt::Display for AlignmentLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlignmentLine::FirstBaseline => f.write_str("first baseline"),
            AlignmentLine::LastBaseline => f.write_str("last baseline"),
        }
    }
}

/// The alignment lines an element exposes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignmentLines {
    lines: BTreeMap<AlignmentLine, f64>,
}

impl AlignmentLines {
    /// No alignment lines.
    pub fn new() -> AlignmentLines {
        AlignmentLines::default()
    }

    /// The position of `line`, if the element exposes it.
    pub fn get(&self, line: AlignmentLine) -> Option<f64> {
        self.lines.get(&line).copied()
    }

    pub fn set(&mut self, line: AlignmentLine, position: f64) {
        self.lines.insert(line, position);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns these lines as seen from a parent that places the element
    /// `dy` below its own top.
    pub fn shifted(&self, dy: f64) -> AlignmentLines {
        AlignmentLines {
            lines: self.lines.iter().map(|(k, v)| (*k, v + dy)).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AlignmentLine, f64)> + '_ {
        self.lines.iter().map(|(k, v)| (*k, *v))
    }
}

/// A measured element.
///
/// This only lives for the duration of a single layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Measured {
    size: Size,
    lines: AlignmentLines,
}

impl Measured {
    /// A measurement with no alignment lines.
    pub fn new(size: Size) -> Measured {
        Measured {
            size,
            lines: AlignmentLines::new(),
        }
    }

    /// Builder-style method to add an alignment line.
    pub fn with_line(mut self, line: AlignmentLine, position: f64) -> Measured {
        self.lines.set(line, position);
        self
    }

    /// Builder-style method to replace all alignment lines.
    pub fn with_lines(mut self, lines: AlignmentLines) -> Measured {
        self.lines = lines;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// The position of `line` from the top of this element, if exposed.
    pub fn get(&self, line: AlignmentLine) -> Option<f64> {
        self.lines.get(line)
    }

    pub fn lines(&self) -> &AlignmentLines {
        &self.lines
    }
}
