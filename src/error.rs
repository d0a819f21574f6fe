// Copyright 2019 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors raised during a layout pass.

use std::fmt;

use crate::kurbo::Size;
use crate::AlignmentLine;

/// Layout errors.
///
/// None of these are recoverable inside the layout pass: measuring is pure,
/// so retrying with the same inputs reproduces the same failure.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The constraints are malformed: a negative or infinite minimum, or a
    /// minimum larger than its maximum.
    BadConstraints { min: Size, max: Size },
    /// A layout that needs a bounded axis was given an infinite maximum.
    Unbounded { name: &'static str },
    /// A measured child does not expose an alignment line its parent requires.
    MissingAlignmentLine {
        line: AlignmentLine,
        element: &'static str,
    },
    /// Stacked content does not fit and the overflow policy forbids it.
    Overflow { content: f64, available: f64 },
}

impl LayoutError {
    /// Whether this error is a caller contract violation about the
    /// constraints themselves, rather than about the children.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            LayoutError::BadConstraints { .. } | LayoutError::Unbounded { .. }
        )
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            LayoutError::BadConstraints { min, max } => write!(
                f,
                "Bad constraints: min {:?} is not within max {:?}.",
                min, max
            ),
            LayoutError::Unbounded { name } => {
                write!(f, "{} requires a bounded maximum height.", name)
            }
            LayoutError::MissingAlignmentLine { line, element } => {
                write!(f, "{} does not expose a {} alignment line.", element, line)
            }
            LayoutError::Overflow { content, available } => write!(
                f,
                "Content extends to {} but only {} is available.",
                content, available
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
