// Copyright 2021 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! A layout that stacks its children vertically from a fixed starting offset.

use tracing::instrument;

use crate::kurbo::Point;
use crate::{
    AlignmentLine, BoxConstraints, LayoutElement, LayoutError, Measured, Placement, StackLayout,
};

/// The vertical offset of the first child when none is configured.
pub const DEFAULT_INITIAL_OFFSET: f64 = 100.0;

/// What to do when stacked children extend past the maximum height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Place every child, even past the bottom edge.
    Visible,
    /// Skip children whose top edge is at or past the bottom edge.
    Clip,
    /// Fail the layout pass with [`LayoutError::Overflow`].
    Fail,
}

impl Default for Overflow {
    fn default() -> Self {
        Overflow::Visible
    }
}

/// The vertical stack layout engine.
///
/// Every child is measured with the incoming constraints, unmodified, and
/// placed at `x = 0`. The first child sits `initial_offset` below the top and
/// each following child directly below the previous one. The stack always
/// reports the maximum size of its constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalStack {
    initial_offset: f64,
    overflow: Overflow,
}

impl VerticalStack {
    pub fn new() -> VerticalStack {
        VerticalStack {
            initial_offset: DEFAULT_INITIAL_OFFSET,
            overflow: Overflow::default(),
        }
    }

    /// Builder-style method to set where the first child is placed.
    pub fn with_initial_offset(mut self, offset: f64) -> Self {
        self.initial_offset = offset;
        self
    }

    /// Builder-style method to set the [`Overflow`] policy.
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn initial_offset(&self) -> f64 {
        self.initial_offset
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Measure every child, then place them top to bottom.
    #[instrument(name = "VerticalStack", level = "trace", skip(self, children))]
    pub fn measure_and_place<E: LayoutElement>(
        &self,
        children: &[E],
        bc: &BoxConstraints,
    ) -> Result<StackLayout, LayoutError> {
        bc.validate()?;

        let measured = children
            .iter()
            .map(|child| child.measure(bc))
            .collect::<Result<Vec<_>, _>>()?;

        let my_size = bc.max();
        let mut layout = StackLayout::new(my_size);
        let mut y = self.initial_offset;
        for (index, child) in measured.into_iter().enumerate() {
            if self.overflow == Overflow::Clip && y >= my_size.height {
                tracing::trace!("clipping child {} at y={}", index, y);
                y += child.height();
                continue;
            }
            let height = child.height();
            layout
                .placements
                .push(Placement::new(index, Point::new(0., y), child));
            y += height;
        }

        if y > my_size.height {
            match self.overflow {
                Overflow::Fail => {
                    return Err(LayoutError::Overflow {
                        content: y,
                        available: my_size.height,
                    })
                }
                _ => tracing::debug!(
                    "stack children don't fit: {} > {}",
                    y,
                    my_size.height
                ),
            }
        }

        Ok(layout)
    }
}

impl Default for VerticalStack {
    fn default() -> Self {
        VerticalStack::new()
    }
}

/// A [`VerticalStack`] that owns its children, so it can be nested.
pub struct CustomColumn {
    stack: VerticalStack,
    children: Vec<Box<dyn LayoutElement>>,
}

impl CustomColumn {
    pub fn new() -> CustomColumn {
        CustomColumn::with_stack(VerticalStack::new())
    }

    pub fn with_stack(stack: VerticalStack) -> CustomColumn {
        CustomColumn {
            stack,
            children: Vec::new(),
        }
    }

    /// Builder-style variant of `add_child`.
    pub fn with_child(mut self, child: impl LayoutElement + 'static) -> Self {
        self.add_child(child);
        self
    }

    pub fn add_child(&mut self, child: impl LayoutElement + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Run the layout and return every placement.
    pub fn layout(&self, bc: &BoxConstraints) -> Result<StackLayout, LayoutError> {
        self.stack.measure_and_place(&self.children, bc)
    }
}

impl Default for CustomColumn {
    fn default() -> Self {
        CustomColumn::new()
    }
}

impl LayoutElement for CustomColumn {
    fn measure(&self, bc: &BoxConstraints) -> Result<Measured, LayoutError> {
        let layout = self.layout(bc)?;
        if !layout.size.width.is_finite() || !layout.size.height.is_finite() {
            tracing::warn!("CustomColumn is returning an infinite size.");
        }
        let mut measured = Measured::new(layout.size);
        for line in &[AlignmentLine::FirstBaseline, AlignmentLine::LastBaseline] {
            if let Some(pos) = layout.merged_line(*line) {
                measured = measured.with_line(*line, pos);
            }
        }
        Ok(measured)
    }

    fn name(&self) -> &'static str {
        "CustomColumn"
    }
}
