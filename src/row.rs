// Copyright 2021 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! A layout that arranges its children left to right.

use tracing::instrument;

use crate::kurbo::{Point, Size};
use crate::{
    AlignmentLine, BoxConstraints, LayoutElement, LayoutError, Measured, Placement, StackLayout,
};

/// The alignment of the children on the vertical axis of a [`Row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossAxisAlignment {
    /// Top-aligned.
    Start,
    /// Centered in the row's height.
    Center,
    /// Bottom-aligned.
    End,
}

impl CrossAxisAlignment {
    /// The offset for a child of `val` height in a row of `available` height.
    fn align(self, val: f64, available: f64) -> f64 {
        match self {
            CrossAxisAlignment::Start => 0.0,
            CrossAxisAlignment::Center => (available - val) / 2.0,
            CrossAxisAlignment::End => available - val,
        }
    }
}

impl Default for CrossAxisAlignment {
    fn default() -> Self {
        CrossAxisAlignment::Start
    }
}

/// A horizontal collection of elements.
pub struct Row {
    children: Vec<Box<dyn LayoutElement>>,
    cross_alignment: CrossAxisAlignment,
    spacing: f64,
}

impl Row {
    pub fn new() -> Row {
        Row {
            children: Vec::new(),
            cross_alignment: CrossAxisAlignment::default(),
            spacing: 0.0,
        }
    }

    /// Builder-style method for specifying the childrens' [`CrossAxisAlignment`].
    pub fn cross_axis_alignment(mut self, alignment: CrossAxisAlignment) -> Self {
        self.cross_alignment = alignment;
        self
    }

    /// Builder-style method to put `spacing` between consecutive children.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Builder-style variant of `add_child`.
    pub fn with_child(mut self, child: impl LayoutElement + 'static) -> Self {
        self.add_child(child);
        self
    }

    pub fn add_child(&mut self, child: impl LayoutElement + 'static) {
        self.children.push(Box::new(child));
    }

    /// Measure every child with an unbounded width, then place them.
    #[instrument(name = "Row", level = "trace", skip(self))]
    pub fn layout(&self, bc: &BoxConstraints) -> Result<StackLayout, LayoutError> {
        bc.debug_check("Row");
        let loosened_bc = bc.loosen();
        let child_bc = loosened_bc.with_width(0.0, f64::INFINITY);

        let measured = self
            .children
            .iter()
            .map(|child| child.measure(&child_bc))
            .collect::<Result<Vec<_>, _>>()?;

        let gaps = measured.len().saturating_sub(1) as f64 * self.spacing;
        let major: f64 = measured.iter().map(Measured::width).sum::<f64>() + gaps;
        let minor = measured.iter().map(Measured::height).fold(0.0, f64::max);

        let my_size = bc.constrain(Size::new(major, minor));
        if major > my_size.width {
            tracing::debug!("row children don't fit: {} > {}", major, my_size.width);
        }

        let mut layout = StackLayout::new(my_size);
        let mut x = 0.0;
        for (index, child) in measured.into_iter().enumerate() {
            let y = self.cross_alignment.align(child.height(), my_size.height);
            let width = child.width();
            layout
                .placements
                .push(Placement::new(index, Point::new(x, y), child));
            x += width + self.spacing;
        }
        Ok(layout)
    }
}

impl Default for Row {
    fn default() -> Self {
        Row::new()
    }
}

impl LayoutElement for Row {
    fn measure(&self, bc: &BoxConstraints) -> Result<Measured, LayoutError> {
        let layout = self.layout(bc)?;
        let mut measured = Measured::new(layout.size);
        for line in &[AlignmentLine::FirstBaseline, AlignmentLine::LastBaseline] {
            if let Some(pos) = layout.merged_line(*line) {
                measured = measured.with_line(*line, pos);
            }
        }
        Ok(measured)
    }

    fn name(&self) -> &'static str {
        "Row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fixed;
    use test_log::test;

    #[test]
    fn center_vertically() {
        let row = Row::new()
            .cross_axis_alignment(CrossAxisAlignment::Center)
            .with_spacing(8.)
            .with_child(Fixed::new(48., 48.))
            .with_child(Fixed::new(100., 20.).with_baseline(15.));
        let bc = BoxConstraints::new(Size::ZERO, Size::new(300., 1000.));
        let layout = row.layout(&bc).unwrap();
        assert_eq!(layout.size, Size::new(156., 48.));
        assert_eq!(
            layout.origins(),
            vec![Point::new(0., 0.), Point::new(56., 14.)]
        );

        let m = row.measure(&bc).unwrap();
        assert_eq!(m.get(AlignmentLine::FirstBaseline), Some(29.));
    }

    #[test]
    fn baselines_merge_across_children() {
        let row = Row::new()
            .with_child(Fixed::new(48., 48.))
            .with_child(Fixed::new(20., 30.).with_baseline(25.))
            .with_child(Fixed::new(20., 30.).with_baseline(12.));
        let m = row.measure(&BoxConstraints::UNBOUNDED).unwrap();
        assert_eq!(m.get(AlignmentLine::FirstBaseline), Some(12.));
        assert_eq!(m.get(AlignmentLine::LastBaseline), Some(25.));
    }

    #[test]
    fn end_alignment_with_min_height() {
        let row = Row::new()
            .cross_axis_alignment(CrossAxisAlignment::End)
            .with_child(Fixed::new(10., 10.));
        let bc = BoxConstraints::new(Size::new(0., 30.), Size::new(300., 1000.));
        let layout = row.layout(&bc).unwrap();
        assert_eq!(layout.size, Size::new(10., 30.));
        assert_eq!(layout.placements[0].origin, Point::new(0., 20.));
    }

    #[test]
    fn empty_row() {
        let layout = Row::new().layout(&BoxConstraints::UNBOUNDED).unwrap();
        assert_eq!(layout.size, Size::ZERO);
    }
}
