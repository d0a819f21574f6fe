// Copyright 2018 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! An element that just adds padding during layout.

use crate::kurbo::{Insets, Point, Size};
use crate::{
    BoxConstraints, Density, Dp, LayoutElement, LayoutError, Measured, Placement, SingleLayout,
};

/// An element that adds padding around its child.
pub struct Padding<E> {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    child: E,
}

impl<E: LayoutElement> Padding<E> {
    /// Create a new element with the specified padding. This can either be an instance
    /// of [`kurbo::Insets`], a f64 for uniform padding, a 2-tuple for axis-uniform padding
    /// or 4-tuple with (left, top, right, bottom) values.
    ///
    /// Unlike [`FirstBaselineToTop`], the top inset is measured from the top
    /// of the child's bounding box, not from its baseline.
    ///
    /// [`FirstBaselineToTop`]: crate::FirstBaselineToTop
    pub fn new(insets: impl Into<Insets>, child: E) -> Padding<E> {
        let insets = insets.into();
        Padding {
            left: insets.x0,
            right: insets.x1,
            top: insets.y0,
            bottom: insets.y1,
            child,
        }
    }

    /// Uniform padding given in `Dp`.
    pub fn uniform_dp(padding: Dp, density: Density, child: E) -> Padding<E> {
        Padding::new(density.round_to_px(padding), child)
    }

    pub fn child(&self) -> &E {
        &self.child
    }

    pub fn insets(&self) -> Insets {
        Insets::new(self.left, self.top, self.right, self.bottom)
    }

    /// Lay the child out inside the insets.
    pub fn layout(&self, bc: &BoxConstraints) -> Result<SingleLayout, LayoutError> {
        bc.debug_check("Padding");

        let hpad = self.left + self.right;
        let vpad = self.top + self.bottom;

        let child_bc = bc.shrink((hpad, vpad));
        let measured = self.child.measure(&child_bc)?;
        let size = measured.size();
        let origin = Point::new(self.left, self.top);

        Ok(SingleLayout {
            size: Size::new(size.width + hpad, size.height + vpad),
            placement: Placement::new(0, origin, measured),
        })
    }
}

impl<E: LayoutElement> LayoutElement for Padding<E> {
    fn measure(&self, bc: &BoxConstraints) -> Result<Measured, LayoutError> {
        let layout = self.layout(bc)?;
        let lines = layout.placement.measured.lines().shifted(self.top);
        Ok(Measured::new(layout.size).with_lines(lines))
    }

    fn name(&self) -> &'static str {
        "Padding"
    }
}
