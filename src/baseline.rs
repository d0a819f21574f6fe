// Copyright 2021 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Padding measured from the top of an element to its first baseline.

use tracing::instrument;

use crate::kurbo::{Point, Size};
use crate::{
    AlignmentLine, BoxConstraints, Density, Dp, LayoutElement, LayoutError, Measured, Placement,
    SingleLayout,
};

/// Positions a child so its first baseline sits `target` below the top.
///
/// Unlike ordinary padding, which is measured from the top of the text's
/// bounding box, this lines up text of different font sizes on a grid.
///
/// The padding is `target - first_baseline` and is not clamped: a child
/// whose baseline is already lower than the target is moved up, and the
/// reported height shrinks by the same amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstBaselineToTop {
    target: f64,
}

impl FirstBaselineToTop {
    /// Create an adjuster with a target in layout units.
    pub fn new(target: f64) -> FirstBaselineToTop {
        FirstBaselineToTop { target }
    }

    /// Create an adjuster with a target in `Dp`, rounded to whole units.
    pub fn from_dp(target: Dp, density: Density) -> FirstBaselineToTop {
        FirstBaselineToTop::new(density.round_to_px(target))
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Measure `child` and place it so its first baseline lands on the target.
    ///
    /// Fails with [`LayoutError::MissingAlignmentLine`] if the child has no
    /// first baseline, and with [`LayoutError::BadConstraints`] if `bc` is
    /// malformed.
    #[instrument(name = "FirstBaselineToTop", level = "trace", skip(self, child))]
    pub fn adjust_for_baseline<E: LayoutElement + ?Sized>(
        &self,
        child: &E,
        bc: &BoxConstraints,
    ) -> Result<SingleLayout, LayoutError> {
        bc.validate()?;
        let measured = child.measure(bc)?;
        let first_baseline = measured.get(AlignmentLine::FirstBaseline).ok_or(
            LayoutError::MissingAlignmentLine {
                line: AlignmentLine::FirstBaseline,
                element: child.name(),
            },
        )?;

        let y = self.target - first_baseline;
        let size = Size::new(measured.width(), measured.height() + y);
        Ok(SingleLayout {
            size,
            placement: Placement::new(0, Point::new(0., y), measured),
        })
    }

    /// Wrap `child` so the adjustment happens whenever it is measured.
    pub fn wrap<E: LayoutElement>(self, child: E) -> BaselinePadded<E> {
        BaselinePadded {
            adjuster: self,
            child,
        }
    }
}

/// An element whose first baseline is a fixed distance from its top.
///
/// Built with [`FirstBaselineToTop::wrap`].
pub struct BaselinePadded<E> {
    adjuster: FirstBaselineToTop,
    child: E,
}

impl<E: LayoutElement> BaselinePadded<E> {
    pub fn child(&self) -> &E {
        &self.child
    }

    pub fn layout(&self, bc: &BoxConstraints) -> Result<SingleLayout, LayoutError> {
        self.adjuster.adjust_for_baseline(&self.child, bc)
    }
}

impl<E: LayoutElement> LayoutElement for BaselinePadded<E> {
    fn measure(&self, bc: &BoxConstraints) -> Result<Measured, LayoutError> {
        let layout = self.layout(bc)?;
        let lines = layout.placement.measured.lines().shifted(layout.placement.origin.y);
        Ok(Measured::new(layout.size).with_lines(lines))
    }

    fn name(&self) -> &'static str {
        "FirstBaselineToTop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fixed;
    use float_cmp::assert_approx_eq;
    use test_log::test;

    fn bc() -> BoxConstraints {
        BoxConstraints::new(Size::ZERO, Size::new(300., 1000.))
    }

    #[test]
    fn pads_up_to_baseline() {
        let child = Fixed::new(120., 50.).with_baseline(18.);
        let layout = FirstBaselineToTop::new(24.)
            .adjust_for_baseline(&child, &bc())
            .unwrap();
        assert_eq!(layout.size, Size::new(120., 56.));
        assert_eq!(layout.placement.origin, Point::new(0., 6.));
        assert_eq!(layout.child_line(AlignmentLine::FirstBaseline), Some(24.));
    }

    #[test]
    fn negative_padding_is_kept() {
        let child = Fixed::new(120., 50.).with_baseline(30.);
        let layout = FirstBaselineToTop::new(10.)
            .adjust_for_baseline(&child, &bc())
            .unwrap();
        assert_approx_eq!(f64, layout.size.height, 30., epsilon = 1e-9);
        assert_approx_eq!(f64, layout.placement.origin.y, -20., epsilon = 1e-9);
    }

    #[test]
    fn missing_baseline() {
        let child = Fixed::new(120., 50.);
        let err = FirstBaselineToTop::new(24.)
            .adjust_for_baseline(&child, &bc())
            .unwrap_err();
        assert_eq!(
            err,
            LayoutError::MissingAlignmentLine {
                line: AlignmentLine::FirstBaseline,
                element: "Fixed",
            }
        );
    }

    #[test]
    fn malformed_constraints_are_rejected() {
        let child = Fixed::new(50., 50.).with_baseline(18.);
        let bad = BoxConstraints::new(Size::new(400., 0.), Size::new(300., 1000.));
        let err = FirstBaselineToTop::new(24.)
            .adjust_for_baseline(&child, &bad)
            .unwrap_err();
        assert!(err.is_configuration_error());
        assert!(FirstBaselineToTop::new(24.).wrap(child).measure(&bad).is_err());
    }

    #[test]
    fn from_dp_rounds() {
        let adjuster = FirstBaselineToTop::from_dp(Dp(24.), Density::new(1.5));
        assert_eq!(adjuster.target(), 36.);
    }

    #[test]
    fn wrapped_reports_target_as_baseline() {
        let padded = FirstBaselineToTop::new(32.).wrap(Fixed::new(60., 20.).with_baseline(14.));
        let m = padded.measure(&bc()).unwrap();
        assert_eq!(m.size(), Size::new(60., 38.));
        assert_eq!(m.get(AlignmentLine::FirstBaseline), Some(32.));
        assert_eq!(padded.child().measure(&bc()).unwrap().height(), 20.);
    }

    #[test]
    fn idempotent() {
        let child = Fixed::new(120., 50.).with_baseline(18.);
        let adjuster = FirstBaselineToTop::new(24.);
        let a = adjuster.adjust_for_baseline(&child, &bc()).unwrap();
        let b = adjuster.adjust_for_baseline(&child, &bc()).unwrap();
        assert_eq!(a, b);
    }
}
