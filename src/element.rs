// Copyright 2018 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! The trait implemented by everything that can be measured.

use crate::kurbo::Size;
use crate::{AlignmentLine, BoxConstraints, LayoutError, Measured};

/// Something a layout can measure.
///
/// Containers hold their children as `Box<dyn LayoutElement>` and call
/// [`measure`] once per child per layout pass. Implementations must be pure:
/// measuring twice with the same constraints yields the same result.
///
/// [`measure`]: LayoutElement::measure
pub trait LayoutElement {
    /// Choose a size within `bc` and report any alignment lines.
    fn measure(&self, bc: &BoxConstraints) -> Result<Measured, LayoutError>;

    /// A short name for diagnostics.
    fn name(&self) -> &'static str {
        "LayoutElement"
    }
}

impl<E: LayoutElement + ?Sized> LayoutElement for Box<E> {
    fn measure(&self, bc: &BoxConstraints) -> Result<Measured, LayoutError> {
        (**self).measure(bc)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<E: LayoutElement + ?Sized> LayoutElement for &E {
    fn measure(&self, bc: &BoxConstraints) -> Result<Measured, LayoutError> {
        (**self).measure(bc)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// The null element, which takes up as little space as it can.
impl LayoutElement for () {
    fn measure(&self, bc: &BoxConstraints) -> Result<Measured, LayoutError> {
        Ok(Measured::new(bc.min()))
    }

    fn name(&self) -> &'static str {
        "()"
    }
}

/// An element with a preferred size and, optionally, a first baseline.
///
/// Stands in for leaf content such as icons, images and spacers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixed {
    size: Size,
    baseline: Option<f64>,
}

impl Fixed {
    pub fn new(width: f64, height: f64) -> Fixed {
        Fixed {
            size: Size::new(width, height),
            baseline: None,
        }
    }

    /// A zero-height element of the given width.
    pub fn spacer(width: f64) -> Fixed {
        Fixed::new(width, 0.)
    }

    /// Builder-style method to expose a first baseline at `position`.
    pub fn with_baseline(mut self, position: f64) -> Fixed {
        self.baseline = Some(position);
        self
    }
}

impl LayoutElement for Fixed {
    fn measure(&self, bc: &BoxConstraints) -> Result<Measured, LayoutError> {
        let size = bc.constrain(self.size);
        let mut measured = Measured::new(size);
        if let Some(baseline) = self.baseline {
            measured = measured
                .with_line(AlignmentLine::FirstBaseline, baseline)
                .with_line(AlignmentLine::LastBaseline, baseline);
        }
        Ok(measured)
    }

    fn name(&self) -> &'static str {
        "Fixed"
    }
}
