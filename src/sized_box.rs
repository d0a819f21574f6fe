// Copyright 2019 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! An element with an optional fixed width and height.

use crate::kurbo::Size;
use crate::{BoxConstraints, Density, Dp, LayoutElement, LayoutError, Measured};

/// An element that forces its child to a given width and/or height.
///
/// Without a child it measures as an empty box of that size.
pub struct SizedBox<E> {
    child: Option<E>,
    width: Option<f64>,
    height: Option<f64>,
}

impl<E> SizedBox<E> {
    pub fn new(child: E) -> Self {
        SizedBox {
            child: Some(child),
            width: None,
            height: None,
        }
    }

    /// Set container's width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set container's height.
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set both dimensions to the same `Dp` value.
    pub fn size_dp(mut self, size: Dp, density: Density) -> Self {
        let px = density.round_to_px(size);
        self.width = Some(px);
        self.height = Some(px);
        self
    }

    /// Expand the container on the x-axis.
    ///
    /// This will force the child to have maximum width.
    pub fn expand_width(mut self) -> Self {
        self.width = Some(f64::INFINITY);
        self
    }

    /// Expand the container on the y-axis.
    ///
    /// This will force the child to have maximum height.
    pub fn expand_height(mut self) -> Self {
        self.height = Some(f64::INFINITY);
        self
    }

    fn child_constraints(&self, bc: &BoxConstraints) -> BoxConstraints {
        // if we don't have a width/height, we don't change that axis.
        // if we have a width/height, we clamp it on that axis.
        let (min_width, max_width) = match self.width {
            Some(width) => {
                let w = width.max(bc.min().width).min(bc.max().width);
                (w, w)
            }
            None => (bc.min().width, bc.max().width),
        };

        let (min_height, max_height) = match self.height {
            Some(height) => {
                let h = height.max(bc.min().height).min(bc.max().height);
                (h, h)
            }
            None => (bc.min().height, bc.max().height),
        };

        BoxConstraints::new(
            Size::new(min_width, min_height),
            Size::new(max_width, max_height),
        )
    }
}

impl SizedBox<()> {
    /// A box with no child.
    pub fn empty() -> SizedBox<()> {
        SizedBox {
            child: None,
            width: None,
            height: None,
        }
    }
}

impl<E: LayoutElement> LayoutElement for SizedBox<E> {
    fn measure(&self, bc: &BoxConstraints) -> Result<Measured, LayoutError> {
        bc.debug_check("SizedBox");
        let child_bc = self.child_constraints(bc);
        let measured = match &self.child {
            Some(child) => {
                let m = child.measure(&child_bc)?;
                Measured::new(bc.constrain(m.size())).with_lines(m.lines().clone())
            }
            None => Measured::new(bc.constrain((
                self.width.unwrap_or(0.0),
                self.height.unwrap_or(0.0),
            ))),
        };

        if measured.width().is_infinite() {
            tracing::warn!("SizedBox is returning an infinite width.");
        }

        if measured.height().is_infinite() {
            tracing::warn!("SizedBox is returning an infinite height.");
        }
        Ok(measured)
    }

    fn name(&self) -> &'static str {
        "SizedBox"
    }
}
