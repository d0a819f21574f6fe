// Copyright 2019 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! The constraints passed down a layout pass.

use crate::kurbo::Size;
use crate::LayoutError;

/// Constraints for layout.
///
/// The layout strategy is strongly inspired by Flutter and by Compose's
/// `Constraints`: a parent hands each child a minimum and maximum size, and
/// the child's [`measure`] picks a size within those bounds.
///
/// The constraints are always [rounded away from zero] to integers
/// to enable pixel perfect layout.
///
/// [`measure`]: crate::LayoutElement::measure
/// [rounded away from zero]: kurbo::Size::expand
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxConstraints {
    min: Size,
    max: Size,
}

impl BoxConstraints {
    /// An unbounded box constraints object.
    ///
    /// Can be satisfied by any nonnegative size.
    pub const UNBOUNDED: BoxConstraints = BoxConstraints {
        min: Size::ZERO,
        max: Size::new(f64::INFINITY, f64::INFINITY),
    };

    /// Create a new box constraints object.
    ///
    /// The sizes are not validated; see [`try_new`] for a checked
    /// constructor and [`debug_check`] for a logging one.
    ///
    /// [`try_new`]: BoxConstraints::try_new
    /// [`debug_check`]: BoxConstraints::debug_check
    pub fn new(min: Size, max: Size) -> BoxConstraints {
        BoxConstraints {
            min: min.expand(),
            max: max.expand(),
        }
    }

    /// Create a box constraints object, rejecting malformed bounds.
    ///
    /// Returns [`LayoutError::BadConstraints`] if either minimum is negative,
    /// infinite or NaN, or if a minimum exceeds its maximum.
    pub fn try_new(min: Size, max: Size) -> Result<BoxConstraints, LayoutError> {
        // checked before rounding, which could make min and max equal
        BoxConstraints { min, max }.validate()?;
        Ok(BoxConstraints::new(min, max))
    }

    /// Create a "tight" box constraints object.
    ///
    /// A "tight" constraint can only be satisfied by a single size.
    pub fn tight(size: Size) -> BoxConstraints {
        let size = size.expand();
        BoxConstraints {
            min: size,
            max: size,
        }
    }

    /// Create a "loose" version of the constraints.
    ///
    /// Make a version with zero minimum size, but the same maximum size.
    pub fn loosen(&self) -> BoxConstraints {
        BoxConstraints {
            min: Size::ZERO,
            max: self.max,
        }
    }

    /// Clamp a given size so that it fits within the constraints.
    ///
    /// The given size is also rounded away from zero.
    pub fn constrain(&self, size: impl Into<Size>) -> Size {
        size.into().expand().clamp(self.min, self.max)
    }

    /// Returns the max size of these constraints.
    pub fn max(&self) -> Size {
        self.max
    }

    /// Returns the min size of these constraints.
    pub fn min(&self) -> Size {
        self.min
    }

    /// Whether there is an upper bound on the width.
    pub fn is_width_bounded(&self) -> bool {
        self.max.width.is_finite()
    }

    /// Whether there is an upper bound on the height.
    pub fn is_height_bounded(&self) -> bool {
        self.max.height.is_finite()
    }

    /// Returns the same constraints with the height bounds replaced.
    pub fn with_height(&self, min_height: f64, max_height: f64) -> BoxConstraints {
        BoxConstraints::new(
            Size::new(self.min.width, min_height),
            Size::new(self.max.width, max_height),
        )
    }

    /// Returns the same constraints with the width bounds replaced.
    pub fn with_width(&self, min_width: f64, max_width: f64) -> BoxConstraints {
        BoxConstraints::new(
            Size::new(min_width, self.min.height),
            Size::new(max_width, self.max.height),
        )
    }

    /// Check that these constraints are well formed.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let ok = 0.0 <= self.min.width
            && self.min.width <= self.max.width
            && 0.0 <= self.min.height
            && self.min.height <= self.max.height
            && self.min.width.is_finite()
            && self.min.height.is_finite();
        if ok {
            Ok(())
        } else {
            Err(LayoutError::BadConstraints {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Check to see if these constraints are legit.
    ///
    /// Logs a warning if BoxConstraints are invalid.
    pub fn debug_check(&self, name: &str) {
        if self.validate().is_err() {
            tracing::warn!("Bad BoxConstraints passed to {}:", name);
            tracing::warn!("{:?}", self);
        }

        if self.min.width.is_infinite() {
            tracing::warn!("Infinite minimum width constraint passed to {}:", name);
        }

        if self.min.height.is_infinite() {
            tracing::warn!("Infinite minimum height constraint passed to {}:", name);
        }
    }

    /// Shrink min and max constraints by size.
    ///
    /// Neither bound goes below zero.
    pub fn shrink(&self, diff: impl Into<Size>) -> BoxConstraints {
        let diff = diff.into().expand();
        let min = Size::new(
            (self.min().width - diff.width).max(0.),
            (self.min().height - diff.height).max(0.),
        );
        let max = Size::new(
            (self.max().width - diff.width).max(0.),
            (self.max().height - diff.height).max(0.),
        );

        BoxConstraints::new(min, max)
    }

    /// Test whether these constraints contain the given `Size`.
    pub fn contains(&self, size: impl Into<Size>) -> bool {
        let size = size.into();
        (self.min.width <= size.width && size.width <= self.max.width)
            && (self.min.height <= size.height && size.height <= self.max.height)
    }
}
