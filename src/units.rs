// Copyright 2021 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Density-independent lengths.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A density-independent length.
///
/// One `Dp` is one pixel on a 160 dpi screen. Convert to layout units with
/// [`Density::round_to_px`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f64);

impl Dp {
    pub const ZERO: Dp = Dp(0.);

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.dp", self.0)
    }
}

impl Add for Dp {
    type Output = Dp;
    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;
    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f64> for Dp {
    type Output = Dp;
    fn mul(self, rhs: f64) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl Neg for Dp {
    type Output = Dp;
    fn neg(self) -> Dp {
        Dp(-self.0)
    }
}

/// The ratio between layout units and [`Dp`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    scale: f64,
}

impl Density {
    /// A density of 1.0: one `Dp` is one layout unit.
    pub const IDENTITY: Density = Density { scale: 1.0 };

    /// Create a density. Non-finite or non-positive scales fall back to 1.0.
    pub fn new(scale: f64) -> Density {
        if scale.is_finite() && scale > 0. {
            Density { scale }
        } else {
            tracing::warn!("Invalid density {}, using 1.0", scale);
            Density::IDENTITY
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Convert to layout units without rounding.
    pub fn to_px(&self, dp: Dp) -> f64 {
        dp.0 * self.scale
    }

    /// Convert to whole layout units, rounding half away from zero.
    pub fn round_to_px(&self, dp: Dp) -> f64 {
        self.to_px(dp).round()
    }

    pub fn to_dp(&self, px: f64) -> Dp {
        Dp(px / self.scale)
    }
}

impl Default for Density {
    fn default() -> Self {
        Density::IDENTITY
    }
}
