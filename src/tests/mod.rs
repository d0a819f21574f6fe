// Copyright 2020 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Additional unit tests that cross file or module boundaries.

mod layout_tests;

use crate::kurbo::Size;
use crate::*;

/// The constraints most tests lay out against.
pub(crate) fn screen() -> BoxConstraints {
    BoxConstraints::new(Size::ZERO, Size::new(300., 1000.))
}

/// Fixed-size children of the given heights.
pub(crate) fn blocks(heights: &[f64]) -> Vec<Fixed> {
    heights.iter().map(|h| Fixed::new(120., *h)).collect()
}
