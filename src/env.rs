// Copyright 2019 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Configuration shared by the layouts of a pass.

use crate::{Density, Dp, FirstBaselineToTop, Overflow, VerticalStack, DEFAULT_INITIAL_OFFSET};

/// Values that tune layout, passed explicitly to whatever builds the tree.
///
/// There is no global instance: build one, adjust it with the builder
/// methods, and hand it (or a reference) to the code assembling elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEnv {
    density: Density,
    stack_offset: f64,
    overflow: Overflow,
}

impl LayoutEnv {
    pub fn new() -> LayoutEnv {
        LayoutEnv {
            density: Density::IDENTITY,
            stack_offset: DEFAULT_INITIAL_OFFSET,
            overflow: Overflow::Visible,
        }
    }

    /// Builder-style method to set the [`Density`].
    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Builder-style method to set where [`VerticalStack`]s start placing.
    pub fn with_stack_offset(mut self, offset: f64) -> Self {
        self.stack_offset = offset;
        self
    }

    /// Builder-style method to set the [`Overflow`] policy of stacks.
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn density(&self) -> Density {
        self.density
    }

    /// Convert `dp` to whole layout units at this density.
    pub fn px(&self, dp: Dp) -> f64 {
        self.density.round_to_px(dp)
    }

    /// A [`VerticalStack`] configured from this environment.
    pub fn vertical_stack(&self) -> VerticalStack {
        VerticalStack::new()
            .with_initial_offset(self.stack_offset)
            .with_overflow(self.overflow)
    }

    /// A [`FirstBaselineToTop`] with its target given in `Dp`.
    pub fn first_baseline_to_top(&self, target: Dp) -> FirstBaselineToTop {
        FirstBaselineToTop::from_dp(target, self.density)
    }
}

impl Default for LayoutEnv {
    fn default() -> Self {
        LayoutEnv::new()
    }
}
