// Copyright 2021 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! A virtualized column that only builds the items it shows.

use std::ops::Range;

use tracing::instrument;

use crate::kurbo::{Point, Size};
use crate::{BoxConstraints, LayoutElement, LayoutError, Measured, Placement, StackLayout};

/// The scroll position of a [`LazyColumn`].
///
/// The position is stored as the first visible item plus how far that item
/// is scrolled past the top, so it stays meaningful when items above or
/// below change size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LazyListState {
    first_index: usize,
    first_offset: f64,
    pending_delta: f64,
    visible: Range<usize>,
}

impl LazyListState {
    pub fn new() -> LazyListState {
        LazyListState::default()
    }

    /// The index of the first item intersecting the viewport.
    pub fn first_visible_index(&self) -> usize {
        self.first_index
    }

    /// How much of the first visible item is scrolled above the viewport.
    pub fn first_visible_offset(&self) -> f64 {
        self.first_offset
    }

    /// The items built in the last layout pass.
    pub fn visible_range(&self) -> Range<usize> {
        self.visible.clone()
    }

    /// Jump so `index` is the first visible item.
    ///
    /// The index is clamped to the item count on the next layout, and the
    /// position moves back if the remaining items can't fill the viewport.
    pub fn scroll_to_item(&mut self, index: usize) {
        self.first_index = index;
        self.first_offset = 0.0;
        self.pending_delta = 0.0;
    }

    /// Scroll by `delta`, applied on the next layout pass.
    pub fn scroll_by(&mut self, delta: f64) {
        self.pending_delta += delta;
    }
}

/// A vertically scrolling list whose items are built on demand.
///
/// `builder` is called with an item index each time that item needs to be
/// measured; items outside the viewport are never built.
pub struct LazyColumn<F> {
    item_count: usize,
    builder: F,
}

impl<F> LazyColumn<F> {
    pub fn new(item_count: usize, builder: F) -> LazyColumn<F> {
        LazyColumn {
            item_count,
            builder,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    fn measure_item<E>(&self, index: usize, bc: &BoxConstraints) -> Result<Measured, LayoutError>
    where
        F: Fn(usize) -> E,
        E: LayoutElement,
    {
        (self.builder)(index).measure(bc)
    }

    /// Lay out the visible items, applying any pending scroll in `state`.
    ///
    /// Placements are keyed by item index and are in viewport coordinates.
    /// Requires a bounded maximum height.
    #[instrument(name = "LazyColumn", level = "trace", skip(self, state))]
    pub fn layout<E>(
        &self,
        bc: &BoxConstraints,
        state: &mut LazyListState,
    ) -> Result<StackLayout, LayoutError>
    where
        F: Fn(usize) -> E,
        E: LayoutElement,
    {
        bc.debug_check("LazyColumn");
        if !bc.is_height_bounded() {
            return Err(LayoutError::Unbounded { name: "LazyColumn" });
        }
        if self.item_count == 0 {
            state.first_index = 0;
            state.first_offset = 0.0;
            state.pending_delta = 0.0;
            state.visible = 0..0;
            return Ok(StackLayout::new(bc.constrain(Size::ZERO)));
        }

        let viewport = bc.max().height;
        let child_bc = bc.loosen().with_height(0.0, f64::INFINITY);

        state.first_index = state.first_index.min(self.item_count - 1);
        self.apply_delta(&child_bc, state)?;

        let mut items = self.fill_forward(&child_bc, state, viewport)?;
        let end = items_end(state, &items);
        if end < viewport && (state.first_index > 0 || state.first_offset > 0.0) {
            // the tail doesn't reach the bottom; scroll back to fill the gap
            state.pending_delta = end - viewport;
            self.apply_delta(&child_bc, state)?;
            items = self.fill_forward(&child_bc, state, viewport)?;
        }

        let content_width = items.iter().map(|(_, m)| m.width()).fold(0.0, f64::max);
        let content_height = items_end(state, &items).min(viewport);
        let mut layout = StackLayout::new(bc.constrain(Size::new(content_width, content_height)));

        let mut y = -state.first_offset;
        for (index, measured) in items {
            let height = measured.height();
            layout
                .placements
                .push(Placement::new(index, Point::new(0., y), measured));
            y += height;
        }
        let start = layout.placements.first().map(|p| p.index).unwrap_or(0);
        let end = layout.placements.last().map(|p| p.index + 1).unwrap_or(0);
        state.visible = start..end;
        tracing::trace!("visible items {:?}", state.visible);
        Ok(layout)
    }

    /// Move the anchor item by the pending delta, measuring items as it goes.
    fn apply_delta<E>(
        &self,
        bc: &BoxConstraints,
        state: &mut LazyListState,
    ) -> Result<(), LayoutError>
    where
        F: Fn(usize) -> E,
        E: LayoutElement,
    {
        let mut offset = state.first_offset + state.pending_delta;
        state.pending_delta = 0.0;

        while offset > 0.0 && state.first_index + 1 < self.item_count {
            let height = self.measure_item(state.first_index, bc)?.height();
            if offset < height {
                break;
            }
            offset -= height;
            state.first_index += 1;
        }
        while offset < 0.0 && state.first_index > 0 {
            state.first_index -= 1;
            offset += self.measure_item(state.first_index, bc)?.height();
        }
        state.first_offset = offset.max(0.0);
        Ok(())
    }

    /// Measure items from the anchor until the viewport is covered.
    fn fill_forward<E>(
        &self,
        bc: &BoxConstraints,
        state: &LazyListState,
        viewport: f64,
    ) -> Result<Vec<(usize, Measured)>, LayoutError>
    where
        F: Fn(usize) -> E,
        E: LayoutElement,
    {
        let mut items = Vec::new();
        let mut y = -state.first_offset;
        let mut index = state.first_index;
        while index < self.item_count && (y < viewport || items.is_empty()) {
            let measured = self.measure_item(index, bc)?;
            y += measured.height();
            items.push((index, measured));
            index += 1;
        }
        Ok(items)
    }
}

fn items_end(state: &LazyListState, items: &[(usize, Measured)]) -> f64 {
    items.iter().map(|(_, m)| m.height()).sum::<f64>() - state.first_offset
}
