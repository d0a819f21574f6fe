// Copyright 2020 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! A vertically scrolling column where every child is measured.

use tracing::instrument;

use crate::kurbo::{Point, Size};
use crate::{BoxConstraints, LayoutElement, LayoutError, Placement, StackLayout};

/// The scroll position of a [`ScrollColumn`].
///
/// This is owned by the caller and survives across layout passes; the layout
/// updates the extents and re-clamps the offset each time it runs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    offset: f64,
    content_extent: f64,
    viewport_extent: f64,
}

impl ScrollState {
    pub fn new() -> ScrollState {
        ScrollState::default()
    }

    /// How far the content is scrolled.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The largest valid offset.
    pub fn max_offset(&self) -> f64 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }

    pub fn content_extent(&self) -> f64 {
        self.content_extent
    }

    pub fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        offset.min(self.max_offset()).max(0.0)
    }

    /// Sets the offset to `offset`.
    ///
    /// Returns true if the offset changed. The offset is constrained by the
    /// extents from the last layout, so it might not get set to exactly `offset`.
    pub fn scroll_to(&mut self, offset: f64) -> bool {
        let new_offset = self.clamp_offset(offset);
        if (new_offset - self.offset).abs() > 1e-9 {
            self.offset = new_offset;
            true
        } else {
            false
        }
    }

    /// Changes the offset by `delta`. See [`scroll_to`](ScrollState::scroll_to).
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        self.scroll_to(self.offset + delta)
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.scroll_to(0.0)
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        self.scroll_to(self.max_offset())
    }

    fn set_extents(&mut self, content: f64, viewport: f64) {
        self.content_extent = content;
        self.viewport_extent = viewport;
        self.offset = self.clamp_offset(self.offset);
    }
}

/// A column that measures all of its children and shows a scrolled window
/// onto them.
///
/// Children are stacked from the top with no gap, get the incoming width
/// bounds and an unbounded height.
pub struct ScrollColumn {
    children: Vec<Box<dyn LayoutElement>>,
}

impl ScrollColumn {
    pub fn new() -> ScrollColumn {
        ScrollColumn {
            children: Vec::new(),
        }
    }

    /// Builder-style variant of `add_child`.
    pub fn with_child(mut self, child: impl LayoutElement + 'static) -> Self {
        self.add_child(child);
        self
    }

    pub fn add_child(&mut self, child: impl LayoutElement + 'static) {
        self.children.push(Box::new(child));
    }

    /// Lay out every child and shift them by the scroll offset.
    ///
    /// Placements are in viewport coordinates, so children above the
    /// viewport have negative `y`.
    #[instrument(name = "ScrollColumn", level = "trace", skip(self, state))]
    pub fn layout(
        &self,
        bc: &BoxConstraints,
        state: &mut ScrollState,
    ) -> Result<StackLayout, LayoutError> {
        bc.debug_check("ScrollColumn");
        let child_bc = bc.loosen().with_height(0.0, f64::INFINITY);

        let measured = self
            .children
            .iter()
            .map(|child| child.measure(&child_bc))
            .collect::<Result<Vec<_>, _>>()?;

        let content_width = measured.iter().map(|m| m.width()).fold(0.0, f64::max);
        let content_height: f64 = measured.iter().map(|m| m.height()).sum();
        let viewport = bc.constrain(Size::new(content_width, content_height));
        state.set_extents(content_height, viewport.height);

        let mut layout = StackLayout::new(viewport);
        let mut y = -state.offset();
        for (index, child) in measured.into_iter().enumerate() {
            let height = child.height();
            layout
                .placements
                .push(Placement::new(index, Point::new(0., y), child));
            y += height;
        }
        Ok(layout)
    }
}

impl Default for ScrollColumn {
    fn default() -> Self {
        ScrollColumn::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fixed;
    use test_log::test;

    fn list(n: usize) -> ScrollColumn {
        (0..n).fold(ScrollColumn::new(), |col, _| col.with_child(Fixed::new(100., 20.)))
    }

    #[test]
    fn offset_clamps_to_content() {
        let column = list(100);
        let bc = BoxConstraints::new(Size::ZERO, Size::new(300., 400.));
        let mut state = ScrollState::new();

        let layout = column.layout(&bc, &mut state).unwrap();
        assert_eq!(layout.size, Size::new(100., 400.));
        assert_eq!(state.max_offset(), 1600.);

        assert!(state.scroll_by(50.));
        assert!(state.scroll_to_bottom());
        assert_eq!(state.offset(), 1600.);
        assert!(!state.scroll_by(10.));

        let layout = column.layout(&bc, &mut state).unwrap();
        assert_eq!(layout.placements[80].origin, Point::new(0., 0.));
        assert_eq!(layout.placements[0].origin, Point::new(0., -1600.));

        assert!(state.scroll_to_top());
        assert!(!state.scroll_to_top());
        let layout = column.layout(&bc, &mut state).unwrap();
        assert_eq!(layout.placements[0].origin, Point::new(0., 0.));
    }

    #[test]
    fn short_content_does_not_scroll() {
        let column = list(3);
        let bc = BoxConstraints::new(Size::ZERO, Size::new(300., 400.));
        let mut state = ScrollState::new();
        let layout = column.layout(&bc, &mut state).unwrap();
        assert_eq!(layout.size.height, 60.);
        assert!(!state.scroll_by(30.));
        assert_eq!(state.offset(), 0.);
    }

    #[test]
    fn shrinking_content_reclamps() {
        let bc = BoxConstraints::new(Size::ZERO, Size::new(300., 400.));
        let mut state = ScrollState::new();
        list(100).layout(&bc, &mut state).unwrap();
        state.scroll_to(1000.);

        list(30).layout(&bc, &mut state).unwrap();
        assert_eq!(state.offset(), 200.);
    }
}
