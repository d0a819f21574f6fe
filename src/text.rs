// Copyright 2019 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! A text element with simple, deterministic font metrics.

use crate::kurbo::Size;
use crate::{AlignmentLine, BoxConstraints, LayoutElement, LayoutError, Measured};

/// Font metrics for [`Text`], as multiples of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    /// Distance between consecutive baselines.
    pub line_height: f64,
    /// Distance from the top of a line to its baseline.
    pub ascent: f64,
    /// Horizontal advance of every glyph.
    pub advance: f64,
}

impl TextStyle {
    pub fn new(font_size: f64) -> TextStyle {
        TextStyle {
            font_size,
            ..TextStyle::default()
        }
    }

    pub fn line_height_px(&self) -> f64 {
        self.font_size * self.line_height
    }

    pub fn ascent_px(&self) -> f64 {
        self.font_size * self.ascent
    }

    pub fn advance_px(&self) -> f64 {
        self.font_size * self.advance
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_size: 14.,
            line_height: 1.25,
            ascent: 0.9,
            advance: 0.5,
        }
    }
}

/// A block of unwrapped text, one line per `\n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    text: String,
    style: TextStyle,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Text {
        Text {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Builder-style method to set the style.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Builder-style method to set only the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.style.font_size = font_size;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn natural_size(&self) -> Size {
        let widest = self
            .text
            .split('\n')
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        Size::new(
            widest as f64 * self.style.advance_px(),
            self.line_count() as f64 * self.style.line_height_px(),
        )
    }
}

impl LayoutElement for Text {
    fn measure(&self, bc: &BoxConstraints) -> Result<Measured, LayoutError> {
        let size = bc.constrain(self.natural_size());
        let first = self.style.ascent_px();
        let last = first + (self.line_count() - 1) as f64 * self.style.line_height_px();
        Ok(Measured::new(size)
            .with_line(AlignmentLine::FirstBaseline, first)
            .with_line(AlignmentLine::LastBaseline, last))
    }

    fn name(&self) -> &'static str {
        "Text"
    }
}
