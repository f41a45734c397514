// Copyright 2025 the plt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text and line styles.
//!
//! Styles are plain values: every axis and tick layout owns its own copies, so
//! restyling one axis never leaks into another. The font inside a
//! [`TextStyle`] is a shared, read-only handle.

use peniko::Color;
use peniko::color::palette::css;
use plt_text::{Font, POINTS_PER_INCH};

/// Name of the font used by the default axis and tick styles.
pub const DEFAULT_FONT: &str = "serif-roman";

/// Width of a hairline stroke, in inches.
pub const HAIRLINE: f64 = 1.0 / 64.0;

/// Style of a piece of text.
#[derive(Clone, Debug)]
pub struct TextStyle {
    /// Fill color of the glyphs.
    pub color: Color,
    /// Font used for drawing and measurement.
    pub font: Font,
}

impl TextStyle {
    /// Black text in `font`.
    pub fn new(font: Font) -> Self {
        Self {
            color: css::BLACK,
            font,
        }
    }

    /// Set the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Font ascent in inches.
    pub fn ascent(&self) -> f64 {
        self.font.extents().ascent / POINTS_PER_INCH
    }

    /// Font descent in inches.
    pub fn descent(&self) -> f64 {
        self.font.extents().descent / POINTS_PER_INCH
    }

    /// Width of `text` in inches.
    pub fn width(&self, text: &str) -> f64 {
        self.font.width(text) / POINTS_PER_INCH
    }
}

/// Style of a stroked line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in inches.
    pub width: f64,
}

impl LineStyle {
    /// Convenience for a solid stroke.
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, HAIRLINE)
    }
}
