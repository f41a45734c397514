// Copyright 2025 the plt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface axes render into.
//!
//! A [`Canvas`] is the vector backend (SVG, PDF, a rasterizer, ...). It uses a
//! y-up coordinate system measured in device dots, so an inch is
//! [`Canvas::dpi`] units long. A [`DrawArea`] is a rectangle on a canvas that
//! axes are laid out in.

use core::fmt;

use kurbo::{Point, Rect, Size};

use crate::{LineStyle, TextStyle};

/// Alignment of a text run relative to its anchor point.
///
/// Both components are fractions of the run's extent: `x = -0.5` centers the
/// text horizontally on the anchor, `x = -1` makes it end there. `y = 0` puts
/// the baseline on the anchor and `y = -0.5` centers the text vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextAlign {
    /// Horizontal offset as a fraction of the text width.
    pub x: f64,
    /// Vertical offset as a fraction of the text height.
    pub y: f64,
}

impl TextAlign {
    /// Left edge on the anchor, baseline on the anchor.
    pub const START_BASELINE: Self = Self::new(0.0, 0.0);
    /// Horizontally centered, baseline on the anchor.
    pub const CENTER_BASELINE: Self = Self::new(-0.5, 0.0);
    /// Right edge on the anchor, vertically centered.
    pub const END_MIDDLE: Self = Self::new(-1.0, -0.5);

    /// Creates an alignment from its fractional offsets.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A vector drawing backend.
pub trait Canvas {
    /// Device dots per inch.
    fn dpi(&self) -> f64;

    /// Sets the style of subsequent lines.
    fn set_line_style(&mut self, style: &LineStyle);

    /// Sets the style of subsequent text.
    fn set_text_style(&mut self, style: &TextStyle);

    /// Strokes a polyline through `points`.
    fn line(&mut self, points: &[Point]);

    /// Draws a single line of text anchored at `at`.
    fn text(&mut self, at: Point, align: TextAlign, text: &str);

    /// Saves the current transform.
    fn push(&mut self);

    /// Restores the transform saved by the matching [`Canvas::push`].
    fn pop(&mut self);

    /// Rotates subsequent drawing counter-clockwise about the canvas origin.
    fn rotate(&mut self, radians: f64);
}

/// A rectangular region of a [`Canvas`].
pub struct DrawArea<'a> {
    canvas: &'a mut dyn Canvas,
    /// Bottom-left corner, in dots.
    pub min: Point,
    /// Extent of the area, in dots.
    pub size: Size,
}

impl fmt::Debug for DrawArea<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawArea")
            .field("min", &self.min)
            .field("size", &self.size)
            .field("dpi", &self.dpi())
            .finish_non_exhaustive()
    }
}

impl<'a> DrawArea<'a> {
    /// Creates an area of `size` dots with its bottom-left corner at `min`.
    pub fn new(canvas: &'a mut dyn Canvas, min: Point, size: Size) -> Self {
        Self { canvas, min, size }
    }

    /// Creates an area covering `rect`.
    pub fn from_rect(canvas: &'a mut dyn Canvas, rect: Rect) -> Self {
        Self::new(canvas, rect.origin(), rect.size())
    }

    /// Returns an area over a different rectangle of the same canvas.
    pub fn sub_area(&mut self, rect: Rect) -> DrawArea<'_> {
        DrawArea::from_rect(&mut *self.canvas, rect)
    }

    /// The top-right corner.
    pub fn max(&self) -> Point {
        Point::new(self.min.x + self.size.width, self.min.y + self.size.height)
    }

    /// The center point.
    pub fn center(&self) -> Point {
        self.min.midpoint(self.max())
    }

    /// The covered rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.min, self.size)
    }

    /// Device dots per inch of the underlying canvas.
    pub fn dpi(&self) -> f64 {
        self.canvas.dpi()
    }

    /// See [`Canvas::set_line_style`].
    pub fn set_line_style(&mut self, style: &LineStyle) {
        self.canvas.set_line_style(style);
    }

    /// See [`Canvas::set_text_style`].
    pub fn set_text_style(&mut self, style: &TextStyle) {
        self.canvas.set_text_style(style);
    }

    /// See [`Canvas::line`].
    pub fn line(&mut self, points: &[Point]) {
        self.canvas.line(points);
    }

    /// See [`Canvas::text`].
    pub fn text(&mut self, at: Point, align: TextAlign, text: &str) {
        self.canvas.text(at, align, text);
    }

    /// See [`Canvas::push`].
    pub fn push(&mut self) {
        self.canvas.push();
    }

    /// See [`Canvas::pop`].
    pub fn pop(&mut self) {
        self.canvas.pop();
    }

    /// See [`Canvas::rotate`].
    pub fn rotate(&mut self, radians: f64) {
        self.canvas.rotate(radians);
    }

    /// Runs `f` between a [`push`](Self::push) and the matching [`pop`](Self::pop).
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push();
        let out = f(self);
        self.pop();
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::test_canvas::{Op, RecordingCanvas};

    #[test]
    fn area_corners_follow_min_and_size() {
        let mut canvas = RecordingCanvas::new(72.0);
        let da = DrawArea::new(&mut canvas, Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        assert_eq!(da.max(), Point::new(110.0, 70.0));
        assert_eq!(da.center(), Point::new(60.0, 45.0));
        assert_eq!(da.rect(), Rect::new(10.0, 20.0, 110.0, 70.0));
        assert_eq!(da.dpi(), 72.0);
    }

    #[test]
    fn scoped_pairs_push_and_pop() {
        let mut canvas = RecordingCanvas::new(72.0);
        let mut da = DrawArea::from_rect(&mut canvas, Rect::new(0.0, 0.0, 10.0, 10.0));
        let out = da.scoped(|da| {
            da.rotate(1.0);
            7
        });
        assert_eq!(out, 7);
        assert_eq!(canvas.ops, [Op::Push, Op::Rotate(1.0), Op::Pop]);
    }

    #[test]
    fn sub_area_draws_on_the_same_canvas() {
        let mut canvas = RecordingCanvas::new(72.0);
        let mut da = DrawArea::from_rect(&mut canvas, Rect::new(0.0, 0.0, 100.0, 100.0));
        {
            let mut sub = da.sub_area(Rect::new(0.0, 0.0, 10.0, 10.0));
            sub.line(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        }
        da.line(&[Point::new(2.0, 2.0), Point::new(3.0, 3.0)]);
        assert_eq!(canvas.lines().len(), 2);
    }
}
