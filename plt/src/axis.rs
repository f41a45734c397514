// Copyright 2025 the plt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis measurement, transforms and drawing.
//!
//! An [`Axis`] is used in two passes. First the composer *measures* it
//! ([`Axis::height`] for a horizontal axis, [`Axis::width`] for a vertical one)
//! to reserve room next to the data area. Then it *draws* it into the reserved
//! [`DrawArea`]. Both passes derive their spacing from one band computation,
//! so the drawn axis fills exactly the space that was measured.

use alloc::format;
use alloc::string::String;
use core::f64::consts::FRAC_PI_2;

use kurbo::Point;
use plt_text::{FontError, FontProvider, HeuristicFonts};

use crate::style::DEFAULT_FONT;
use crate::{DrawArea, LineStyle, TextAlign, TextStyle, Tick, TickGenerator, TickLayout};

/// Direction an axis runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Runs left to right; stacked below the data area.
    Horizontal,
    /// Runs bottom to top; stacked left of the data area.
    Vertical,
}

/// A linear axis over `[min, max]`.
#[derive(Clone, Debug)]
pub struct Axis {
    /// Smallest data value on the axis.
    pub min: f64,
    /// Largest data value on the axis.
    pub max: f64,
    /// Axis label; no label is drawn when empty.
    pub label: String,
    /// Style of the axis label.
    pub label_style: TextStyle,
    /// Style of the axis line.
    pub line_style: LineStyle,
    /// Gap between the axis line and the data area, in inches.
    pub padding: f64,
    /// Tick placement and style.
    pub ticks: TickLayout,
}

impl Axis {
    /// Default axis label font size, in points.
    pub const DEFAULT_LABEL_SIZE: f64 = 12.0;
    /// Default padding, in inches.
    pub const DEFAULT_PADDING: f64 = 1.0 / 8.0;

    /// Creates an axis with default styling, loading its fonts from `fonts`.
    ///
    /// The range starts out unset (`min = +∞`, `max = -∞`); widen it with
    /// [`Axis::include`] or set it with [`Axis::with_range`] before measuring.
    pub fn with_fonts(fonts: &dyn FontProvider) -> Result<Self, FontError> {
        let font = fonts.font(DEFAULT_FONT, Self::DEFAULT_LABEL_SIZE)?;
        Ok(Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            label: String::new(),
            label_style: TextStyle::new(font),
            line_style: LineStyle::default(),
            padding: Self::DEFAULT_PADDING,
            ticks: TickLayout::with_fonts(fonts)?,
        })
    }

    /// Creates an axis with default styling using [`HeuristicFonts`].
    ///
    /// # Panics
    ///
    /// Panics if the built-in font set cannot provide [`DEFAULT_FONT`].
    pub fn new() -> Self {
        Self::with_fonts(&HeuristicFonts)
            .unwrap_or_else(|err| panic!("default axis font unavailable: {err}"))
    }

    /// Set the data range.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the axis label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the axis label style.
    pub fn with_label_style(mut self, style: TextStyle) -> Self {
        self.label_style = style;
        self
    }

    /// Set the axis line style.
    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    /// Set the padding in inches.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the tick layout.
    pub fn with_ticks(mut self, ticks: TickLayout) -> Self {
        self.ticks = ticks;
        self
    }

    /// Set the tick generator, keeping the tick styling.
    pub fn with_tick_generator(mut self, generator: impl TickGenerator + 'static) -> Self {
        self.ticks = self.ticks.with_generator(generator);
        self
    }

    /// Widens the range to cover `value`. Non-finite values are ignored.
    pub fn include(&mut self, value: f64) {
        if value.is_finite() {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
    }

    /// Widens the range to cover every value in `values`.
    pub fn include_all(&mut self, values: impl IntoIterator<Item = f64>) {
        for v in values {
            self.include(v);
        }
    }

    /// Returns `true` if the range is finite and non-empty.
    pub fn has_range(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    /// Maps the data value `x` to a horizontal position in `da`.
    ///
    /// `min` maps to the left edge and `max` to the right edge. A zero-width
    /// range yields a non-finite result.
    pub fn x(&self, da: &DrawArea<'_>, x: f64) -> f64 {
        let p = (x - self.min) / (self.max - self.min);
        da.min.x + p * (da.max().x - da.min.x)
    }

    /// Maps the data value `y` to a vertical position in `da`.
    ///
    /// `min` maps to the bottom edge and `max` to the top edge. A zero-height
    /// range yields a non-finite result.
    pub fn y(&self, da: &DrawArea<'_>, y: f64) -> f64 {
        let p = (y - self.min) / (self.max - self.min);
        da.min.y + p * (da.max().y - da.min.y)
    }

    /// Space the axis needs when drawn horizontally, in inches.
    ///
    /// Call this after the range is final: the ticks, and so their labels,
    /// depend on it.
    pub fn height(&self) -> f64 {
        let marks = self.ticks.marks(self.min, self.max);
        let h = self.bands(&marks, Orientation::Horizontal).total();
        tracing::trace!(height = h, ticks = marks.len(), "measured horizontal axis");
        h
    }

    /// Space the axis needs when drawn vertically, in inches.
    ///
    /// Call this after the range is final: the ticks, and so their labels,
    /// depend on it.
    pub fn width(&self) -> f64 {
        let marks = self.ticks.marks(self.min, self.max);
        let w = self.bands(&marks, Orientation::Vertical).total();
        tracing::trace!(width = w, ticks = marks.len(), "measured vertical axis");
        w
    }

    /// [`height`](Self::height) or [`width`](Self::width), depending on `orientation`.
    pub fn size(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.height(),
            Orientation::Vertical => self.width(),
        }
    }

    /// Draws the axis in `orientation`.
    pub fn draw(&self, da: &mut DrawArea<'_>, orientation: Orientation) {
        match orientation {
            Orientation::Horizontal => self.draw_horizontal(da),
            Orientation::Vertical => self.draw_vertical(da),
        }
    }

    /// Draws a horizontal axis, stacked upwards from the bottom of `da`.
    ///
    /// From the bottom: the axis label, the tick labels, the tick marks and
    /// finally the axis line, which spans the full width of `da`.
    pub fn draw_horizontal(&self, da: &mut DrawArea<'_>) {
        self.warn_if_degenerate();
        let marks = self.ticks.marks(self.min, self.max);
        let bands = self.bands(&marks, Orientation::Horizontal);
        let dpi = da.dpi();

        let mut y = da.min.y;
        if let Some(label) = bands.label {
            da.set_text_style(&self.label_style);
            y += label.before * dpi;
            let at = Point::new(da.center().x, y);
            da.text(at, TextAlign::CENTER_BASELINE, &self.label);
            y += label.after * dpi;
        }

        if !marks.is_empty() {
            da.set_line_style(&self.ticks.mark_style);
            da.set_text_style(&self.ticks.label_style);
            for t in marks.iter().filter(|t| !t.is_minor()) {
                let at = Point::new(self.x(da, t.value), y);
                da.text(at, TextAlign::CENTER_BASELINE, &t.label);
            }
            y += bands.tick_labels * dpi;

            let len = bands.tick_length * dpi;
            for t in &marks {
                let x = self.x(da, t.value);
                da.line(&[
                    Point::new(x, y + t.length_offset(len)),
                    Point::new(x, y + len),
                ]);
            }
            y += len;
        }

        da.set_line_style(&self.line_style);
        let (x0, x1) = (da.min.x, da.max().x);
        da.line(&[Point::new(x0, y), Point::new(x1, y)]);
    }

    /// Draws a vertical axis, stacked rightwards from the left of `da`.
    ///
    /// From the left: the axis label (reading bottom to top), the right-aligned
    /// tick labels, the tick marks and finally the axis line, which spans the
    /// full height of `da`.
    pub fn draw_vertical(&self, da: &mut DrawArea<'_>) {
        self.warn_if_degenerate();
        let marks = self.ticks.marks(self.min, self.max);
        let bands = self.bands(&marks, Orientation::Vertical);
        let dpi = da.dpi();

        let mut x = da.min.x;
        if let Some(label) = bands.label {
            x += label.before * dpi;
            da.set_text_style(&self.label_style);
            // Rotated a quarter turn, (center, -x) lands on (x, center).
            let at = Point::new(da.center().y, -x);
            da.scoped(|da| {
                da.rotate(FRAC_PI_2);
                da.text(at, TextAlign::CENTER_BASELINE, &self.label);
            });
            x += label.after * dpi;
        }

        if !marks.is_empty() {
            da.set_line_style(&self.ticks.mark_style);
            da.set_text_style(&self.ticks.label_style);
            x += bands.tick_labels * dpi;
            for t in marks.iter().filter(|t| !t.is_minor()) {
                let at = Point::new(x, self.y(da, t.value));
                da.text(at, TextAlign::END_MIDDLE, &format!("{} ", t.label));
            }

            let len = bands.tick_length * dpi;
            for t in &marks {
                let y = self.y(da, t.value);
                da.line(&[
                    Point::new(x + t.length_offset(len), y),
                    Point::new(x + len, y),
                ]);
            }
            x += len;
        }

        da.set_line_style(&self.line_style);
        let (y0, y1) = (da.min.y, da.max().y);
        da.line(&[Point::new(x, y0), Point::new(x, y1)]);
    }

    /// Splits the space the axis consumes into the bands drawn one after another.
    fn bands(&self, marks: &[Tick], orientation: Orientation) -> Bands {
        let label = (!self.label.is_empty()).then(|| {
            let (ascent, descent) = (self.label_style.ascent(), self.label_style.descent());
            match orientation {
                Orientation::Horizontal => LabelBand {
                    before: descent,
                    after: ascent,
                },
                Orientation::Vertical => LabelBand {
                    before: ascent,
                    after: descent,
                },
            }
        });

        let (tick_labels, tick_length) = if marks.is_empty() {
            (0.0, 0.0)
        } else {
            let labels = match orientation {
                Orientation::Horizontal => self.ticks.label_height(marks),
                Orientation::Vertical => match self.ticks.label_width(marks) {
                    // Leave a space between the labels and the marks.
                    w if w > 0.0 => w + self.ticks.label_style.width(" "),
                    _ => 0.0,
                },
            };
            (labels, self.ticks.length)
        };

        Bands {
            label,
            tick_labels,
            tick_length,
            half_line: self.line_style.width / 2.0,
            padding: self.padding,
        }
    }

    fn warn_if_degenerate(&self) {
        if !self.has_range() {
            tracing::debug!(
                min = self.min,
                max = self.max,
                "drawing an axis without a finite, non-empty range"
            );
        }
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new()
    }
}

/// Extent of the axis label across the axis, split around its baseline.
#[derive(Clone, Copy, Debug)]
struct LabelBand {
    /// Advanced before the label is drawn.
    before: f64,
    /// Advanced after the label is drawn.
    after: f64,
}

/// The successive bands an axis occupies across its direction, in inches.
#[derive(Clone, Copy, Debug)]
struct Bands {
    label: Option<LabelBand>,
    tick_labels: f64,
    tick_length: f64,
    half_line: f64,
    padding: f64,
}

impl Bands {
    fn total(&self) -> f64 {
        let label = self.label.map_or(0.0, |l| l.before + l.after);
        label + self.tick_labels + self.tick_length + self.half_line + self.padding
    }
}
