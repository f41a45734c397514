// Copyright 2025 the plt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick styling and label measurement.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use plt_text::{FontError, FontProvider, HeuristicFonts};

use crate::style::DEFAULT_FONT;
use crate::{DefaultTicks, LineStyle, TextStyle, Tick, TickGenerator};

/// How the ticks of an axis are placed, styled and measured.
#[derive(Clone)]
pub struct TickLayout {
    /// Style of the major tick labels.
    pub label_style: TextStyle,
    /// Style of the tick mark lines.
    pub mark_style: LineStyle,
    /// Length of a major tick mark in inches. Minor marks are half as long.
    pub length: f64,
    /// Places the ticks for a given range.
    pub generator: Arc<dyn TickGenerator>,
}

impl fmt::Debug for TickLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickLayout")
            .field("label_style", &self.label_style)
            .field("mark_style", &self.mark_style)
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl TickLayout {
    /// Default tick label font size, in points.
    pub const DEFAULT_LABEL_SIZE: f64 = 10.0;
    /// Default major tick length, in inches.
    pub const DEFAULT_LENGTH: f64 = 1.0 / 10.0;

    /// Creates the default tick layout, loading its label font from `fonts`.
    ///
    /// The layout has:
    /// - [`DEFAULT_FONT`] labels at [`Self::DEFAULT_LABEL_SIZE`] points,
    /// - hairline marks [`Self::DEFAULT_LENGTH`] inches long, and
    /// - a [`DefaultTicks`] generator.
    pub fn with_fonts(fonts: &dyn FontProvider) -> Result<Self, FontError> {
        let font = fonts.font(DEFAULT_FONT, Self::DEFAULT_LABEL_SIZE)?;
        Ok(Self {
            label_style: TextStyle::new(font),
            mark_style: LineStyle::default(),
            length: Self::DEFAULT_LENGTH,
            generator: Arc::new(DefaultTicks),
        })
    }

    /// Creates the default tick layout using [`HeuristicFonts`].
    ///
    /// # Panics
    ///
    /// Panics if the built-in font set cannot provide [`DEFAULT_FONT`].
    pub fn new() -> Self {
        Self::with_fonts(&HeuristicFonts)
            .unwrap_or_else(|err| panic!("default tick label font unavailable: {err}"))
    }

    /// Set the tick generator.
    pub fn with_generator(mut self, generator: impl TickGenerator + 'static) -> Self {
        self.generator = Arc::new(generator);
        self
    }

    /// Set the major tick length in inches.
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// Set the tick label style.
    pub fn with_label_style(mut self, style: TextStyle) -> Self {
        self.label_style = style;
        self
    }

    /// Set the tick mark style.
    pub fn with_mark_style(mut self, style: LineStyle) -> Self {
        self.mark_style = style;
        self
    }

    /// Generates the ticks for `[min, max]`.
    pub fn marks(&self, min: f64, max: f64) -> Vec<Tick> {
        self.generator.marks(min, max)
    }

    /// Height of the tick label row in inches, `0` if there are no major ticks.
    ///
    /// All labels share one font, so this is the font ascent: horizontal labels
    /// sit on a common baseline.
    pub fn label_height(&self, ticks: &[Tick]) -> f64 {
        if ticks.iter().any(|t| !t.is_minor()) {
            self.label_style.ascent()
        } else {
            0.0
        }
    }

    /// Width of the widest major tick label in inches, `0` if there are none.
    pub fn label_width(&self, ticks: &[Tick]) -> f64 {
        ticks
            .iter()
            .filter(|t| !t.is_minor())
            .map(|t| self.label_style.width(&t.label))
            .fold(0.0, f64::max)
    }
}

impl Default for TickLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::ConstantTicks;

    #[test]
    fn empty_tick_lists_need_no_label_space() {
        let layout = TickLayout::new();
        assert_eq!(layout.label_height(&[]), 0.0);
        assert_eq!(layout.label_width(&[]), 0.0);
    }

    #[test]
    fn minor_ticks_need_no_label_space() {
        let layout = TickLayout::new();
        let ticks = [Tick::minor(1.0), Tick::minor(2.0)];
        assert_eq!(layout.label_height(&ticks), 0.0);
        assert_eq!(layout.label_width(&ticks), 0.0);
    }

    #[test]
    fn label_height_is_the_font_ascent() {
        let layout = TickLayout::new();
        let ticks = [Tick::minor(0.0), Tick::major(1.0, "1")];
        assert_eq!(layout.label_height(&ticks), layout.label_style.ascent());
        assert!(layout.label_height(&ticks) > 0.0);
    }

    #[test]
    fn label_width_is_the_widest_major_label() {
        let layout = TickLayout::new();
        let ticks = [
            Tick::major(0.0, "1"),
            Tick::minor(0.5),
            Tick::major(1.0, "1000"),
            Tick::major(2.0, "10"),
        ];
        assert_eq!(layout.label_width(&ticks), layout.label_style.width("1000"));
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let layout = TickLayout::default();
        assert_eq!(layout.length, 0.1);
        assert_eq!(layout.label_style.font.size(), 10.0);
        assert_eq!(layout.label_style.font.name(), DEFAULT_FONT);
        assert_eq!(layout.marks(0.0, 4.0).len(), 5);
    }

    #[test]
    fn generator_can_be_swapped() {
        let layout =
            TickLayout::new().with_generator(ConstantTicks::new(vec![Tick::major(3.0, "c")]));
        assert_eq!(layout.marks(0.0, 1.0), [Tick::major(3.0, "c")]);
    }

    #[test]
    fn missing_default_font_is_reported() {
        struct NoFonts;
        impl FontProvider for NoFonts {
            fn font(&self, name: &str, _size: f64) -> Result<plt_text::Font, FontError> {
                Err(FontError::unknown(name))
            }
        }
        let err = TickLayout::with_fonts(&NoFonts).unwrap_err();
        assert_eq!(err, FontError::UnknownFont(DEFAULT_FONT.into()));
    }
}
