// Copyright 2025 the plt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font metric hooks for axis layout.
//!
//! Axis layout has to know how much room its text takes before anything is
//! drawn. Font loading and shaping stay outside of `plt`, so layout code only
//! depends on a small interface:
//! - a [`FontProvider`] resolves a font name and size to a [`Font`] handle, and
//! - a [`Font`] answers extents and string-width queries, in points.
//!
//! This crate is:
//! - `no_std`-friendly (it uses `alloc` for names and shared faces), and
//! - backend-agnostic (heuristic tables and shaping engines implement the same
//!   traits).

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::fmt;

/// Number of typographic points per inch.
///
/// Font metrics are reported in points, layout is done in inches.
pub const POINTS_PER_INCH: f64 = 72.0;

/// A resolved typeface that can answer metric queries at any size.
///
/// Implementations are shared between [`Font`] handles and must not change
/// their answers while a layout pass is running.
pub trait FontFace {
    /// Vertical extents of the face at `size` points.
    fn extents(&self, size: f64) -> FontExtents;

    /// Advance width of `text` rendered as a single line at `size` points.
    fn advance(&self, text: &str, size: f64) -> f64;
}

/// Vertical metrics of a font, in points.
///
/// Both `ascent` and `descent` are distances from the baseline, so both are
/// non-negative for well-formed fonts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontExtents {
    /// Distance from the baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from the baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Baseline-to-baseline distance, including leading.
    pub line_height: f64,
}

impl FontExtents {
    /// Returns `ascent + descent`, the ink extent of one line.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// A handle to a measured font: a face, the name it was resolved from and a size.
///
/// Cloning is cheap; the face is shared.
#[derive(Clone)]
pub struct Font {
    name: Arc<str>,
    size: f64,
    face: Arc<dyn FontFace>,
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("name", &self.name)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl Font {
    /// Creates a font handle for `face` at `size` points.
    ///
    /// Returns [`FontError::InvalidSize`] if `size` is not a finite, positive number.
    pub fn new(
        name: impl Into<Arc<str>>,
        size: f64,
        face: Arc<dyn FontFace>,
    ) -> Result<Self, FontError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FontError::InvalidSize(size));
        }
        Ok(Self {
            name: name.into(),
            size,
            face,
        })
    }

    /// The name this font was resolved from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The font size in points.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns the same face at a different size.
    pub fn with_size(&self, size: f64) -> Result<Self, FontError> {
        Self::new(self.name.clone(), size, self.face.clone())
    }

    /// Vertical extents at this font's size, in points.
    #[must_use]
    pub fn extents(&self) -> FontExtents {
        self.face.extents(self.size)
    }

    /// Width of `text` at this font's size, in points.
    #[must_use]
    pub fn width(&self, text: &str) -> f64 {
        self.face.advance(text, self.size)
    }
}

/// Resolves font names to [`Font`] handles.
pub trait FontProvider {
    /// Looks up the font called `name` at `size` points.
    fn font(&self, name: &str, size: f64) -> Result<Font, FontError>;
}

/// Errors produced while acquiring a font.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FontError {
    /// The provider has no font with this name.
    #[error("no font named `{0}`")]
    UnknownFont(String),
    /// The requested size is not a finite, positive number of points.
    #[error("invalid font size {0}")]
    InvalidSize(f64),
}

impl FontError {
    /// Convenience for [`FontError::UnknownFont`].
    pub fn unknown(name: &str) -> Self {
        Self::UnknownFont(name.to_string())
    }
}

/// A face described by a handful of em-relative proportions.
///
/// Every character is assumed to have the same advance, so widths are only an
/// estimate. The numbers come from the AFM headers of the standard PostScript
/// faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeuristicFace {
    /// Ascent as a fraction of the em size.
    pub ascent: f64,
    /// Descent as a fraction of the em size.
    pub descent: f64,
    /// Extra line spacing as a fraction of the em size.
    pub leading: f64,
    /// Average glyph advance as a fraction of the em size.
    pub advance: f64,
}

impl HeuristicFace {
    /// Proportions of a Times-like roman serif face.
    pub const SERIF: Self = Self {
        ascent: 0.683,
        descent: 0.217,
        leading: 0.2,
        advance: 0.5,
    };
    /// Proportions of a Times-like bold serif face.
    pub const SERIF_BOLD: Self = Self {
        ascent: 0.683,
        descent: 0.217,
        leading: 0.2,
        advance: 0.54,
    };
    /// Proportions of a Helvetica-like sans-serif face.
    pub const SANS_SERIF: Self = Self {
        ascent: 0.718,
        descent: 0.207,
        leading: 0.2,
        advance: 0.556,
    };
    /// Proportions of a Courier-like monospace face.
    pub const MONOSPACE: Self = Self {
        ascent: 0.629,
        descent: 0.157,
        leading: 0.2,
        advance: 0.6,
    };
}

impl FontFace for HeuristicFace {
    fn extents(&self, size: f64) -> FontExtents {
        let ascent = self.ascent * size;
        let descent = self.descent * size;
        FontExtents {
            ascent,
            descent,
            line_height: ascent + descent + self.leading * size,
        }
    }

    fn advance(&self, text: &str, size: f64) -> f64 {
        self.advance * size * text.chars().count() as f64
    }
}

/// A dependency-free [`FontProvider`] backed by [`HeuristicFace`] tables.
///
/// Known names (case-sensitive):
/// - `serif-roman`, `Times-Roman`
/// - `serif-bold`, `Times-Bold`
/// - `sans-serif`, `Helvetica`
/// - `monospace`, `Courier`
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicFonts;

impl HeuristicFonts {
    /// Returns the face table registered under `name`, if any.
    #[must_use]
    pub fn face(name: &str) -> Option<HeuristicFace> {
        match name {
            "serif-roman" | "Times-Roman" => Some(HeuristicFace::SERIF),
            "serif-bold" | "Times-Bold" => Some(HeuristicFace::SERIF_BOLD),
            "sans-serif" | "Helvetica" => Some(HeuristicFace::SANS_SERIF),
            "monospace" | "Courier" => Some(HeuristicFace::MONOSPACE),
            _ => None,
        }
    }
}

impl FontProvider for HeuristicFonts {
    fn font(&self, name: &str, size: f64) -> Result<Font, FontError> {
        let face = Self::face(name).ok_or_else(|| FontError::unknown(name))?;
        Font::new(name, size, Arc::new(face))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_fonts_resolve_aliases_to_the_same_face() {
        let a = HeuristicFonts.font("serif-roman", 12.0).unwrap();
        let b = HeuristicFonts.font("Times-Roman", 12.0).unwrap();
        assert_eq!(a.extents(), b.extents());
        assert_eq!(a.width("100"), b.width("100"));
        assert_eq!(a.name(), "serif-roman");
    }

    #[test]
    fn unknown_font_is_an_error() {
        let err = HeuristicFonts.font("Comic Sans", 12.0).unwrap_err();
        assert_eq!(err, FontError::UnknownFont("Comic Sans".into()));
        assert_eq!(std::format!("{err}"), "no font named `Comic Sans`");
    }

    #[test]
    fn non_positive_or_non_finite_sizes_are_rejected() {
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = HeuristicFonts.font("serif-roman", size).unwrap_err();
            assert!(matches!(err, FontError::InvalidSize(_)), "size {size}");
        }
    }

    #[test]
    fn metrics_scale_with_size() {
        let small = HeuristicFonts.font("sans-serif", 10.0).unwrap();
        let large = small.with_size(20.0).unwrap();
        assert!((large.extents().ascent - 2.0 * small.extents().ascent).abs() < 1e-12);
        assert!((large.width("abc") - 2.0 * small.width("abc")).abs() < 1e-12);
        assert_eq!(large.name(), small.name());
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let font = HeuristicFonts.font("monospace", 10.0).unwrap();
        assert_eq!(font.width(""), 0.0);
        assert!((font.width("µs") - 2.0 * 6.0).abs() < 1e-12);
    }

    #[test]
    fn extents_line_height_includes_leading() {
        let e = HeuristicFace::SERIF.extents(10.0);
        assert!((e.height() - 9.0).abs() < 1e-12);
        assert!(e.line_height > e.height());
    }
}
