// Copyright 2025 the plt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed font provider.
//!
//! This crate implements [`plt_text::FontProvider`] using Parley, so axis layout
//! can reserve space from shaping-aware metrics of the fonts installed on the
//! system.

use std::borrow::Cow;
use std::sync::{Arc, Mutex, PoisonError};

use parley::style::{FontFamily as ParleyFontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, FontWeight, LayoutContext};
use plt_text::{Font, FontError, FontExtents, FontFace, FontProvider};

/// Text used to probe the vertical extents of a face.
const EXTENTS_PROBE: &str = "Hg";

struct Contexts {
    font_cx: FontContext,
    layout_cx: LayoutContext<()>,
}

/// A [`FontProvider`] backed by Parley and the system font collection.
///
/// Generic names (`serif-roman`, `sans-serif`, `monospace` and their PostScript
/// aliases) map to Parley's generic families; any other name must match an
/// installed family.
#[derive(Clone)]
pub struct ParleyFonts {
    contexts: Arc<Mutex<Contexts>>,
    display_scale: f32,
    quantize: bool,
}

impl core::fmt::Debug for ParleyFonts {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyFonts")
            .field("display_scale", &self.display_scale)
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl ParleyFonts {
    /// Creates a provider using Parley's default system font configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            contexts: Arc::new(Mutex::new(Contexts {
                font_cx: FontContext::new(),
                layout_cx: LayoutContext::new(),
            })),
            display_scale: 1.0,
            quantize: false,
        }
    }

    /// Sets the display scale passed to Parley.
    ///
    /// Metrics are scaled back into points, so this only affects hinting and
    /// quantization.
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(0.0);
        self
    }

    /// Sets whether Parley should quantize layout coordinates to pixel boundaries.
    #[must_use]
    pub fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    fn resolve(&self, name: &str) -> Result<Family, FontError> {
        let generic = |family, weight| Family {
            name: None,
            generic: family,
            weight,
        };
        let family = match name {
            "serif" | "serif-roman" | "Times-Roman" => generic(GenericFamily::Serif, 400.0),
            "serif-bold" | "Times-Bold" => generic(GenericFamily::Serif, 700.0),
            "sans-serif" | "Helvetica" => generic(GenericFamily::SansSerif, 400.0),
            "monospace" | "Courier" => generic(GenericFamily::Monospace, 400.0),
            _ => {
                let mut contexts = self.contexts.lock().unwrap_or_else(PoisonError::into_inner);
                if contexts.font_cx.collection.family_id(name).is_none() {
                    tracing::warn!(font = name, "no installed font family matches");
                    return Err(FontError::unknown(name));
                }
                Family {
                    name: Some(name.into()),
                    generic: GenericFamily::SansSerif,
                    weight: 400.0,
                }
            }
        };
        tracing::debug!(font = name, named = family.name.is_some(), "resolved font family");
        Ok(family)
    }
}

impl Default for ParleyFonts {
    fn default() -> Self {
        Self::new()
    }
}

impl FontProvider for ParleyFonts {
    fn font(&self, name: &str, size: f64) -> Result<Font, FontError> {
        let family = self.resolve(name)?;
        let face = ParleyFace {
            contexts: self.contexts.clone(),
            family,
            display_scale: self.display_scale,
            quantize: self.quantize,
        };
        Font::new(name, size, Arc::new(face))
    }
}

#[derive(Clone, Debug)]
struct Family {
    name: Option<Arc<str>>,
    generic: GenericFamily,
    weight: f32,
}

impl Family {
    fn font_stack(&self) -> FontStack<'_> {
        let family = match &self.name {
            Some(name) => ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
            None => ParleyFontFamily::Generic(self.generic),
        };
        FontStack::from(family)
    }
}

/// Single-line metrics of a shaped run, in points.
#[derive(Clone, Copy, Debug, Default)]
struct LineMetrics {
    advance: f64,
    ascent: f64,
    descent: f64,
    leading: f64,
}

struct ParleyFace {
    contexts: Arc<Mutex<Contexts>>,
    family: Family,
    display_scale: f32,
    quantize: bool,
}

impl ParleyFace {
    fn measure(&self, text: &str, size: f64) -> LineMetrics {
        let text = text.split('\n').next().unwrap_or("");
        if text.is_empty() {
            return LineMetrics::default();
        }

        let scale = self.display_scale.max(1.0e-6);
        let mut guard = self.contexts.lock().unwrap_or_else(PoisonError::into_inner);
        let Contexts { font_cx, layout_cx } = &mut *guard;

        let mut builder = layout_cx.ranged_builder(font_cx, text, scale, self.quantize);
        builder.push_default(StyleProperty::FontSize(font_size_f32(size)));
        builder.push_default(StyleProperty::FontStack(self.family.font_stack()));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(
            self.family.weight,
        )));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, AlignmentOptions::default());

        let Some(line) = layout.lines().next() else {
            return LineMetrics::default();
        };
        let m = line.metrics();
        let scale = f64::from(scale);
        LineMetrics {
            advance: f64::from(m.advance) / scale,
            ascent: f64::from(m.ascent) / scale,
            descent: f64::from(m.descent) / scale,
            leading: f64::from(m.leading) / scale,
        }
    }
}

impl FontFace for ParleyFace {
    fn extents(&self, size: f64) -> FontExtents {
        let m = self.measure(EXTENTS_PROBE, size);
        FontExtents {
            ascent: m.ascent,
            descent: m.descent,
            line_height: m.ascent + m.descent + m.leading,
        }
    }

    fn advance(&self, text: &str, size: f64) -> f64 {
        self.measure(text, size).advance
    }
}

fn font_size_f32(font_size: f64) -> f32 {
    if !font_size.is_finite() {
        return 0.0;
    }
    let font_size = font_size.max(0.0);
    if font_size >= f64::from(f32::MAX) {
        f32::MAX
    } else {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Value is clamped to f32::MAX above"
        )]
        {
            font_size as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_names_resolve_without_a_lookup() {
        let fonts = ParleyFonts::new();
        let font = fonts.font("serif-roman", 12.0).unwrap();
        assert_eq!(font.name(), "serif-roman");
        assert_eq!(font.size(), 12.0);
    }

    #[test]
    fn parley_widths_are_nonzero_for_nonempty_text() {
        let fonts = ParleyFonts::new();
        let font = fonts.font("sans-serif", 12.0).unwrap();
        assert!(font.width("Hello") > 0.0);
        assert!(font.extents().ascent > 0.0);
        assert_eq!(font.width(""), 0.0);
    }

    #[test]
    fn missing_family_is_an_error() {
        let fonts = ParleyFonts::new();
        let err = fonts
            .font("No Such Family For plt Tests", 12.0)
            .unwrap_err();
        assert!(matches!(err, FontError::UnknownFont(_)));
    }

    #[test]
    fn invalid_size_is_reported_by_the_handle() {
        let fonts = ParleyFonts::new();
        let err = fonts.font("monospace", -3.0).unwrap_err();
        assert_eq!(err, FontError::InvalidSize(-3.0));
    }
}
