// Copyright 2025 the plt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ticks and tick generators.
//!
//! A [`TickGenerator`] decides where the ticks of an axis go and how they are
//! labelled. Axes only see the generated [`Tick`] list, so placement policies
//! (integer-only, dates, categories, ...) can be added without touching the
//! axis code.

use alloc::string::String;
use alloc::vec::Vec;

use crate::format::format_general;

/// A single position on an axis.
///
/// A tick with an empty label is a *minor* tick: it is drawn at half length
/// and has no text. Any non-empty label makes it a *major* tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position in data coordinates.
    pub value: f64,
    /// Label text; empty for minor ticks.
    pub label: String,
}

impl Tick {
    /// A labelled tick.
    pub fn major(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// An unlabelled tick.
    pub fn minor(value: f64) -> Self {
        Self {
            value,
            label: String::new(),
        }
    }

    /// Returns `true` if this tick has no label.
    pub fn is_minor(&self) -> bool {
        self.label.is_empty()
    }

    /// Offset of the start of this tick's mark for a major mark `length`.
    ///
    /// Minor marks start half way along so they end up half as long.
    pub fn length_offset(&self, length: f64) -> f64 {
        if self.is_minor() { length / 2.0 } else { 0.0 }
    }
}

/// Places ticks over a data range.
pub trait TickGenerator {
    /// Returns the ticks for `[min, max]`, in drawing order.
    fn marks(&self, min: f64, max: f64) -> Vec<Tick>;
}

impl<F> TickGenerator for F
where
    F: Fn(f64, f64) -> Vec<Tick>,
{
    fn marks(&self, min: f64, max: f64) -> Vec<Tick> {
        self(min, max)
    }
}

/// Five ticks at `0`, `1/4`, `1/2`, `3/4` and `1` of the range.
///
/// The ends and the middle are major ticks labelled with
/// [`format_general`]; the quarters are minor. The positions are not rounded
/// to "nice" numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTicks;

impl TickGenerator for DefaultTicks {
    fn marks(&self, min: f64, max: f64) -> Vec<Tick> {
        let span = max - min;
        let mid = min + span / 2.0;
        alloc::vec![
            Tick::major(min, format_general(min)),
            Tick::minor(min + span / 4.0),
            Tick::major(mid, format_general(mid)),
            Tick::minor(min + 3.0 * span / 4.0),
            Tick::major(max, format_general(max)),
        ]
    }
}

/// A fixed list of ticks, returned regardless of the range.
///
/// Useful for categorical axes and hand-placed ticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstantTicks(pub Vec<Tick>);

impl ConstantTicks {
    /// Wraps `ticks`.
    pub fn new(ticks: impl Into<Vec<Tick>>) -> Self {
        Self(ticks.into())
    }
}

impl FromIterator<Tick> for ConstantTicks {
    fn from_iter<I: IntoIterator<Item = Tick>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TickGenerator for ConstantTicks {
    fn marks(&self, _min: f64, _max: f64) -> Vec<Tick> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn empty_label_means_minor() {
        assert!(Tick::minor(1.0).is_minor());
        assert!(Tick::major(1.0, "").is_minor());
        assert!(!Tick::major(1.0, "x").is_minor());
    }

    #[test]
    fn length_offset_halves_minor_marks_only() {
        for len in [0.0, 1.0, 7.2, -3.0] {
            assert_eq!(Tick::minor(0.0).length_offset(len), len / 2.0);
            assert_eq!(Tick::major(0.0, "x").length_offset(len), 0.0);
        }
    }

    #[test]
    fn default_ticks_split_the_range_in_quarters() {
        let ticks = DefaultTicks.marks(0.0, 100.0);
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, [0.0, 25.0, 50.0, 75.0, 100.0]);

        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "", "50", "", "100"]);
        assert!(ticks[1].is_minor());
        assert!(ticks[3].is_minor());
    }

    #[test]
    fn default_ticks_keep_the_endpoints_exact() {
        let ticks = DefaultTicks.marks(-1.5, 3.25);
        assert_eq!(ticks.first().map(|t| t.value), Some(-1.5));
        assert_eq!(ticks.last().map(|t| t.value), Some(3.25));
        assert_eq!(ticks[0].label, "-1.5");
        assert_eq!(ticks[4].label, "3.25");
    }

    #[test]
    fn constant_ticks_ignore_the_range() {
        let fixed = vec![Tick::major(10.0, "a"), Tick::minor(20.0)];
        let generator = ConstantTicks::new(fixed.clone());
        assert_eq!(generator.marks(0.0, 1.0), fixed);
        assert_eq!(generator.marks(-100.0, -50.0), fixed);
        assert_eq!(generator.marks(f64::INFINITY, f64::NEG_INFINITY), fixed);
    }

    #[test]
    fn closures_are_generators() {
        let integers = |min: f64, max: f64| {
            let mut out = Vec::new();
            let mut v = min;
            while v <= max {
                out.push(Tick::major(v, format_general(v)));
                v += 1.0;
            }
            out
        };
        let ticks = integers.marks(0.0, 3.0);
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[3].label, "3");
    }
}
