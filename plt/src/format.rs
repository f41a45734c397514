// Copyright 2025 the plt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

use alloc::format;
use alloc::string::{String, ToString};

/// Formats `value` in the general numeric style used for tick labels.
///
/// Uses the shortest representation that round-trips. Values whose decimal
/// exponent is below `-4` or at least `6` are written in scientific notation
/// with a signed, two-digit exponent (`1e+06`, `2.5e-07`); everything else is
/// written as a plain decimal.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let sci = format!("{value:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };
    if (-4..6).contains(&exp) {
        format!("{value}")
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(50.0), "50");
        assert_eq!(format_general(100.0), "100");
        assert_eq!(format_general(-7.0), "-7");
        assert_eq!(format_general(123_456.0), "123456");
    }

    #[test]
    fn fractions_use_shortest_round_trip() {
        assert_eq!(format_general(2.5), "2.5");
        assert_eq!(format_general(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_general(0.0001), "0.0001");
    }

    #[test]
    fn large_and_small_magnitudes_switch_to_exponent_form() {
        assert_eq!(format_general(1.0e6), "1e+06");
        assert_eq!(format_general(1_234_567.0), "1.234567e+06");
        assert_eq!(format_general(1.0e-5), "1e-05");
        assert_eq!(format_general(-2.5e-7), "-2.5e-07");
        assert_eq!(format_general(1.0e100), "1e+100");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_general(f64::NAN), "NaN");
        assert_eq!(format_general(f64::INFINITY), "+Inf");
        assert_eq!(format_general(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_general(-0.0), "-0");
    }
}
