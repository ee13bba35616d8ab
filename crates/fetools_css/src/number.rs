//! Number rounding and printing for CSS output

use std::fmt;

/// Round to the nearest integer, with ties going toward positive infinity.
///
/// This is the browser `Math.round` rule: `js_round(2.5) == 3.0` and
/// `js_round(-2.5) == -2.0`. Non-finite input is returned unchanged.
pub fn js_round(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to 4 decimal places.
pub fn round4(x: f64) -> f64 {
    js_round(x * 10_000.0) / 10_000.0
}

/// Print `x` with exactly `digits` decimals, rounding ties up.
pub fn to_fixed(x: f64, digits: usize) -> String {
    if !x.is_finite() {
        return JsNumber(x).to_string();
    }
    let scale = 10f64.powi(digits as i32);
    let rounded = js_round(x * scale) / scale + 0.0;
    format!("{rounded:.digits$}")
}

/// Display wrapper printing a number the way browsers serialize it.
///
/// Shortest round-trip decimal, no trailing `.0`, `-0` as `0`, exponent
/// notation outside `[1e-6, 1e21)`, and `NaN` / `Infinity` for non-finite
/// values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JsNumber(pub f64);

impl fmt::Display for JsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("NaN");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if v == 0.0 {
            return f.write_str("0");
        }

        let abs = v.abs();
        if !(1e-6..1e21).contains(&abs) {
            let s = format!("{v:e}");
            return match s.split_once('e') {
                Some((mantissa, exp)) if !exp.starts_with('-') => {
                    write!(f, "{mantissa}e+{exp}")
                }
                _ => f.write_str(&s),
            };
        }
        write!(f, "{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_round_ties_toward_positive_infinity() {
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(-2.6), -3.0);
        assert_eq!(js_round(0.49), 0.0);
        assert!(js_round(f64::NAN).is_nan());
    }

    #[test]
    fn round4_keeps_four_decimals() {
        assert_eq!(round4(1.23456), 1.2346);
        assert_eq!(round4(14.0), 14.0);
    }

    #[test]
    fn prints_integers_without_fraction() {
        assert_eq!(JsNumber(14.0).to_string(), "14");
        assert_eq!(JsNumber(1120.0).to_string(), "1120");
        assert_eq!(JsNumber(-4.0).to_string(), "-4");
    }

    #[test]
    fn prints_shortest_fraction() {
        assert_eq!(JsNumber(0.875).to_string(), "0.875");
        assert_eq!(JsNumber(1.125).to_string(), "1.125");
        assert_eq!(JsNumber(0.1 + 0.2).to_string(), "0.30000000000000004");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(JsNumber(-0.0).to_string(), "0");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(JsNumber(f64::NAN).to_string(), "NaN");
        assert_eq!(JsNumber(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(JsNumber(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn exponent_notation_at_the_extremes() {
        assert_eq!(JsNumber(1e-7).to_string(), "1e-7");
        assert_eq!(JsNumber(1e21).to_string(), "1e+21");
    }

    #[test]
    fn to_fixed_rounds_ties_up() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.1, 2), "0.10");
        assert_eq!(to_fixed(1.0, 2), "1.00");
        assert_eq!(to_fixed(0.15, 2), "0.15");
    }
}
