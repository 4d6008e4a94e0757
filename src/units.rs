//! Engineering-prefix formatting of component values.
//!
//! ```
//! use sallenkey::units::Engineering;
//!
//! assert_eq!(format!("{}", Engineering::new(4700.0_f64, "Ohms")), "4.7 kOhms");
//! assert_eq!(format!("{:.2}", Engineering::new(2.2e-8_f64, "F")), "22.00 nF");
//! ```

use crate::traits::FloatScalar;

/// SI prefixes in ascending order: `(upper bound of |v|, divisor, prefix)`.
const PREFIXES: [(f64, f64, &str); 7] = [
    (1.0e-9, 1.0e-12, "p"),
    (1.0e-6, 1.0e-9, "n"),
    (1.0e-3, 1.0e-6, "u"),
    (1.0, 1.0e-3, "m"),
    (1.0e3, 1.0, ""),
    (1.0e6, 1.0e3, "k"),
    (1.0e9, 1.0e6, "M"),
];

/// A value paired with a unit, displayed as `"{scaled} {prefix}{unit}"`.
///
/// The prefix steps by 10³ from `p` to `G`; anything below 1 n is shown in
/// `p` and anything at or above 1 G in `G`. Zero and non-finite values are
/// printed without a prefix. A precision given to the formatter applies to
/// the scaled number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engineering<T> {
    value: T,
    unit: &'static str,
}

impl<T: FloatScalar> Engineering<T> {
    /// Wrap `value` for display with `unit` (e.g. `"F"`, `"Ohms"`).
    pub fn new(value: T, unit: &'static str) -> Self {
        Self { value, unit }
    }

    /// The scaled mantissa and prefix that will be displayed.
    pub fn split(&self) -> (T, &'static str) {
        let v = self.value;
        if v == T::zero() || !v.is_finite() {
            return (v, "");
        }
        let mag = v.abs();
        for &(upper, divisor, prefix) in PREFIXES.iter() {
            if mag < T::lit(upper) {
                return (v / T::lit(divisor), prefix);
            }
        }
        (v / T::lit(1.0e9), "G")
    }
}

impl<T: FloatScalar> core::fmt::Display for Engineering<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (scaled, prefix) = self.split();
        match f.precision() {
            Some(p) => write!(f, "{scaled:.p$} {prefix}{}", self.unit),
            None => write!(f, "{scaled} {prefix}{}", self.unit),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    fn prefix_of(v: f64) -> &'static str {
        Engineering::new(v, "F").split().1
    }

    #[test]
    fn prefix_boundaries() {
        assert_eq!(prefix_of(1.0e-12), "p");
        assert_eq!(prefix_of(999.0e-12), "p");
        assert_eq!(prefix_of(1.0e-9), "n");
        assert_eq!(prefix_of(1.0e-6), "u");
        assert_eq!(prefix_of(1.0e-3), "m");
        assert_eq!(prefix_of(1.0), "");
        assert_eq!(prefix_of(999.0), "");
        assert_eq!(prefix_of(1.0e3), "k");
        assert_eq!(prefix_of(1.0e6), "M");
        assert_eq!(prefix_of(1.0e9), "G");
        assert_eq!(prefix_of(3.3e12), "G");
    }

    #[test]
    fn negative_values_use_magnitude() {
        let (scaled, prefix) = Engineering::new(-4.7e3_f64, "Ohms").split();
        assert_eq!(prefix, "k");
        assert!((scaled + 4.7).abs() < 1e-12);
    }

    #[test]
    fn zero_and_non_finite() {
        assert_eq!(format!("{}", Engineering::new(0.0_f64, "F")), "0 F");
        assert_eq!(format!("{}", Engineering::new(f64::INFINITY, "Ohms")), "inf Ohms");
    }

    #[test]
    fn precision_applies_to_mantissa() {
        assert_eq!(format!("{:.3}", Engineering::new(1.0e-9_f64, "F")), "1.000 nF");
        assert_eq!(format!("{:.1}", Engineering::new(15.9e3_f32, "Ohms")), "15.9 kOhms");
    }
}
