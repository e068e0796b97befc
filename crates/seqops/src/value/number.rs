use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Number(f64);

impl Number {
    pub const NAN: Self = Self(f64::NAN);
    pub const INFINITY: Self = Self(f64::INFINITY);
    pub const NEG_INFINITY: Self = Self(f64::NEG_INFINITY);
    pub const NEG_ZERO: Self = Self(-0.);
    pub const ONE: Self = Self(1.);

    /// Below this magnitude numbers are written in exponent notation
    const SMALLEST_DECIMAL: f64 = 1e-6;

    /// From this magnitude on numbers are written in exponent notation
    const LARGEST_DECIMAL: f64 = 1e21;

    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.
    }

    #[must_use]
    pub fn add(&self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl fmt::Display for Number {
    /// Writes the shortest form that reads back as the same number.
    ///
    /// Integral values have no fractional part, both zeros are written as `0`
    /// and the non-finite values are `NaN`, `Infinity` and `-Infinity`.
    /// Magnitudes of at least `1e21` or below `1e-6` use exponent notation
    /// with an explicitly signed exponent, like `1e+21` or `1.5e-7`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }

        if self.0 == f64::INFINITY {
            return f.write_str("Infinity");
        }

        if self.0 == f64::NEG_INFINITY {
            return f.write_str("-Infinity");
        }

        if self.is_zero() {
            return f.write_str("0");
        }

        let magnitude = self.0.abs();
        if (Self::SMALLEST_DECIMAL..Self::LARGEST_DECIMAL).contains(&magnitude) {
            return write!(f, "{}", self.0);
        }

        let exponential = format!("{:e}", self.0);
        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            },
            _ => f.write_str(&exponential),
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self(value.into())
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Self(value as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_add() {
        let any = Number::new(42.);
        assert!(Number::NAN.add(any).is_nan());
        assert!(any.add(Number::NAN).is_nan());

        assert!(Number::NEG_INFINITY.add(Number::INFINITY).is_nan());
        assert_eq!(Number::INFINITY.add(any), Number::INFINITY);
        assert_eq!(any.add(Number::ONE), Number::new(43.));
    }

    #[test]
    fn number_to_string() {
        assert_eq!(Number::new(25.).to_string(), "25");
        assert_eq!(Number::new(1.5).to_string(), "1.5");
        assert_eq!(Number::new(-3.).to_string(), "-3");
        assert_eq!(Number::NEG_ZERO.to_string(), "0");
        assert_eq!(Number::NAN.to_string(), "NaN");
        assert_eq!(Number::INFINITY.to_string(), "Infinity");
        assert_eq!(Number::NEG_INFINITY.to_string(), "-Infinity");
    }

    #[test]
    fn number_to_string_exponent_notation() {
        assert_eq!(Number::new(1e20).to_string(), "100000000000000000000");
        assert_eq!(Number::new(1e21).to_string(), "1e+21");
        assert_eq!(Number::new(-1e21).to_string(), "-1e+21");
        assert_eq!(Number::new(1.5e300).to_string(), "1.5e+300");

        assert_eq!(Number::new(1e-6).to_string(), "0.000001");
        assert_eq!(Number::new(1e-7).to_string(), "1e-7");
        assert_eq!(Number::new(-2.5e-8).to_string(), "-2.5e-8");
    }
}
