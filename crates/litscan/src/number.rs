use core::fmt;

/// A scanned literal, distinguishing integers from decimals.
///
/// A literal is a [`Number::Float`] exactly when a decimal point was
/// consumed; `1.` and `1.0` are both floats, `1` is an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    /// No decimal point.
    Integer(i64),
    /// Has a decimal point.
    Float(f64),
}

impl Number {
    /// Whether this literal had no decimal point.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// The integer value, if this is an integer literal.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Integer(i) => Some(i),
            Number::Float(_) => None,
        }
    }

    /// The value as a double. Integers beyond 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => i.fmt(f),
            Number::Float(x) => x.fmt(f),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width integer types the scanner can fold digits into.
///
/// Implemented for every primitive integer type. The fold runs in the sign
/// of the literal (`acc * 10 - digit` for negative literals), so the most
/// negative value of a signed type is reachable and every out-of-range
/// step is caught before it happens.
pub trait Integer: Copy + sealed::Sealed {
    /// The starting accumulator.
    const ZERO: Self;

    /// One fold step, or `None` if the result is not representable.
    fn push_digit(self, digit: u8, negative: bool) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Integer for $ty {
            const ZERO: Self = 0;

            #[inline]
            fn push_digit(self, digit: u8, negative: bool) -> Option<Self> {
                let digit = Self::try_from(digit).ok()?;
                let shifted = self.checked_mul(10)?;
                if negative {
                    shifted.checked_sub(digit)
                } else {
                    shifted.checked_add(digit)
                }
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// `10^exp` by repeated multiplication: exact in `u64` while it fits, then
/// continued in `f64`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn power_of_ten(exp: u32) -> f64 {
    let mut exact: u64 = 1;
    let mut done = 0;
    while done < exp {
        match exact.checked_mul(10) {
            Some(next) => exact = next,
            None => break,
        }
        done += 1;
    }

    let mut power = exact as f64;
    while done < exp {
        power *= 10.0;
        done += 1;
    }
    power
}
