//! Scanner: converts one decimal literal at the front of a bounded window.
//!
//! What it does
//! - Reads from `&buffer[..min(size, buffer.len())]`, never past it. The
//!   bytes after the window are looked at for exactly one purpose: deciding
//!   whether a literal that hit the window bound was cut short.
//! - Walks `Start → SkipWhitespace → ReadSign → ReadIntegerDigits →
//!   [ReadDecimalPoint → ReadFractionDigits] → Done`. Whitespace, sign,
//!   digits and the decimal point all draw from the same running budget.
//! - Folds digits as it reads them through an [`Accumulator`], so integer
//!   overflow is caught at the digit that causes it.
//!
//! Invariants
//! - `Done` is reached only if at least one integer digit was read.
//! - `consumed <= size` and `consumed <= buffer.len()`.
//! - A NUL byte is never skipped and never a digit, so it ends the literal.
//!
//! Example
//! ```rust
//! use litscan::{ErrorKind, parse_float, parse_integer};
//!
//! let n = parse_integer(b"  +123", 6).unwrap();
//! assert_eq!((n.value, n.consumed), (123, 6));
//!
//! // The window stops at `-42`; `xyz` is never read.
//! let n = parse_integer(b"-42xyz", 3).unwrap();
//! assert_eq!((n.value, n.consumed), (-42, 3));
//!
//! // A literal that continues past the window is reported, not guessed.
//! assert_eq!(parse_integer(b"12345", 3).unwrap_err().kind, ErrorKind::Truncated);
//!
//! let x = parse_float(b"3.14159", 7).unwrap();
//! assert!((x.value - 3.14159).abs() < 1e-9);
//! ```

use bstr::BStr;

use crate::{
    error::{ErrorKind, ScanError},
    number::{Integer, Number, power_of_ten},
    options::ScanOptions,
};

/// Fractional places past this contribute exactly zero: `10^309` is
/// infinite as an `f64`.
const LAST_FINITE_PLACE: u32 = 308;

/// A successfully scanned literal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scanned<T> {
    /// The signed value.
    pub value: T,
    /// Bytes consumed: leading whitespace, sign, digits and decimal point.
    pub consumed: usize,
}

impl<T> Scanned<T> {
    /// The consumed prefix of `buffer`, for diagnostics.
    ///
    /// `buffer` should be the slice this literal was scanned from.
    #[must_use]
    pub fn lexeme<'a>(&self, buffer: &'a [u8]) -> &'a BStr {
        BStr::new(buffer.get(..self.consumed).unwrap_or(buffer))
    }

    /// Transforms the value, keeping the consumed count.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Scanned<U> {
        Scanned {
            value: f(self.value),
            consumed: self.consumed,
        }
    }
}

/// Outcome of one scan.
pub type ParseResult<T> = Result<Scanned<T>, ScanError>;

/// A literal scanner with fixed [`ScanOptions`].
///
/// The free functions ([`parse_integer`], [`parse_float`], ...) are this
/// scanner with default options.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralScanner {
    options: ScanOptions,
}

impl LiteralScanner {
    /// Creates a scanner with the given options.
    #[must_use]
    pub const fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// The options this scanner was built with.
    #[must_use]
    pub const fn options(&self) -> ScanOptions {
        self.options
    }

    /// Scans a signed 64-bit integer literal.
    ///
    /// # Errors
    ///
    /// See [`ErrorKind`] for the failure conditions.
    pub fn integer(&self, buffer: &[u8], size: usize) -> ParseResult<i64> {
        self.integer_as(buffer, size)
    }

    /// Scans an integer literal into any primitive integer type.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Overflow`] when the literal does not fit `T`, including
    /// a negative literal for an unsigned `T`. See [`ErrorKind`] for the rest.
    pub fn integer_as<T: Integer>(&self, buffer: &[u8], size: usize) -> ParseResult<T> {
        scan(buffer, size, self.options, IntegerAcc(T::ZERO))
    }

    /// Scans a decimal literal with an optional fractional part.
    ///
    /// # Errors
    ///
    /// Never [`ErrorKind::Overflow`]; huge literals saturate to infinity.
    pub fn float(&self, buffer: &[u8], size: usize) -> ParseResult<f64> {
        scan(buffer, size, self.options, FloatAcc(0.0))
    }

    /// Scans a literal as [`Number::Float`] if it has a decimal point and
    /// as [`Number::Integer`] otherwise.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Overflow`] when an integer literal does not fit `i64`.
    pub fn number(&self, buffer: &[u8], size: usize) -> ParseResult<Number> {
        scan(buffer, size, self.options, NumberAcc::default())
    }
}

/// Scans a signed 64-bit integer from the first `size` bytes of `buffer`.
///
/// # Errors
///
/// See [`ErrorKind`].
pub fn parse_integer(buffer: &[u8], size: usize) -> ParseResult<i64> {
    LiteralScanner::default().integer(buffer, size)
}

/// Scans any primitive integer type from the first `size` bytes of `buffer`.
///
/// # Errors
///
/// See [`LiteralScanner::integer_as`].
pub fn parse_integer_as<T: Integer>(buffer: &[u8], size: usize) -> ParseResult<T> {
    LiteralScanner::default().integer_as(buffer, size)
}

/// Scans a decimal from the first `size` bytes of `buffer`.
///
/// # Errors
///
/// See [`LiteralScanner::float`].
pub fn parse_float(buffer: &[u8], size: usize) -> ParseResult<f64> {
    LiteralScanner::default().float(buffer, size)
}

/// Scans an integer or decimal from the first `size` bytes of `buffer`.
///
/// # Errors
///
/// See [`LiteralScanner::number`].
pub fn parse_number(buffer: &[u8], size: usize) -> ParseResult<Number> {
    LiteralScanner::default().number(buffer, size)
}

/// Length of the window a scan of `buffer` with budget `size` may read.
#[cfg(any(test, feature = "fuzzing"))]
#[must_use]
pub fn window_len(buffer: &[u8], size: usize) -> usize {
    Cursor::new(buffer, size).window
}

/// Digit sink for one scan.
trait Accumulator {
    type Output;

    /// Whether a decimal point and fractional digits are read.
    const FRACTION: bool;

    /// Folds one integer digit read at `offset`; `false` on overflow.
    fn push_integer(&mut self, digit: u8, negative: bool, offset: usize) -> bool;

    /// Folds the fractional digit at 1-based `place` after the point.
    fn push_fraction(&mut self, _digit: u8, _place: u32) {}

    fn finish(self, negative: bool, fraction: bool) -> Result<Self::Output, ScanError>;
}

struct IntegerAcc<T>(T);

impl<T: Integer> Accumulator for IntegerAcc<T> {
    type Output = T;
    const FRACTION: bool = false;

    #[inline]
    fn push_integer(&mut self, digit: u8, negative: bool, _offset: usize) -> bool {
        match self.0.push_digit(digit, negative) {
            Some(next) => {
                self.0 = next;
                true
            }
            None => false,
        }
    }

    fn finish(self, _negative: bool, _fraction: bool) -> Result<T, ScanError> {
        Ok(self.0)
    }
}

struct FloatAcc(f64);

impl FloatAcc {
    #[inline]
    fn push_place(&mut self, digit: u8, place: u32) {
        if place <= LAST_FINITE_PLACE {
            self.0 += f64::from(digit) * (1.0 / power_of_ten(place));
        }
    }
}

impl Accumulator for FloatAcc {
    type Output = f64;
    const FRACTION: bool = true;

    #[inline]
    fn push_integer(&mut self, digit: u8, _negative: bool, _offset: usize) -> bool {
        self.0 = f64::from(digit) + self.0 * 10.0;
        true
    }

    fn push_fraction(&mut self, digit: u8, place: u32) {
        self.push_place(digit, place);
    }

    fn finish(self, negative: bool, _fraction: bool) -> Result<f64, ScanError> {
        Ok(if negative { -self.0 } else { self.0 })
    }
}

/// Folds both representations; the decimal point picks one at the end.
struct NumberAcc {
    integer: i64,
    overflow_at: Option<usize>,
    float: FloatAcc,
}

impl Default for NumberAcc {
    fn default() -> Self {
        Self {
            integer: 0,
            overflow_at: None,
            float: FloatAcc(0.0),
        }
    }
}

impl Accumulator for NumberAcc {
    type Output = Number;
    const FRACTION: bool = true;

    #[inline]
    fn push_integer(&mut self, digit: u8, negative: bool, offset: usize) -> bool {
        if self.overflow_at.is_none() {
            match self.integer.push_digit(digit, negative) {
                Some(next) => self.integer = next,
                None => self.overflow_at = Some(offset),
            }
        }
        self.float.push_integer(digit, negative, offset)
    }

    fn push_fraction(&mut self, digit: u8, place: u32) {
        self.float.push_place(digit, place);
    }

    fn finish(self, negative: bool, fraction: bool) -> Result<Number, ScanError> {
        if fraction {
            return self.float.finish(negative, fraction).map(Number::Float);
        }
        match self.overflow_at {
            Some(offset) => Err(ScanError::new(ErrorKind::Overflow, offset)),
            None => Ok(Number::Integer(self.integer)),
        }
    }
}

/// Position within the bounded window.
struct Cursor<'src> {
    bytes: &'src [u8],
    window: usize,
    pos: usize,
}

impl<'src> Cursor<'src> {
    fn new(bytes: &'src [u8], size: usize) -> Self {
        Self {
            bytes,
            window: size.min(bytes.len()),
            pos: 0,
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes[..self.window].get(self.pos).copied()
    }

    #[inline]
    fn digit(&self) -> Option<u8> {
        self.peek().filter(u8::is_ascii_digit).map(|b| b - b'0')
    }

    #[inline]
    fn bump(&mut self) {
        debug_assert!(self.pos < self.window);
        self.pos += 1;
    }

    /// Whether the window bound stopped the current phase while the next
    /// byte of the buffer would have continued it.
    fn cut_short(&self, continues: impl Fn(u8) -> bool) -> bool {
        self.pos == self.window && self.bytes.get(self.window).is_some_and(|&b| continues(b))
    }

    fn error(&self, kind: ErrorKind) -> ScanError {
        ScanError::new(kind, self.pos)
    }

    /// Skips leading whitespace and reads the sign. Returns whether the
    /// literal is negative.
    fn prologue(&mut self, options: ScanOptions) -> Result<bool, ScanError> {
        if self.bytes.first().is_none_or(|&b| b == 0) {
            return Err(self.error(ErrorKind::EmptyInput));
        }
        if self.window == 0 {
            return Err(self.error(ErrorKind::Truncated));
        }

        while self.peek().is_some_and(|b| options.whitespace.skips(b)) {
            self.bump();
        }
        if self.cut_short(|b| {
            options.whitespace.skips(b) || options.sign.accepts(b).is_some() || b.is_ascii_digit()
        }) {
            return Err(self.error(ErrorKind::Truncated));
        }

        match self.peek().and_then(|b| options.sign.accepts(b)) {
            Some(negative) => {
                self.bump();
                Ok(negative)
            }
            None => Ok(false),
        }
    }
}

fn scan<A: Accumulator>(
    buffer: &[u8],
    size: usize,
    options: ScanOptions,
    mut acc: A,
) -> ParseResult<A::Output> {
    let mut cursor = Cursor::new(buffer, size);
    let negative = cursor.prologue(options)?;

    let digits_start = cursor.pos;
    while let Some(digit) = cursor.digit() {
        if !acc.push_integer(digit, negative, cursor.pos) {
            return Err(cursor.error(ErrorKind::Overflow));
        }
        cursor.bump();
    }
    if cursor.pos == digits_start {
        let kind = if cursor.cut_short(|b| b.is_ascii_digit()) {
            ErrorKind::Truncated
        } else {
            ErrorKind::NoDigits
        };
        return Err(cursor.error(kind));
    }
    if cursor.cut_short(|b| b.is_ascii_digit() || (A::FRACTION && b == b'.')) {
        return Err(cursor.error(ErrorKind::Truncated));
    }

    let mut fraction = false;
    if A::FRACTION && cursor.peek() == Some(b'.') {
        cursor.bump();
        fraction = true;

        let mut place = 0u32;
        while let Some(digit) = cursor.digit() {
            place = place.saturating_add(1);
            acc.push_fraction(digit, place);
            cursor.bump();
        }
        if cursor.cut_short(|b| b.is_ascii_digit()) {
            return Err(cursor.error(ErrorKind::Truncated));
        }
    }

    let value = acc.finish(negative, fraction)?;
    Ok(Scanned {
        value,
        consumed: cursor.pos,
    })
}
