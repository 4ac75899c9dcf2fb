//! Numeric tokens of the bencode format.
//!
//! Bencode carries numbers in two places: integer tokens (`i-42e`) and the
//! length prefix of byte strings (`4:spam`). Both are plain decimal
//! literals with stricter rules than [`parse_integer`](crate::parse_integer):
//! no whitespace, no `+`, no leading zeros and no negative zero. These
//! helpers only convert the number; walking lists and dictionaries is left
//! to the decoder that calls them.

use thiserror::Error;

use crate::{
    error::ScanError,
    options::{ScanOptions, SignPolicy, Whitespace},
    scanner::{LiteralScanner, Scanned},
};

const INTEGER_PREFIX: u8 = b'i';
const INTEGER_TERMINATOR: u8 = b'e';
const LENGTH_TERMINATOR: u8 = b':';

const INTEGER_SCANNER: LiteralScanner = LiteralScanner::new(ScanOptions {
    whitespace: Whitespace::None,
    sign: SignPolicy::NegativeOnly,
});

const LENGTH_SCANNER: LiteralScanner = LiteralScanner::new(ScanOptions {
    whitespace: Whitespace::None,
    sign: SignPolicy::Forbidden,
});

/// A malformed numeric bencode token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenError {
    /// The token does not start with the expected byte.
    #[error("expected {expected:?} at byte 0")]
    UnexpectedPrefix {
        /// The required first byte.
        expected: char,
    },
    /// The digits themselves did not scan.
    #[error("literal error: {0}")]
    Literal(#[from] ScanError),
    /// A multi-digit number starts with `0`.
    #[error("leading zero at byte {0}")]
    LeadingZero(usize),
    /// `-0`, which bencode forbids.
    #[error("negative zero at byte {0}")]
    NegativeZero(usize),
    /// The digits are not followed by the terminator.
    #[error("expected {expected:?} at byte {offset}")]
    MissingTerminator {
        /// The required terminator.
        expected: char,
        /// Where it was expected.
        offset: usize,
    },
}

/// Decodes an integer token `i<digits>e` at the start of `buffer`.
///
/// `consumed` covers the whole token, from `i` through `e`.
///
/// ```rust
/// use litscan::bencode::decode_integer;
///
/// let n = decode_integer(b"i-42eli1ee").unwrap();
/// assert_eq!((n.value, n.consumed), (-42, 5));
/// ```
///
/// # Errors
///
/// [`TokenError`] for a missing `i` or `e`, leading zeros, `-0`, or digits
/// that do not scan (including `i64` overflow).
pub fn decode_integer(buffer: &[u8]) -> Result<Scanned<i64>, TokenError> {
    let Some(body) = buffer.strip_prefix(&[INTEGER_PREFIX]) else {
        return Err(TokenError::UnexpectedPrefix {
            expected: char::from(INTEGER_PREFIX),
        });
    };

    let n = INTEGER_SCANNER
        .integer(body, body.len())
        .map_err(|err| shift(err, 1))?;
    let digits = strict_digits(body, n.consumed, 1)?;
    if n.value == 0 && digits.len() < n.consumed {
        return Err(TokenError::NegativeZero(1));
    }

    let end = 1 + n.consumed;
    expect_terminator(buffer, end, INTEGER_TERMINATOR)?;
    Ok(Scanned {
        value: n.value,
        consumed: end + 1,
    })
}

/// Decodes a byte-string length prefix `<digits>:` at the start of `buffer`.
///
/// `consumed` covers the digits and the colon, so the string payload starts
/// at `buffer[consumed..]`.
///
/// ```rust
/// use litscan::bencode::decode_length;
///
/// let n = decode_length(b"4:spam").unwrap();
/// assert_eq!((n.value, n.consumed), (4, 2));
/// ```
///
/// # Errors
///
/// [`TokenError`] for a missing `:`, leading zeros, or digits that do not
/// scan (including `usize` overflow).
pub fn decode_length(buffer: &[u8]) -> Result<Scanned<usize>, TokenError> {
    let n = LENGTH_SCANNER.integer_as::<usize>(buffer, buffer.len())?;
    strict_digits(buffer, n.consumed, 0)?;
    expect_terminator(buffer, n.consumed, LENGTH_TERMINATOR)?;
    Ok(Scanned {
        value: n.value,
        consumed: n.consumed + 1,
    })
}

/// The digit run of a scanned literal, rejecting redundant leading zeros.
fn strict_digits(literal: &[u8], consumed: usize, base: usize) -> Result<&[u8], TokenError> {
    let scanned = &literal[..consumed];
    let digits = scanned.strip_prefix(b"-").unwrap_or(scanned);
    if digits.len() > 1 && digits[0] == b'0' {
        return Err(TokenError::LeadingZero(base + consumed - digits.len()));
    }
    Ok(digits)
}

fn expect_terminator(buffer: &[u8], offset: usize, terminator: u8) -> Result<(), TokenError> {
    if buffer.get(offset) == Some(&terminator) {
        Ok(())
    } else {
        Err(TokenError::MissingTerminator {
            expected: char::from(terminator),
            offset,
        })
    }
}

fn shift(err: ScanError, by: usize) -> ScanError {
    ScanError {
        offset: err.offset + by,
        ..err
    }
}
