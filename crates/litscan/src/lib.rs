//! Bounded-window decimal literal scanning.
//!
//! Converts the decimal literal at the front of a byte window into an
//! integer or a double, reporting how many bytes it consumed. The window is
//! the first `size` bytes of the buffer; nothing past it is consumed, and a
//! literal that runs into the bound is reported as
//! [`ErrorKind::Truncated`] instead of being silently shortened.
//!
//! ```rust
//! use litscan::{ErrorKind, Number, parse_integer, parse_number};
//!
//! let n = parse_integer(b"\t-17,", 5).unwrap();
//! assert_eq!((n.value, n.consumed), (-17, 4));
//!
//! let n = parse_number(b"2.5]", 4).unwrap();
//! assert_eq!(n.value, Number::Float(2.5));
//!
//! let err = parse_integer(b"99999999999999999999", 20).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::Overflow);
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod bencode;
mod error;
mod number;
mod options;
mod scanner;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ScanError};
pub use number::{Integer, Number};
pub use options::{ScanOptions, SignPolicy, Whitespace};
#[cfg(any(test, feature = "fuzzing"))]
#[doc(hidden)]
pub use scanner::window_len;
pub use scanner::{
    LiteralScanner, ParseResult, Scanned, parse_float, parse_integer, parse_integer_as,
    parse_number,
};
