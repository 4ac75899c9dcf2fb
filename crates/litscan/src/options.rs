/// Configuration options for the literal scanner.
///
/// These options control which leading bytes are skipped and which sign
/// bytes are accepted before the digits of a literal.
///
/// # Examples
///
/// ```rust
/// use litscan::{LiteralScanner, ScanOptions, SignPolicy, Whitespace};
///
/// let scanner = LiteralScanner::new(ScanOptions {
///     whitespace: Whitespace::None,
///     sign: SignPolicy::NegativeOnly,
/// });
/// assert!(scanner.integer(b" 1", 2).is_err());
/// assert_eq!(scanner.integer(b"-7", 2).unwrap().value, -7);
/// ```
///
/// # Default
///
/// The defaults skip every control byte and accept either sign, which is
/// the behavior of [`parse_integer`](crate::parse_integer) and friends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanOptions {
    /// Which bytes count as insignificant leading whitespace.
    ///
    /// # Default
    ///
    /// [`Whitespace::Control`]
    pub whitespace: Whitespace,

    /// Which sign bytes may precede the digits.
    ///
    /// # Default
    ///
    /// [`SignPolicy::Optional`]
    pub sign: SignPolicy,
}

/// Leading bytes skipped before the sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Whitespace {
    /// Any byte in `1..=32`: space plus every ASCII control character,
    /// including bell and vertical tab. NUL is never skipped.
    #[default]
    Control,
    /// Space, horizontal tab, line feed, form feed and carriage return.
    Ascii,
    /// Nothing is skipped; the literal must start at the first byte.
    None,
}

impl Whitespace {
    #[inline]
    pub(crate) fn skips(self, b: u8) -> bool {
        match self {
            Whitespace::Control => (1..=b' ').contains(&b),
            Whitespace::Ascii => b.is_ascii_whitespace(),
            Whitespace::None => false,
        }
    }
}

/// Sign bytes accepted in front of the digits.
///
/// A sign byte that is not accepted is left unconsumed, so the scan stops
/// there and reports [`ErrorKind::NoDigits`](crate::ErrorKind::NoDigits).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignPolicy {
    /// Either `+` or `-`.
    #[default]
    Optional,
    /// Only `-`.
    NegativeOnly,
    /// Unsigned literals only.
    Forbidden,
}

impl SignPolicy {
    /// Returns `Some(negative)` when `b` is an accepted sign byte.
    #[inline]
    pub(crate) fn accepts(self, b: u8) -> Option<bool> {
        match (self, b) {
            (SignPolicy::Optional, b'+') => Some(false),
            (SignPolicy::Optional | SignPolicy::NegativeOnly, b'-') => Some(true),
            _ => None,
        }
    }
}
