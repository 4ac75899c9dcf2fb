use thiserror::Error;

/// Why a literal could not be scanned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The buffer is empty or starts with a NUL byte.
    #[error("empty input")]
    EmptyInput,
    /// Leading whitespace and sign were consumed, but no digit followed.
    #[error("no digits")]
    NoDigits,
    /// The integer does not fit the target type.
    #[error("integer overflow")]
    Overflow,
    /// The size budget ended while the literal continued past it.
    ///
    /// Callers that stream their input can retry with a larger window.
    #[error("literal truncated by size budget")]
    Truncated,
}

/// A failed scan: the [`ErrorKind`] and the byte offset where it was decided.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} at byte {offset}")]
pub struct ScanError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Offset into the buffer, never past the size budget.
    pub offset: usize,
}

impl ScanError {
    pub(crate) const fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

impl From<ScanError> for ErrorKind {
    fn from(err: ScanError) -> Self {
        err.kind
    }
}
