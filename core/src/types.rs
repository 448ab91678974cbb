//! Decode error taxonomy.
//!
//! Every failure carries the position where it was detected. The core never
//! recovers past one of these; presenting them is the caller's job.

use thiserror::Error;

/// Coarse error classes, stable for callers that branch on failure type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No usable text at all.
    EmptyInput,
    /// Text cannot be reduced to hex digit pairs.
    MalformedHex,
    /// Hex decoded, but the signature is absent.
    NoSignatureFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input was empty or held no hex digits.
    #[error("no hex data found in input")]
    EmptyInput,

    /// A character outside `[0-9a-fA-F]` where the layout expects hex.
    /// `line` and `column` are 1-based, counted in characters.
    #[error("invalid hex character {ch:?} at line {line}, column {column}")]
    InvalidHexCharacter { ch: char, line: usize, column: usize },

    /// Hex digit count is odd; each byte needs two digits.
    #[error("hex digit count is odd ({digits}); each byte requires 2 hex digits")]
    OddLength { digits: usize },

    /// Signature not present anywhere in the `scanned` candidate bytes.
    #[error("signature {signature} not found in {scanned} decoded bytes")]
    NoSignatureFound { signature: String, scanned: usize },
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::EmptyInput => ErrorKind::EmptyInput,
            DecodeError::InvalidHexCharacter { .. } | DecodeError::OddLength { .. } => {
                ErrorKind::MalformedHex
            }
            DecodeError::NoSignatureFound { .. } => ErrorKind::NoSignatureFound,
        }
    }

    /// True for every failure that stems from the text itself.
    /// Empty input is reported as a subtype of malformed hex.
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind(), ErrorKind::EmptyInput | ErrorKind::MalformedHex)
    }
}
