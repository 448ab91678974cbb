//! signature.rs
//! Magic-number signatures that mark the true start of a payload.
//!
//! Design notes:
//! - Owned and non-empty; an empty signature would match at offset 0 and
//!   silently accept garbage.
//! - The decoder is format-agnostic: PNG is only the default.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::PNG_SIGNATURE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("signature must contain at least one byte")]
    Empty,

    #[error("invalid signature hex: {0}")]
    InvalidHex(String),
}

/// Fixed leading byte sequence identifying a binary format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, SignatureError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(SignatureError::Empty);
        }
        Ok(Self(bytes))
    }

    /// The 8-byte PNG magic `89 50 4E 47 0D 0A 1A 0A`.
    pub fn png() -> Self {
        Self(PNG_SIGNATURE.to_vec())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Offset of the first contiguous occurrence in `haystack`.
    ///
    /// Earliest offset wins: padding is assumed to precede valid data.
    pub fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        if haystack.len() < self.0.len() {
            return None;
        }
        haystack
            .windows(self.0.len())
            .position(|window| window == self.0.as_slice())
    }

    /// True when `data` begins with this signature.
    pub fn is_prefix_of(&self, data: &[u8]) -> bool {
        data.starts_with(&self.0)
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::png()
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Lowercase hex, no separators.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

/// Parse from hex text; whitespace between digits is ignored (`"89 50 4e 47"`).
impl FromStr for Signature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = hex::decode(&digits).map_err(|e| SignatureError::InvalidHex(e.to_string()))?;
        Self::new(bytes)
    }
}
