use crate::types::DecodeError;

/// Pair consecutive hex digits into bytes, order preserved.
///
/// Mixed case is accepted. Called standalone, `digits` is treated as a single
/// line, so an illegal character reports line 1 and its 1-based position.
pub fn materialize(digits: &str) -> Result<Vec<u8>, DecodeError> {
    if digits.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    if let Some((col, ch)) = digits.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(DecodeError::InvalidHexCharacter { ch, line: 1, column: col + 1 });
    }
    if digits.len() % 2 != 0 {
        return Err(DecodeError::OddLength { digits: digits.len() });
    }

    // Digits are ASCII hex and even in count here, so `hex` only fails on a
    // length problem.
    hex::decode(digits).map_err(|_| DecodeError::OddLength { digits: digits.len() })
}
