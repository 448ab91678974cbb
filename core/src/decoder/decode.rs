//! decoder/decode.rs
//!
//! Full decode pipeline: sniff -> extract -> materialize -> scan.
//!
//! Check order is fixed:
//! 1. blank text            -> `EmptyInput`
//! 2. illegal character     -> `InvalidHexCharacter` (first one, in text order)
//! 3. no digits             -> `EmptyInput`
//! 4. odd digit count       -> `OddLength`
//! 5. signature absent      -> `NoSignatureFound`

use tracing::{debug, trace};

use crate::decoder::extract::extract_hex;
use crate::decoder::materialize::materialize;
use crate::decoder::scan::locate_signature;
use crate::decoder::sniff::sniff_style;
use crate::decoder::types::{DecodeOptions, Decoded};
use crate::signature::Signature;
use crate::types::DecodeError;

/// Decode hex dump `text` (either layout) and return the bytes starting at
/// the first occurrence of `signature`.
pub fn decode(text: &str, signature: &Signature) -> Result<Vec<u8>, DecodeError> {
    let options = DecodeOptions::with_signature(signature.clone());
    decode_detailed(text, &options).map(|d| d.data)
}

/// `decode` with the PNG signature.
pub fn decode_png(text: &str) -> Result<Vec<u8>, DecodeError> {
    decode(text, &Signature::png())
}

/// Decode and report the sniffed style, skipped padding and candidate size.
pub fn decode_detailed(text: &str, options: &DecodeOptions) -> Result<Decoded, DecodeError> {
    if text.trim().is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let style = match options.style {
        Some(forced) => forced,
        None => sniff_style(text),
    };
    debug!(%style, forced = options.style.is_some(), "hex dump style");

    let digits = extract_hex(text, style)?;
    trace!(digits = digits.len(), "extracted hex digits");

    let mut candidate = materialize(&digits)?;
    let candidate_len = candidate.len();

    let signature_offset = locate_signature(&candidate, &options.signature)?;
    debug!(signature_offset, candidate_len, "signature located");

    candidate.drain(..signature_offset);

    Ok(Decoded {
        data: candidate,
        style,
        signature_offset,
        candidate_len,
    })
}
