use crate::signature::Signature;
use crate::types::DecodeError;

/// Offset of the first occurrence of `signature` in `candidate`.
pub fn locate_signature(candidate: &[u8], signature: &Signature) -> Result<usize, DecodeError> {
    signature
        .find_in(candidate)
        .ok_or_else(|| DecodeError::NoSignatureFound {
            signature: signature.to_string(),
            scanned: candidate.len(),
        })
}

/// `candidate` from the first signature occurrence to its end.
pub fn scan<'a>(candidate: &'a [u8], signature: &Signature) -> Result<&'a [u8], DecodeError> {
    let start = locate_signature(candidate, signature)?;
    Ok(&candidate[start..])
}
