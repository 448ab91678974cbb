use crate::encoder::Style;
use crate::signature::Signature;

/// Decoder configuration.
///
/// Defaults: PNG signature, style sniffed from the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Byte sequence marking the start of the payload.
    pub signature: Signature,
    /// Force a layout instead of sniffing it.
    pub style: Option<Style>,
}

impl DecodeOptions {
    pub fn with_signature(signature: Signature) -> Self {
        Self { signature, ..Default::default() }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

/// Decoder output plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Bytes from the signature to the end of the candidate stream.
    pub data: Vec<u8>,
    /// Layout the text was parsed as.
    pub style: Style,
    /// Offset of the signature inside the candidate stream (leading padding).
    pub signature_offset: usize,
    /// Total bytes recovered from the text before the scan.
    pub candidate_len: usize,
}

impl Decoded {
    /// Bytes skipped ahead of the signature.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.signature_offset
    }
}
