/// PNG magic number: `\x89PNG\r\n\x1a\n`.
/// Default signature used by the decoder when the caller does not supply one.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Annotated (xxd) layout.
pub mod layout {
    /// Bytes rendered on one annotated line.
    pub const BYTES_PER_LINE: usize = 16;
    /// Bytes per space-separated hex group (4 hex digits).
    pub const BYTES_PER_GROUP: usize = 2;
    /// Minimum width of the zero-padded offset column.
    pub const OFFSET_WIDTH: usize = 8;
    /// Separator between the hex groups and the ASCII rendering.
    pub const ASCII_SEPARATOR: &str = "  ";
    /// Stand-in for bytes outside the printable range.
    pub const NON_PRINTABLE: char = '.';
    /// Printable ASCII range rendered verbatim.
    pub const PRINTABLE: std::ops::RangeInclusive<u8> = 0x20..=0x7E;
}
