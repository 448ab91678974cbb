//! encoder/encode.rs
//!
//! Hex text encoding.
//!
//! Design notes:
//! - Total for any input length, including empty.
//! - Annotated lines are never padded: a short final chunk simply has fewer
//!   groups before the ASCII column.
//! - `write_encoded` streams the exact same text as `encode`.

use std::fmt::Write as _;
use std::io;

use crate::constants::layout::{
    ASCII_SEPARATOR, BYTES_PER_GROUP, BYTES_PER_LINE, NON_PRINTABLE, OFFSET_WIDTH, PRINTABLE,
};
use crate::encoder::types::Style;

/// Encode `data` as hex text in the given style.
pub fn encode(data: &[u8], style: Style) -> String {
    match style {
        Style::Plain => encode_plain(data),
        Style::Annotated => encode_annotated(data),
    }
}

/// Lowercase hex digit pairs, no delimiters, no trailing newline.
#[inline]
pub fn encode_plain(data: &[u8]) -> String {
    hex::encode(data)
}

/// One annotated line per 16-byte chunk, each terminated by `\n`.
pub fn encode_annotated(data: &[u8]) -> String {
    // offset(8) + ": " + groups(39) + sep(2) + ascii(16) + '\n'
    let mut out = String::with_capacity(data.len().div_ceil(BYTES_PER_LINE) * 68);
    for (i, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        push_annotated_line(&mut out, i * BYTES_PER_LINE, chunk);
    }
    out
}

/// Render a single annotated line (including its newline) for `chunk` at `offset`.
pub fn annotated_line(offset: usize, chunk: &[u8]) -> String {
    let mut line = String::with_capacity(68);
    push_annotated_line(&mut line, offset, chunk);
    line
}

/// Stream the encoded text into `writer`. Returns the number of bytes written.
pub fn write_encoded<W: io::Write>(writer: &mut W, data: &[u8], style: Style) -> io::Result<usize> {
    match style {
        Style::Plain => {
            let text = encode_plain(data);
            writer.write_all(text.as_bytes())?;
            Ok(text.len())
        }
        Style::Annotated => {
            let mut written = 0usize;
            let mut line = String::with_capacity(68);
            for (i, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
                line.clear();
                push_annotated_line(&mut line, i * BYTES_PER_LINE, chunk);
                writer.write_all(line.as_bytes())?;
                written += line.len();
            }
            Ok(written)
        }
    }
}

fn push_annotated_line(out: &mut String, offset: usize, chunk: &[u8]) {
    debug_assert!(chunk.len() <= BYTES_PER_LINE, "chunk exceeds line width");

    // Writing into a String cannot fail.
    let _ = write!(out, "{:0width$x}: ", offset, width = OFFSET_WIDTH);

    for (g, group) in chunk.chunks(BYTES_PER_GROUP).enumerate() {
        if g > 0 {
            out.push(' ');
        }
        for &b in group {
            let _ = write!(out, "{:02x}", b);
        }
    }

    out.push_str(ASCII_SEPARATOR);
    out.extend(chunk.iter().map(|&b| render_ascii(b)));
    out.push('\n');
}

#[inline]
fn render_ascii(b: u8) -> char {
    if PRINTABLE.contains(&b) {
        b as char
    } else {
        NON_PRINTABLE
    }
}
