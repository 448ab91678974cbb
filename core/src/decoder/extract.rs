//! decoder/extract.rs
//!
//! Reduce hex dump text to a bare run of hex digits.
//!
//! Design notes:
//! - Annotated: drop the `offset:` token, keep the hex region up to the first
//!   run of two or more whitespace characters (the ASCII column follows it).
//!   Without such a run the whole right-trimmed remainder is the hex region.
//! - Annotated lines with no `offset:` token are read as bare hex-group lines,
//!   so padding lines prepended to a dump survive extraction.
//! - Plain: whitespace is dropped anywhere; every other character must be hex.
//! - Illegal characters are reported at their 1-based line / column in `text`.

use crate::decoder::sniff::offset_token_end;
use crate::encoder::Style;
use crate::types::DecodeError;

/// Concatenated hex digits of `text`, parsed in the given layout.
///
/// Returns `EmptyInput` when no digit survives extraction.
pub fn extract_hex(text: &str, style: Style) -> Result<String, DecodeError> {
    let mut digits = String::with_capacity(text.len());

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        match style {
            Style::Plain => push_plain_line(&mut digits, line, line_no)?,
            Style::Annotated => push_annotated_line(&mut digits, line, line_no)?,
        }
    }

    if digits.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    Ok(digits)
}

fn push_plain_line(digits: &mut String, line: &str, line_no: usize) -> Result<(), DecodeError> {
    for (col, ch) in line.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        if !ch.is_ascii_hexdigit() {
            return Err(DecodeError::InvalidHexCharacter { ch, line: line_no, column: col + 1 });
        }
        digits.push(ch);
    }
    Ok(())
}

fn push_annotated_line(digits: &mut String, line: &str, line_no: usize) -> Result<(), DecodeError> {
    if line.trim().is_empty() {
        return Ok(());
    }

    let body_start = offset_token_end(line).unwrap_or(0);
    let body = &line[body_start..];
    let region_start = body_start + (body.len() - body.trim_start().len());
    let region = &line[region_start..];
    let region = &region[..hex_region_end(region)];

    for (pos, ch) in region.char_indices() {
        if ch.is_whitespace() {
            continue;
        }
        if !ch.is_ascii_hexdigit() {
            let column = line[..region_start + pos].chars().count() + 1;
            return Err(DecodeError::InvalidHexCharacter { ch, line: line_no, column });
        }
        digits.push(ch);
    }
    Ok(())
}

/// End of the hex-group region: start of the first whitespace run of length
/// two or more, else the end of the right-trimmed text.
fn hex_region_end(region: &str) -> usize {
    let mut prev_ws: Option<usize> = None;
    for (pos, ch) in region.char_indices() {
        if ch.is_whitespace() {
            if let Some(start) = prev_ws {
                return start;
            }
            prev_ws = Some(pos);
        } else {
            prev_ws = None;
        }
    }
    region.trim_end().len()
}
