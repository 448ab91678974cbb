//! Layout detection.

use std::sync::OnceLock;

use regex::Regex;

use crate::encoder::Style;

/// `offset:` token at the start of a line (leading whitespace allowed).
fn offset_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*[0-9A-Fa-f]+:").expect("offset token pattern is valid"))
}

/// Byte index just past the `offset:` token of `line`, if it has one.
pub(crate) fn offset_token_end(line: &str) -> Option<usize> {
    offset_token().find(line).map(|m| m.end())
}

/// Annotated if any line opens with a run of hex digits followed by `:`,
/// Plain otherwise.
pub fn sniff_style(text: &str) -> Style {
    if text.lines().any(|line| offset_token_end(line).is_some()) {
        Style::Annotated
    } else {
        Style::Plain
    }
}
