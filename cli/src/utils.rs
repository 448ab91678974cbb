use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hexpng_core::{DecodeError, ErrorKind};

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Relative paths are joined onto the current directory.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("cannot read current directory")?;
    Ok(cwd.join(path))
}

/// Where a decoded file goes.
///
/// An output with a directory component is used as given. A bare file name
/// lands next to the input file, or in the current directory for text input.
pub fn resolve_output(output: &Path, input_file: Option<&Path>) -> Result<PathBuf> {
    let has_dir = output.parent().is_some_and(|p| !p.as_os_str().is_empty());
    if has_dir {
        return Ok(output.to_path_buf());
    }
    match input_file {
        Some(file) => {
            let file = absolutize(file)?;
            let dir = file.parent().map(Path::to_path_buf).unwrap_or_default();
            Ok(dir.join(output))
        }
        None => absolutize(output),
    }
}

/// User-facing guidance for a decode failure.
pub fn decode_hint(err: &DecodeError) -> String {
    match err.kind() {
        ErrorKind::NoSignatureFound => [
            "The hex dump does not contain the expected signature.",
            "A PNG payload must start with 89 50 4E 47 0D 0A 1A 0A (89504e470d0a1a0a).",
            "Leading padding is skipped automatically; check that the dump",
            "was generated from the right file and is not truncated.",
        ]
        .join("\n"),
        ErrorKind::MalformedHex | ErrorKind::EmptyInput => [
            "Hex dumps may only contain 0-9, a-f, A-F outside of xxd structure.",
            "Formats supported:",
            "  - xxd format: '00000000: 8950 4e47 0d0a 1a0a  .PNG....'",
            "  - Raw hex:    '89504e47 0d0a1a0a' or '89504e470d0a1a0a'",
        ]
        .join("\n"),
    }
}
