use std::fmt;
use std::str::FromStr;

/// Textual layouts of a hex dump.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// Single continuous run of lowercase hex digit pairs.
    #[default]
    Plain,
    /// `xxd`-style lines: offset, 2-byte groups, ASCII rendering.
    Annotated,
}

impl Style {
    /// Name used on the command line and in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Style::Plain => "plain",
            Style::Annotated => "xxd",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyle(pub String);

impl fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown style {:?}, expected 'plain' or 'xxd'", self.0)
    }
}

impl std::error::Error for UnknownStyle {}

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Style::Plain),
            "xxd" | "annotated" => Ok(Style::Annotated),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}
