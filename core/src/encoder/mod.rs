//! encoder/mod.rs
//! Binary bytes to hex text.
//!
//! Responsibilities:
//! - Plain style: continuous lowercase hex
//! - Annotated style: xxd-like offset / groups / ASCII lines
//!
//! Non-responsibilities:
//! - File IO (caller supplies bytes and a sink)
//! - Parsing (see `decoder`)

pub mod types;
pub mod encode;

pub use types::Style;
pub use encode::*;
