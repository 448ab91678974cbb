//! decoder/mod.rs
//! Hex text back to binary bytes.
//!
//! Pipeline (each stage a pure function, callable in isolation):
//! 1. `sniff`       - classify the text as Plain or Annotated
//! 2. `extract`     - reduce the text to a run of hex digits
//! 3. `materialize` - pair digits into candidate bytes
//! 4. `scan`        - cut the candidate at the first signature occurrence
//!
//! No trailing-data trimming: everything from the signature to the end of
//! the candidate is returned.

pub mod types;
pub mod sniff;
pub mod extract;
pub mod materialize;
pub mod scan;
pub mod decode;

pub use types::{DecodeOptions, Decoded};
pub use sniff::sniff_style;
pub use extract::extract_hex;
pub use materialize::materialize;
pub use scan::{locate_signature, scan};
pub use decode::*;
