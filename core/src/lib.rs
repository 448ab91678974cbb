//! hexpng-core
//!
//! Binary <-> hex dump conversion with signature scanning.
//! Pure functions over in-memory buffers. No files, no stdout.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod signature;

// Inverse transforms
pub mod encoder;
pub mod decoder;

pub use decoder::{decode, decode_detailed, decode_png, DecodeOptions, Decoded};
pub use encoder::{encode, write_encoded, Style};
pub use signature::{Signature, SignatureError};
pub use types::{DecodeError, ErrorKind};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::constants::PNG_SIGNATURE;
    pub use crate::decoder::{decode, decode_detailed, decode_png, DecodeOptions, Decoded};
    pub use crate::encoder::{encode, write_encoded, Style};
    pub use crate::signature::Signature;
    pub use crate::types::{DecodeError, ErrorKind};
}
