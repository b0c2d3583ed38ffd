#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

pub mod dictionary;
pub mod export;
pub mod record;
pub mod substitute;
pub mod tokenize;

pub use dictionary::Dictionary;
pub use record::{EmojiRecord, LoadError};
pub use substitute::{convert, Emojified, Emojifier};

#[cfg(feature = "integrated")]
static INTEGRATED: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/emoji.bin"));

/// Records of the data set embedded at compile time.
///
/// # Errors
///
/// Fails if the embedded data cannot be decoded.
#[cfg(feature = "integrated")]
pub fn integrated_records() -> Result<Vec<EmojiRecord>, LoadError> {
    Ok(bincode::deserialize(INTEGRATED)?)
}
