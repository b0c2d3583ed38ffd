//! Emoji records and loading them from JSON.

use std::{fs, io::Read, path::Path};

use serde::{Deserialize, Serialize};

/// Where to download the emoji database from.
pub const DOWNLOAD_URL: &str = "https://raw.githubusercontent.com/github/gemoji/master/db/emoji.json";

/// A single emoji and every string it can be looked up by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// The glyph substituted into text.
    #[serde(rename = "emoji")]
    pub glyph: String,
    /// Alternate names, e.g. `smile`.
    pub aliases: Vec<String>,
    /// Category keywords, e.g. `happy`.
    pub tags: Vec<String>,
    /// Human readable name, e.g. `grinning face with smiling eyes`.
    pub description: String,
}

/// Error type for loading emoji records.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The data source could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The data source is not a list of well-formed records.
    #[error("Malformed emoji data: {0}")]
    Json(#[from] serde_json::Error),
    /// The data source parsed but contains no records.
    #[error("Emoji data contains no records")]
    Empty,
    /// A record has nothing to substitute.
    #[error("Record {index} (\"{description}\") has an empty glyph")]
    EmptyGlyph {
        /// Position of the record in the source.
        index: usize,
        /// Description of the record, for locating it.
        description: String,
    },
    /// The embedded data set could not be decoded.
    #[cfg(feature = "integrated")]
    #[error("Failed to decode integrated emoji data: {0}")]
    Embedded(#[from] bincode::Error),
}

fn validate(records: Vec<EmojiRecord>) -> Result<Vec<EmojiRecord>, LoadError> {
    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    if let Some((index, record)) = records
        .iter()
        .enumerate()
        .find(|(_, r)| r.glyph.is_empty())
    {
        return Err(LoadError::EmptyGlyph {
            index,
            description: record.description.clone(),
        });
    }

    Ok(records)
}

/// Parses and validates records from a JSON string.
///
/// # Errors
///
/// Returns an error if the input is not a JSON list of records, is empty, or
/// contains a record without a glyph.
pub fn from_str(input: &str) -> Result<Vec<EmojiRecord>, LoadError> {
    validate(serde_json::from_str(input)?)
}

/// Parses and validates records from a reader.
///
/// # Errors
///
/// See [`from_str`]. Also fails if the reader fails.
pub fn from_reader(reader: impl Read) -> Result<Vec<EmojiRecord>, LoadError> {
    validate(serde_json::from_reader(reader)?)
}

/// Parses and validates records from a JSON file.
///
/// # Errors
///
/// See [`from_reader`].
pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<EmojiRecord>, LoadError> {
    from_reader(std::io::BufReader::new(fs::File::open(path)?))
}
