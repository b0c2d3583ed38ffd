//! Lookup dictionary from aliases, tags and descriptions to glyphs.

use std::collections::BTreeMap;

use crate::record::EmojiRecord;

/// Maps every alias, tag and description to the glyph of its record.
///
/// Keys are stored exactly as they appear in the source data, so lookups are
/// case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary(BTreeMap<String, String>);

impl Dictionary {
    /// Returns the glyph bound to `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the dictionary has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn bind(&mut self, key: &str, glyph: &str) {
        // empty strings never become keys
        if !key.is_empty() {
            self.0.insert(key.to_string(), glyph.to_string());
        }
    }
}

/// Builds a dictionary from records.
///
/// Records are processed in order: aliases first, then tags, then the
/// description. A key registered by more than one record keeps the glyph of
/// the last one.
pub fn build<'r>(records: impl IntoIterator<Item = &'r EmojiRecord>) -> Dictionary {
    let dictionary = records
        .into_iter()
        .fold(Dictionary::default(), |mut dictionary, record| {
            record
                .aliases
                .iter()
                .chain(record.tags.iter())
                .chain(std::iter::once(&record.description))
                .for_each(|key| dictionary.bind(key, &record.glyph));
            dictionary
        });

    tracing::debug!(keys = dictionary.len(), "built emoji dictionary");

    dictionary
}
