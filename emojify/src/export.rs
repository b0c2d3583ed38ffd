//! Plain-text glyph listing.

use std::io::{self, Write};

use crate::record::EmojiRecord;

/// Writes every glyph on its own line, in record order. Returns the number of
/// lines written.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_glyphs<'r>(
    records: impl IntoIterator<Item = &'r EmojiRecord>,
    mut output: impl Write,
) -> io::Result<usize> {
    let mut count = 0;
    for record in records {
        writeln!(output, "{}", record.glyph)?;
        count += 1;
    }
    output.flush()?;
    Ok(count)
}
