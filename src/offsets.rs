//! UTF-16 offset handling.
//!
//! Editing surfaces report cursor positions in UTF-16 code units. These helpers
//! translate them to byte offsets into Rust strings. Offsets are clamped rather than
//! rejected, and an offset inside a surrogate pair snaps down to the start of that
//! character so slicing never splits a code point.

#[must_use]
/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

#[must_use]
/// Clamp a signed UTF-16 offset into `[0, utf16_len(text)]`.
pub fn clamp(text: &str, offset: i64) -> usize {
    let len = utf16_len(text);
    usize::try_from(offset.max(0)).map_or(len, |offset| offset.min(len))
}

#[must_use]
/// Byte offset of a UTF-16 offset, clamped to the end of the text.
pub fn utf16_to_byte(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        let next = units + ch.len_utf16();
        if units >= offset || next > offset {
            return byte;
        }
        units = next;
    }
    text.len()
}

#[must_use]
/// UTF-16 offset of a byte offset that lies on a character boundary.
pub fn byte_to_utf16(text: &str, byte: usize) -> usize {
    let byte = byte.min(text.len());
    utf16_len(text.get(..byte).unwrap_or(text))
}

#[cfg(test)]
#[path = "tests/offsets.rs"]
mod tests;
