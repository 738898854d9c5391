//! Caret-aware text splicing for embed-tag insertion.
//!
//! Browsers report textarea selections as UTF-16 code unit offsets
//! (`selectionStart`/`selectionEnd`), so the splice has to happen in
//! UTF-16 space; byte-indexed slicing would corrupt any value holding
//! non-ASCII content.  The functions here are pure so the arithmetic
//! can be tested natively; `kawara-io::editor` applies the result to
//! the live `<textarea>`.

/// Wrap an embed tag in the newline framing the editor inserts.
///
/// Tags are block-level in article Markdown, so they always land on
/// their own line.
#[must_use]
pub fn insertion_payload(text: &str) -> String {
    format!("\n{text}\n")
}

/// Splice `payload` into `value` over the UTF-16 selection
/// `[start, end)`, returning the new value and the caret position
/// (in UTF-16 units) immediately after the inserted payload.
///
/// A caret (no selection) has `start == end`.  Out-of-range or
/// inverted offsets are clamped rather than rejected; the browser
/// normally guarantees `start <= end <= len` but the DOM value can
/// change between reads.
#[must_use]
pub fn splice_utf16(value: &str, start: u32, end: u32, payload: &str) -> (String, u32) {
    let units: Vec<u16> = value.encode_utf16().collect();
    let len = u32::try_from(units.len()).unwrap_or(u32::MAX);
    let start = start.min(len);
    let end = end.clamp(start, len);

    let mut next: Vec<u16> = Vec::with_capacity(units.len() + payload.len());
    next.extend_from_slice(&units[..start as usize]);
    let payload_len = {
        let before = next.len();
        next.extend(payload.encode_utf16());
        next.len() - before
    };
    next.extend_from_slice(&units[end as usize..]);

    let caret = start + u32::try_from(payload_len).unwrap_or(u32::MAX);
    (String::from_utf16_lossy(&next), caret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_insertion_splits_value_and_advances_caret() {
        let payload = insertion_payload("![cat](abc.png)");
        let (next, caret) = splice_utf16("hello world", 5, 5, &payload);
        assert_eq!(next, "hello\n![cat](abc.png)\n world");
        assert_eq!(caret as usize, 5 + payload.len());
    }

    #[test]
    fn selection_is_replaced() {
        let (next, caret) = splice_utf16("abcdef", 1, 4, "X");
        assert_eq!(next, "aXef");
        assert_eq!(caret, 2);
    }

    #[test]
    fn caret_at_start_and_end() {
        let (next, caret) = splice_utf16("body", 0, 0, "\nT\n");
        assert_eq!(next, "\nT\nbody");
        assert_eq!(caret, 3);

        let (next, caret) = splice_utf16("body", 4, 4, "\nT\n");
        assert_eq!(next, "body\nT\n");
        assert_eq!(caret, 7);
    }

    #[test]
    fn empty_value_gets_only_the_payload() {
        let (next, caret) = splice_utf16("", 0, 0, "\nT\n");
        assert_eq!(next, "\nT\n");
        assert_eq!(caret, 3);
    }

    #[test]
    fn offsets_are_utf16_units_not_bytes() {
        // U+1F600 is one char, four UTF-8 bytes, two UTF-16 units.
        // Caret index 3 is just past the emoji ('a' + surrogate pair).
        let (next, caret) = splice_utf16("a\u{1F600}b", 3, 3, "X");
        assert_eq!(next, "a\u{1F600}Xb");
        assert_eq!(caret, 4);
    }

    #[test]
    fn out_of_range_offsets_are_clamped() {
        let (next, caret) = splice_utf16("ab", 10, 20, "X");
        assert_eq!(next, "abX");
        assert_eq!(caret, 3);

        // Inverted range collapses to a caret at `start`.
        let (next, caret) = splice_utf16("abcd", 3, 1, "X");
        assert_eq!(next, "abcXd");
        assert_eq!(caret, 4);
    }
}
