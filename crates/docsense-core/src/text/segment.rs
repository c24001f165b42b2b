//! Sentence segmentation on punctuation boundaries.

/// Default minimum word count for a segment to count as a sentence.
pub const DEFAULT_MIN_SENTENCE_WORDS: usize = 5;

/// Split text into sentence-like units.
///
/// A boundary sits immediately after `.`, `!`, or `?` when the next
/// character is whitespace. Segments with fewer than `min_words` words are
/// dropped; order is preserved. Empty or all-short input yields an empty
/// vector - a valid outcome, not an error.
pub fn segment(text: &str, min_words: usize) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev_was_terminator = false;

    for (idx, c) in text.char_indices() {
        if prev_was_terminator && c.is_whitespace() {
            push_if_long_enough(&mut sentences, &text[start..idx], min_words);
            start = idx;
        }
        prev_was_terminator = matches!(c, '.' | '!' | '?');
    }
    push_if_long_enough(&mut sentences, &text[start..], min_words);

    sentences
}

fn push_if_long_enough(sentences: &mut Vec<String>, segment: &str, min_words: usize) {
    let trimmed = segment.trim();
    if trimmed.split_whitespace().count() >= min_words.max(1) {
        sentences.push(trimmed.to_string());
    }
}
