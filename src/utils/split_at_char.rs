/// Splits `text` after its first `char_count` characters. Safe to use with
/// UTF-8 strings as the split position is counted in characters, not bytes.
/// Splitting beyond the end returns the whole text and an empty remainder.
pub fn split_at_char(text: &str, char_count: usize) -> (&str, &str) {
    let byte_index = text
        .char_indices()
        .nth(char_count)
        .map_or(text.len(), |(index, _)| index);

    text.split_at(byte_index)
}
