/// Split `input` on `separator`, honoring `[`/`]` nesting.
///
/// Only separators at bracket depth zero are split points; each piece is
/// trimmed. If the separator never occurs the result is a single-element
/// list holding the trimmed input. Unbalanced brackets are not an error:
/// the depth may go negative and scanning continues character by character.
pub fn split_top_level(input: &str, separator: char) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;

    for ch in input.chars() {
        match ch {
            '[' => {
                depth += 1;
                current.push(ch);
            }
            ']' => {
                depth -= 1;
                current.push(ch);
            }
            _ if ch == separator && depth == 0 => {
                pieces.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    pieces.push(current.trim().to_string());
    pieces
}

/// Like [`split_top_level`], but drops empty pieces. Parameter lists, union
/// arms, and class base lists all use this form, so a trailing separator
/// contributes nothing.
pub fn split_top_level_nonempty(input: &str, separator: char) -> Vec<String> {
    split_top_level(input, separator)
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .collect()
}
