//! Title casing

/// Lower-case `text`, then upper-case the first letter of each
/// whitespace-delimited word.
///
/// Whitespace runs are kept as they are.
pub fn to_title_case(text: Option<&str>) -> Option<String> {
    let text = text?;
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    Some(out)
}
