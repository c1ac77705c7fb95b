//! Case-insensitive keyword matching and quote-aware scanning helpers.

use alloc::string::String;

/// Whether a byte can be part of an unquoted identifier.
fn is_ident_cont(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Strips `keyword` from the start of `text`, ignoring ASCII case.
///
/// Words of a multi-word keyword may be separated by any run of whitespace.
/// The keyword must end on a word boundary, so `CONSTRAINTS` does not start
/// with `CONSTRAINT`. Returns the remaining text with leading whitespace
/// removed.
pub(crate) fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let mut rest = text.trim_start();
    for (i, word) in keyword.split_whitespace().enumerate() {
        if i > 0 {
            let trimmed = rest.trim_start();
            if trimmed.len() == rest.len() {
                return None;
            }
            rest = trimmed;
        }
        let head = rest.get(..word.len())?;
        if !head.eq_ignore_ascii_case(word) {
            return None;
        }
        rest = &rest[word.len()..];
    }
    if rest.as_bytes().first().is_some_and(|b| is_ident_cont(*b)) {
        return None;
    }
    Some(rest.trim_start())
}

/// Whether `text` starts with `keyword`, see [`strip_keyword`].
pub(crate) fn starts_with_keyword(text: &str, keyword: &str) -> bool {
    strip_keyword(text, keyword).is_some()
}

/// Iterates over the characters of `text` lying outside `"…"` identifiers
/// and `'…'` string literals.
///
/// Quote characters are not yielded. A doubled quote inside a span closes
/// and reopens it, so escaped quotes need no special case.
pub(crate) fn unquoted_char_indices(text: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut open: Option<char> = None;
    text.char_indices().filter(move |&(_, c)| match open {
        Some(quote) => {
            if c == quote {
                open = None;
            }
            false
        }
        None if matches!(c, '"' | '\'') => {
            open = Some(c);
            false
        }
        None => true,
    })
}

/// Upper-cases `text` and collapses every whitespace run into one space.
pub(crate) fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(&word.to_ascii_uppercase());
    }
    normalized
}
