//! Isolation and splitting of the column section of a `CREATE TABLE` statement.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::errors::Error;
use crate::keywords::unquoted_char_indices;

/// Returns the text strictly between the first `(` and the last `)` of `sql`.
///
/// A `(` inside a quoted identifier, such as the table name
/// `"Orders (old)"`, does not open the section.
///
/// Returns `None` when `sql` has no such `(` at all. When the last `)` does
/// not come after the first `(` the section is empty.
#[must_use]
pub fn column_section(sql: &str) -> Option<&str> {
    let (open, _) = unquoted_char_indices(sql).find(|(_, c)| *c == '(')?;
    let begin = open + 1;
    let section = sql
        .rfind(')')
        .filter(|end| *end >= begin)
        .map_or("", |end| &sql[begin..end]);
    Some(section)
}

/// Splits a column section into one fragment per column or constraint.
///
/// Commas nested inside parentheses, such as the ones of `DECIMAL(6,3)`,
/// do not split. Commas and parentheses inside quoted identifiers and
/// string literals are plain text. Fragments are returned as written,
/// surrounding whitespace included, so joining them with `,` gives back
/// `section`. An empty section has no fragments.
///
/// # Errors
///
/// Returns [`Error::UnbalancedParentheses`] if a fragment closes more
/// parentheses than it opened, or if the section ends inside an open one.
pub fn split_column_section(section: &str) -> Result<Vec<&str>, Error> {
    let mut fragments = Vec::new();
    if section.is_empty() {
        return Ok(fragments);
    }

    let mut start = 0;
    let mut depth: usize = 0;
    for (pos, c) in unquoted_char_indices(section) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| unbalanced(&section[start..]))?;
            }
            ',' if depth == 0 => {
                fragments.push(&section[start..pos]);
                start = pos + 1;
            }
            _ => {}
        }
    }

    if depth > 0 {
        return Err(unbalanced(&section[start..]));
    }
    fragments.push(&section[start..]);
    Ok(fragments)
}

fn unbalanced(fragment: &str) -> Error {
    let fragment = fragment.split(',').next().unwrap_or_default();
    Error::UnbalancedParentheses {
        fragment: fragment.trim().to_string(),
    }
}
