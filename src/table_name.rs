//! Extraction of the table name from a `CREATE TABLE` statement.

use alloc::string::{String, ToString};

use crate::keywords::strip_keyword;

/// HSQLDB words that may sit between `CREATE` and `TABLE`.
const TABLE_KINDS: &[&str] = &["CACHED", "MEMORY", "TEXT", "GLOBAL", "TEMPORARY", "TEMP"];

/// Returns the name of the table created by `sql`.
///
/// Surrounding double quotes are removed and doubled quotes inside them are
/// unescaped, so `CREATE TABLE "My ""T"""` yields `My "T"`. An unquoted name
/// ends at the first whitespace or opening parenthesis. Returns an empty
/// string when no name follows the keywords.
///
/// # Example
///
/// ```rust
/// use hsqldb_ddl_rs::table_name;
///
/// assert_eq!(table_name("CREATE CACHED TABLE \"Users\" (ID INTEGER)"), "Users");
/// assert_eq!(table_name("CREATE TABLE T(ID INTEGER)"), "T");
/// ```
#[must_use]
pub fn table_name(sql: &str) -> String {
    let mut rest = sql.trim_start();
    rest = strip_keyword(rest, "CREATE").unwrap_or(rest);
    while let Some(stripped) = TABLE_KINDS
        .iter()
        .find_map(|kind| strip_keyword(rest, kind))
    {
        rest = stripped;
    }
    rest = strip_keyword(rest, "TABLE").unwrap_or(rest);

    if let Some(quoted) = rest.strip_prefix('"') {
        return unquote(quoted);
    }

    rest.split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Reads a quoted identifier up to its closing quote (already past the opening one).
fn unquote(quoted: &str) -> String {
    let mut name = String::new();
    let mut chars = quoted.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '"' {
            if chars.peek() == Some(&'"') {
                chars.next();
            } else {
                break;
            }
        }
        name.push(c);
    }
    name
}
