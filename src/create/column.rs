//! Column definitions of a `CREATE TABLE` statement.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::errors::Error;
use crate::keywords::normalize;
use crate::types::DataType;

/// A column declared in a `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnDefinition {
    /// Column name, surrounding quotes included when quoted.
    name: String,
    /// Generic type of the column.
    data_type: DataType,
    /// Positional type parameters (length, precision, scale).
    params: Vec<u32>,
    /// Whether the column carries an inline `PRIMARY KEY`.
    primary_key: bool,
    /// First value of the identity sequence, if any.
    auto_increment: Option<i64>,
    /// Whether the column accepts NULL.
    nullable: bool,
    /// Whether text comparisons ignore case.
    case_insensitive: bool,
}

impl ColumnDefinition {
    /// Create a nullable column without parameters.
    ///
    /// # Arguments
    ///
    /// * `name` - The column name, with its quotes if it is a quoted identifier.
    /// * `data_type` - The generic type of the column.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            params: Vec::new(),
            primary_key: false,
            auto_increment: None,
            nullable: true,
            case_insensitive: false,
        }
    }

    /// Set the type parameters.
    #[must_use]
    pub fn with_params(mut self, params: Vec<u32>) -> Self {
        self.params = params;
        self
    }

    /// Set whether the column is declared `PRIMARY KEY`.
    #[must_use]
    pub fn with_primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = primary_key;
        self
    }

    /// Set the first value of the identity sequence.
    #[must_use]
    pub fn with_auto_increment(mut self, start: Option<i64>) -> Self {
        self.auto_increment = start;
        self
    }

    /// Set whether the column accepts NULL.
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Set whether text comparisons ignore case.
    #[must_use]
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Build a column from one fragment of the column section.
    ///
    /// The fragment is the column name followed by its type and modifiers,
    /// e.g. `"Price" DECIMAL(6,3) NOT NULL`. Modifier keywords are matched
    /// ignoring case and whitespace runs.
    ///
    /// # Errors
    ///
    /// * [`Error::UnknownType`] if the type is not an HSQLDB type.
    /// * [`Error::InvalidTypeParameter`] if a type parameter is not an
    ///   unsigned integer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hsqldb_ddl_rs::{ColumnDefinition, DataType};
    ///
    /// let column = ColumnDefinition::from_fragment("\"Price\" DECIMAL(6,3) NOT NULL").unwrap();
    /// assert_eq!(column.name(), "\"Price\"");
    /// assert_eq!(column.data_type(), DataType::Decimal);
    /// assert_eq!(column.params(), &[6, 3]);
    /// assert!(!column.is_nullable());
    /// ```
    pub fn from_fragment(fragment: &str) -> Result<Self, Error> {
        let (name, rest) = split_name(fragment.trim());
        let (type_token, modifiers) = split_type_token(rest.trim());

        let (type_name, params) = match type_token.find('(') {
            Some(open) => {
                let close = type_token
                    .rfind(')')
                    .filter(|close| *close > open)
                    .unwrap_or(type_token.len());
                let type_name = type_token[..open].trim();
                let params = parse_params(type_name, &type_token[open + 1..close])?;
                (type_name, Some(params))
            }
            None => (type_token, None),
        };

        let data_type = DataType::from_hsql_name(type_name)?;
        let params = params.unwrap_or_else(|| data_type.default_parameters());

        let modifiers = normalize(modifiers);
        // TODO: read the first value from a `START WITH n` clause instead of 0.
        let auto_increment =
            contains_phrase(&modifiers, "GENERATED BY DEFAULT AS IDENTITY").then_some(0);

        Ok(Self {
            name: name.to_string(),
            data_type,
            params,
            primary_key: contains_phrase(&modifiers, "PRIMARY KEY"),
            auto_increment,
            nullable: !contains_phrase(&modifiers, "NOT NULL"),
            case_insensitive: type_name.contains("IGNORECASE"),
        })
    }

    /// The column name as written, quotes included.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The column name without its surrounding quotes.
    #[must_use]
    pub fn unquoted_name(&self) -> &str {
        self.name
            .strip_prefix('"')
            .and_then(|name| name.strip_suffix('"'))
            .unwrap_or(&self.name)
    }

    /// The generic type of the column.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// The positional type parameters, e.g. `[6, 3]` for `DECIMAL(6,3)`.
    #[must_use]
    pub fn params(&self) -> &[u32] {
        &self.params
    }

    /// Whether the column is declared with an inline `PRIMARY KEY`.
    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    /// The first value of the identity sequence, `None` if not auto-increment.
    #[must_use]
    pub fn auto_increment_start(&self) -> Option<i64> {
        self.auto_increment
    }

    /// Whether the column is an identity column.
    #[must_use]
    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment.is_some()
    }

    /// Whether the column accepts NULL.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Whether text comparisons on the column ignore case.
    #[must_use]
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }
}

/// Splits the leading column name from the rest of the fragment.
///
/// A quoted name runs up to the next quote, both quotes kept. An unquoted
/// name runs up to the first whitespace.
fn split_name(fragment: &str) -> (&str, &str) {
    let end = match fragment.strip_prefix('"') {
        Some(quoted) => quoted.find('"').map_or(fragment.len(), |pos| pos + 2),
        None => fragment
            .find(char::is_whitespace)
            .unwrap_or(fragment.len()),
    };
    fragment.split_at(end)
}

/// Splits the type token, parameters included, from the modifiers.
///
/// The token ends at the `)` closing the parameter list, or at the first
/// whitespace outside parentheses unless that whitespace only separates the
/// type name from its parameter list.
fn split_type_token(rest: &str) -> (&str, &str) {
    let mut depth: usize = 0;
    for (pos, c) in rest.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 1 => {
                let end = pos + c.len_utf8();
                return (&rest[..end], rest[end..].trim_start());
            }
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                let after = rest[pos..].trim_start();
                if !after.starts_with('(') || rest[..pos].contains('(') {
                    return (&rest[..pos], after);
                }
            }
            _ => {}
        }
    }
    (rest, "")
}

fn parse_params(type_name: &str, params: &str) -> Result<Vec<u32>, Error> {
    params
        .split(',')
        .map(str::trim)
        .map(|param| {
            param
                .parse::<u32>()
                .map_err(|_| Error::InvalidTypeParameter {
                    type_name: type_name.to_string(),
                    parameter: param.to_string(),
                })
        })
        .collect()
}

/// Whether the normalized `modifiers` contain `phrase` as whole words.
///
/// Parentheses separate words, so `IDENTITY(START WITH 0)` holds `IDENTITY`.
fn contains_phrase(modifiers: &str, phrase: &str) -> bool {
    let words: Vec<&str> = modifiers
        .split([' ', '(', ')'])
        .filter(|word| !word.is_empty())
        .collect();
    let phrase: Vec<&str> = phrase.split(' ').collect();
    words.windows(phrase.len()).any(|window| window == phrase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_LENGTH;
    use alloc::vec;

    #[test]
    fn test_plain_column() {
        let column = ColumnDefinition::from_fragment("c1 INTEGER").unwrap();
        assert_eq!(column.name(), "c1");
        assert_eq!(column.data_type(), DataType::Integer);
        assert!(column.params().is_empty());
        assert!(column.is_nullable());
        assert!(!column.is_primary_key());
        assert!(!column.is_auto_increment());
        assert!(!column.is_case_insensitive());
    }

    #[test]
    fn test_quoted_name_keeps_quotes() {
        let column = ColumnDefinition::from_fragment("\"My Column\" INTEGER NOT NULL").unwrap();
        assert_eq!(column.name(), "\"My Column\"");
        assert_eq!(column.unquoted_name(), "My Column");
        assert_eq!(column.data_type(), DataType::Integer);
        assert!(!column.is_nullable());
    }

    #[test]
    fn test_surrounding_whitespace() {
        let column = ColumnDefinition::from_fragment("\n   c2 VARCHAR(10)  ").unwrap();
        assert_eq!(column.name(), "c2");
        assert_eq!(column.params(), &[10]);
    }

    #[test]
    fn test_explicit_parameters() {
        let column = ColumnDefinition::from_fragment("a DECIMAL(6,3)").unwrap();
        assert_eq!(column.data_type(), DataType::Decimal);
        assert_eq!(column.params(), &[6, 3]);

        let column = ColumnDefinition::from_fragment("a NUMERIC (10, 2) NOT NULL").unwrap();
        assert_eq!(column.data_type(), DataType::Numeric);
        assert_eq!(column.params(), &[10, 2]);
        assert!(!column.is_nullable());
    }

    #[test]
    fn test_implicit_default_length() {
        for type_name in ["CHAR", "BINARY", "VARBINARY", "VARCHAR", "VARCHAR_IGNORECASE"] {
            let column =
                ColumnDefinition::from_fragment(&alloc::format!("a {type_name}")).unwrap();
            assert_eq!(column.params(), &[DEFAULT_LENGTH], "{type_name}");
        }
        for type_name in ["INTEGER", "DECIMAL", "LONGVARCHAR", "CLOB", "TIMESTAMP"] {
            let column =
                ColumnDefinition::from_fragment(&alloc::format!("a {type_name} NOT NULL"))
                    .unwrap();
            assert!(column.params().is_empty(), "{type_name}");
        }
        // Explicit parameters replace the default
        let column = ColumnDefinition::from_fragment("a CHAR(3)").unwrap();
        assert_eq!(column.params(), &[3]);
    }

    #[test]
    fn test_case_insensitive_varchar() {
        let column = ColumnDefinition::from_fragment("a VARCHAR_IGNORECASE(50)").unwrap();
        assert_eq!(column.data_type(), DataType::Varchar);
        assert_eq!(column.params(), &[50]);
        assert!(column.is_case_insensitive());
    }

    #[test]
    fn test_primary_key_independent_of_nullability() {
        let column = ColumnDefinition::from_fragment("b INTEGER PRIMARY KEY").unwrap();
        assert!(column.is_primary_key());
        assert!(column.is_nullable());

        let column = ColumnDefinition::from_fragment("b INTEGER NOT NULL PRIMARY KEY").unwrap();
        assert!(column.is_primary_key());
        assert!(!column.is_nullable());
    }

    #[test]
    fn test_identity() {
        let column = ColumnDefinition::from_fragment(
            "ID INTEGER GENERATED BY DEFAULT AS IDENTITY(START WITH 0) NOT NULL PRIMARY KEY",
        )
        .unwrap();
        assert_eq!(column.auto_increment_start(), Some(0));
        assert!(column.is_auto_increment());
        assert!(column.is_primary_key());
        assert!(!column.is_nullable());
    }

    #[test]
    fn test_modifiers_ignore_case_and_spacing() {
        let column =
            ColumnDefinition::from_fragment("a INTEGER not   null generated by default as identity")
                .unwrap();
        assert!(!column.is_nullable());
        assert_eq!(column.auto_increment_start(), Some(0));
    }

    #[test]
    fn test_modifiers_right_after_parameters() {
        let column = ColumnDefinition::from_fragment("a VARCHAR(10)NOT NULL").unwrap();
        assert_eq!(column.data_type(), DataType::Varchar);
        assert_eq!(column.params(), &[10]);
        assert!(!column.is_nullable());

        let column = ColumnDefinition::from_fragment("b DECIMAL (6,3)PRIMARY KEY").unwrap();
        assert_eq!(column.params(), &[6, 3]);
        assert!(column.is_primary_key());
    }

    #[test]
    fn test_quoted_name_is_not_a_modifier() {
        let column = ColumnDefinition::from_fragment("\"NOT NULL\" INTEGER").unwrap();
        assert_eq!(column.name(), "\"NOT NULL\"");
        assert!(column.is_nullable());
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(
            ColumnDefinition::from_fragment("a TEXT"),
            Err(Error::UnknownType("TEXT".into()))
        );
        assert_eq!(
            ColumnDefinition::from_fragment("a"),
            Err(Error::UnknownType(String::new()))
        );
    }

    #[test]
    fn test_invalid_parameter() {
        assert_eq!(
            ColumnDefinition::from_fragment("a VARCHAR(MAX)"),
            Err(Error::InvalidTypeParameter {
                type_name: "VARCHAR".into(),
                parameter: "MAX".into(),
            })
        );
    }

    #[test]
    fn test_builder() {
        let column = ColumnDefinition::new("a", DataType::Varchar)
            .with_params(vec![20])
            .with_nullable(false)
            .with_case_insensitive(true);
        assert_eq!(
            column,
            ColumnDefinition::from_fragment("a VARCHAR_IGNORECASE(20) NOT NULL").unwrap()
        );
    }
}
