//! Parser turning a `CREATE TABLE` statement into a [`CreateTable`].

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

use hashbrown::DefaultHashBuilder;
use indexmap::IndexSet;

use super::column::ColumnDefinition;
use super::section::{column_section, split_column_section};
use crate::diagnostics::Diagnostic;
use crate::errors::Error;
use crate::keywords::{starts_with_keyword, strip_keyword};
use crate::table_name::table_name;

/// The table described by a `CREATE TABLE` statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTable {
    /// Table name, without quotes.
    name: String,
    /// Columns in declaration order.
    columns: Vec<ColumnDefinition>,
    /// Primary key column names, in the order they were first declared.
    primary_keys: IndexSet<String, DefaultHashBuilder>,
    /// Raw `CONSTRAINT` clauses, left for a foreign key parser.
    foreign_parts: Vec<String>,
    /// Anomalies met while parsing.
    diagnostics: Vec<Diagnostic>,
}

impl CreateTable {
    /// Create an empty table definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse a `CREATE TABLE` statement.
    ///
    /// # Errors
    ///
    /// See [`CreateStmtParser::parse`].
    pub fn parse(sql: &str) -> Result<Self, Error> {
        let mut parser = CreateStmtParser::new();
        parser.parse(sql)?;
        Ok(parser.into_table())
    }

    /// Append a column, registering its name as primary key if the column
    /// is declared `PRIMARY KEY`.
    #[must_use]
    pub fn with_column(mut self, column: ColumnDefinition) -> Self {
        self.push_column(column);
        self
    }

    /// Append a name to the primary key.
    #[must_use]
    pub fn with_primary_key(mut self, name: impl Into<String>) -> Self {
        self.primary_keys.insert(name.into());
        self
    }

    /// Append a raw constraint clause.
    #[must_use]
    pub fn with_foreign_part(mut self, clause: impl Into<String>) -> Self {
        self.foreign_parts.push(clause.into());
        self
    }

    /// The table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The columns, in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Get the column names, as written.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(ColumnDefinition::name).collect()
    }

    /// Find the index of a column, by its name as written or unquoted.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name() == name)
            .or_else(|| self.columns.iter().position(|c| c.unquoted_name() == name))
    }

    /// Find a column, by its name as written or unquoted.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.column_index(name).map(|idx| &self.columns[idx])
    }

    /// The primary key column names, in the order they were first declared.
    ///
    /// Names are not checked against the columns, see
    /// [`unknown_primary_keys`](Self::unknown_primary_keys).
    #[must_use]
    pub fn primary_keys(&self) -> Vec<&str> {
        self.primary_keys.iter().map(String::as_str).collect()
    }

    /// Get the indices of primary key columns, in PK order.
    ///
    /// Names matching no column are skipped. A column named twice, e.g. as
    /// `"ID"` inline and `ID` in a table-level clause, appears once.
    #[must_use]
    pub fn primary_key_indices(&self) -> Vec<usize> {
        self.primary_keys
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect::<IndexSet<usize, DefaultHashBuilder>>()
            .into_iter()
            .collect()
    }

    /// Primary key names that match no column.
    #[must_use]
    pub fn unknown_primary_keys(&self) -> Vec<&str> {
        self.primary_keys
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(String::as_str)
            .collect()
    }

    /// The raw `CONSTRAINT` clauses, in declaration order.
    #[must_use]
    pub fn foreign_parts(&self) -> &[String] {
        &self.foreign_parts
    }

    /// The anomalies met while parsing.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether parsing produced anything.
    ///
    /// This is false when the statement was not a `CREATE` statement.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        !self.name.is_empty()
            || !self.columns.is_empty()
            || !self.primary_keys.is_empty()
            || !self.foreign_parts.is_empty()
    }

    fn push_column(&mut self, column: ColumnDefinition) {
        if column.is_primary_key() {
            self.primary_keys.insert(column.name().to_string());
        }
        self.columns.push(column);
    }

    fn raise(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic.raise());
    }

    fn parse_column_section(&mut self, section: &str) -> Result<(), Error> {
        for fragment in split_column_section(section)? {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                self.raise(Diagnostic::EmptyFragment);
            } else if let Some(clause) = strip_keyword(fragment, "PRIMARY KEY") {
                self.parse_primary_key_clause(clause);
            } else if starts_with_keyword(fragment, "CONSTRAINT") {
                self.foreign_parts.push(fragment.to_string());
            } else {
                self.push_column(ColumnDefinition::from_fragment(fragment)?);
            }
        }
        Ok(())
    }

    /// Reads the column list of a table-level `PRIMARY KEY (a, b)` clause.
    ///
    /// A clause without a parenthesized list adds nothing.
    fn parse_primary_key_clause(&mut self, clause: &str) {
        let Some(open) = clause.find('(') else {
            return;
        };
        let Some(close) = clause.rfind(')').filter(|close| *close > open) else {
            return;
        };
        for name in clause[open + 1..close].split(',').map(str::trim) {
            if !name.is_empty() {
                self.primary_keys.insert(name.to_string());
            }
        }
    }
}

impl FromStr for CreateTable {
    type Err = Error;

    fn from_str(sql: &str) -> Result<Self, Self::Err> {
        Self::parse(sql)
    }
}

/// Parser for HSQLDB `CREATE TABLE` statements.
///
/// A parser holds the result of the last statement it parsed; every call
/// to [`parse`](Self::parse) starts from scratch.
///
/// # Example
///
/// ```rust
/// use hsqldb_ddl_rs::{CreateStmtParser, DataType};
///
/// let mut parser = CreateStmtParser::new();
/// let table = parser
///     .parse("CREATE CACHED TABLE \"Orders\" (ID INTEGER NOT NULL, TOTAL DECIMAL(6,3), PRIMARY KEY(ID))")
///     .unwrap();
///
/// assert_eq!(table.name(), "Orders");
/// assert_eq!(table.column_names(), vec!["ID", "TOTAL"]);
/// assert_eq!(table.columns()[1].data_type(), DataType::Decimal);
/// assert_eq!(table.primary_keys(), vec!["ID"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreateStmtParser {
    table: CreateTable,
}

impl CreateStmtParser {
    /// Create a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `CREATE TABLE` statement.
    ///
    /// Input that is not a `CREATE` statement is not an error: the result is
    /// left unpopulated and carries [`Diagnostic::NotACreateStatement`].
    /// A statement without parentheses gives a table with no columns and
    /// [`Diagnostic::MissingColumnSection`].
    ///
    /// # Errors
    ///
    /// * [`Error::UnknownType`] if a column type is not an HSQLDB type.
    /// * [`Error::InvalidTypeParameter`] if a type parameter is not an
    ///   unsigned integer.
    /// * [`Error::UnbalancedParentheses`] if the parentheses of the column
    ///   section do not balance.
    ///
    /// On error the parser is left empty.
    pub fn parse(&mut self, sql: &str) -> Result<&CreateTable, Error> {
        self.table = CreateTable::default();

        let mut table = CreateTable::default();
        if starts_with_keyword(sql, "CREATE") {
            table.name = table_name(sql);
            match column_section(sql) {
                Some(section) => table.parse_column_section(section)?,
                None => table.raise(Diagnostic::MissingColumnSection),
            }
        } else {
            table.raise(Diagnostic::NotACreateStatement);
        }

        self.table = table;
        Ok(&self.table)
    }

    /// The result of the last successful parse.
    #[must_use]
    pub fn table(&self) -> &CreateTable {
        &self.table
    }

    /// Consume the parser, returning the result of the last successful parse.
    #[must_use]
    pub fn into_table(self) -> CreateTable {
        self.table
    }
}
