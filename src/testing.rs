//! Testing utilities shared by the fuzz harnesses and the regression tests.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`test_split_roundtrip`]: the splitter never loses text
//! - [`test_parse`]: parsing arbitrary text never panics and upholds the
//!   result invariants
//! - [`test_format_roundtrip`]: rendering a [`FuzzTable`] and parsing it back
//!   gives the same table

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use arbitrary::Arbitrary;

use crate::create::{ColumnDefinition, CreateTable, split_column_section};
use crate::diagnostics::Diagnostic;
use crate::format::FormatSql;
use crate::keywords::unquoted_char_indices;
use crate::types::DataType;

/// Splits `section` and checks that joining the fragments gives it back.
///
/// # Panics
///
/// Panics if the fragments do not rebuild `section`, or if a fragment has
/// unbalanced parentheses outside its quoted text.
pub fn test_split_roundtrip(section: &str) {
    let Ok(fragments) = split_column_section(section) else {
        return;
    };
    assert_eq!(fragments.join(","), section, "fragments {fragments:?}");
    for fragment in fragments {
        let outside = || unquoted_char_indices(fragment).map(|(_, c)| c);
        let opened = outside().filter(|c| *c == '(').count();
        let closed = outside().filter(|c| *c == ')').count();
        assert_eq!(opened, closed, "unbalanced fragment {fragment:?}");
    }
}

/// Parses arbitrary text and checks the invariants of the result.
///
/// # Panics
///
/// Panics if an invariant of [`CreateTable`] does not hold.
pub fn test_parse(sql: &str) {
    let Ok(table) = CreateTable::parse(sql) else {
        return;
    };

    for column in table.columns() {
        if !column.data_type().default_parameters().is_empty() {
            assert!(
                !column.params().is_empty(),
                "{} lost its default length",
                column.name()
            );
        }
        if column.is_primary_key() {
            assert!(table.primary_keys().contains(&column.name()));
        }
    }
    for name in table.primary_keys() {
        assert!(!name.is_empty(), "empty primary key name");
    }
    for clause in table.foreign_parts() {
        assert!(
            clause
                .get(.."CONSTRAINT".len())
                .is_some_and(|head| head.eq_ignore_ascii_case("CONSTRAINT")),
            "{clause:?} is not a constraint"
        );
    }
    if table.diagnostics().contains(&Diagnostic::NotACreateStatement) {
        assert!(!table.is_populated(), "{sql:?} was parsed anyway");
    }
}

/// A column generated by `arbitrary`.
#[derive(Debug, Clone, Arbitrary)]
pub struct FuzzColumn {
    /// Whether the name is a quoted identifier.
    pub quoted: bool,
    /// The column type.
    pub data_type: DataType,
    /// Explicit type parameters, at most two are kept.
    pub params: Vec<u16>,
    /// Inline `PRIMARY KEY`.
    pub primary_key: bool,
    /// Identity column.
    pub auto_increment: bool,
    /// Accepts NULL.
    pub nullable: bool,
    /// `VARCHAR_IGNORECASE`, only kept on `VARCHAR` columns.
    pub case_insensitive: bool,
}

/// A table generated by `arbitrary`.
#[derive(Debug, Clone, Arbitrary)]
pub struct FuzzTable {
    /// Table name, characters other than alphanumerics, `_`, space and `"` are dropped.
    pub name: String,
    /// The columns.
    pub columns: Vec<FuzzColumn>,
    /// Columns added through a table-level `PRIMARY KEY` clause.
    pub table_primary_keys: Vec<u8>,
    /// Columns referenced by a foreign key constraint.
    pub foreign_keys: Vec<u8>,
}

impl FuzzColumn {
    fn to_column(&self, idx: usize) -> ColumnDefinition {
        let name = if self.quoted {
            format!("\"Col {idx}\"")
        } else {
            format!("C{idx}")
        };
        let params: Vec<u32> = self.params.iter().take(2).map(|p| u32::from(*p)).collect();
        let params = if params.is_empty() {
            self.data_type.default_parameters()
        } else {
            params
        };
        ColumnDefinition::new(name, self.data_type)
            .with_params(params)
            .with_primary_key(self.primary_key)
            .with_auto_increment(self.auto_increment.then_some(0))
            .with_nullable(self.nullable)
            .with_case_insensitive(self.case_insensitive && self.data_type == DataType::Varchar)
    }
}

impl FuzzTable {
    /// Build the table described by this input.
    #[must_use]
    pub fn to_table(&self) -> CreateTable {
        let name: String = self
            .name
            .chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, '_' | ' ' | '"'))
            .collect();
        let columns: Vec<ColumnDefinition> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| column.to_column(idx))
            .collect();

        let mut table = CreateTable::new(name);
        for column in &columns {
            table = table.with_column(column.clone());
        }
        if columns.is_empty() {
            return table;
        }
        for idx in &self.table_primary_keys {
            table = table.with_primary_key(columns[usize::from(*idx) % columns.len()].name());
        }
        for (i, idx) in self.foreign_keys.iter().enumerate() {
            let column = columns[usize::from(*idx) % columns.len()].name();
            table = table.with_foreign_part(format!(
                "CONSTRAINT FK{i} FOREIGN KEY({column}) REFERENCES OTHER(ID)"
            ));
        }
        table
    }
}

/// Renders the table as DDL, parses it back and compares.
///
/// # Panics
///
/// Panics if the parsed table differs from the rendered one.
pub fn test_format_roundtrip(input: &FuzzTable) {
    let table = input.to_table();
    let sql = table.format_sql();
    let parsed = CreateTable::parse(&sql).unwrap_or_else(|err| panic!("{sql}: {err}"));
    assert_eq!(parsed, table, "{sql}");
}
