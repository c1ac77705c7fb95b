//! HSQLDB DDL output formatting.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display};

use crate::create::{ColumnDefinition, CreateTable};
use crate::types::DataType;

impl Display for ColumnDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = if self.is_case_insensitive() && self.data_type() == DataType::Varchar {
            "VARCHAR_IGNORECASE"
        } else {
            self.data_type().sql_name()
        };
        write!(f, "{} {type_name}", self.name())?;

        if let Some((first, rest)) = self.params().split_first() {
            write!(f, "({first}")?;
            for param in rest {
                write!(f, ",{param}")?;
            }
            write!(f, ")")?;
        }
        if let Some(start) = self.auto_increment_start() {
            write!(f, " GENERATED BY DEFAULT AS IDENTITY(START WITH {start})")?;
        }
        if !self.is_nullable() {
            write!(f, " NOT NULL")?;
        }
        if self.is_primary_key() {
            write!(f, " PRIMARY KEY")?;
        }
        Ok(())
    }
}

/// Trait for types that can be formatted as SQL statements.
pub trait FormatSql {
    /// Format this value as a SQL string.
    fn format_sql(&self) -> String;
}

impl FormatSql for CreateTable {
    /// Renders the table as an HSQLDB `CREATE TABLE` statement.
    ///
    /// Primary key names not already declared inline on a column are listed
    /// in a table-level `PRIMARY KEY` clause, followed by the raw constraint
    /// clauses.
    fn format_sql(&self) -> String {
        let mut sql = String::from("CREATE TABLE \"");
        sql.push_str(&self.name().replace('"', "\"\""));
        sql.push_str("\" (");

        let mut first = true;
        let mut separate = |sql: &mut String| {
            if !first {
                sql.push_str(", ");
            }
            first = false;
        };

        for column in self.columns() {
            separate(&mut sql);
            sql.push_str(&column.to_string());
        }

        let table_pk: Vec<&str> = self
            .primary_keys()
            .into_iter()
            .filter(|name| {
                !self
                    .columns()
                    .iter()
                    .any(|c| c.is_primary_key() && c.name() == *name)
            })
            .collect();
        if !table_pk.is_empty() {
            separate(&mut sql);
            sql.push_str("PRIMARY KEY(");
            sql.push_str(&table_pk.join(","));
            sql.push(')');
        }

        for clause in self.foreign_parts() {
            separate(&mut sql);
            sql.push_str(clause);
        }

        sql.push(')');
        sql
    }
}
