//! Parsing of HSQLDB `CREATE TABLE` statements.
//!
//! The statement goes through a fixed pipeline of string scanners:
//! - the column section between the outer parentheses is isolated;
//! - it is split into fragments on top-level commas;
//! - each fragment is a table-level `PRIMARY KEY` clause, a `CONSTRAINT`
//!   clause kept verbatim, or a column definition.
//!
//! This is intentionally not a full SQL grammar: it only understands what
//! HSQLDB writes in its schema scripts.

mod column;
mod parser;
mod section;

pub use column::ColumnDefinition;
pub use parser::{CreateStmtParser, CreateTable};
pub use section::{column_section, split_column_section};
