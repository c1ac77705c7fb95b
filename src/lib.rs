#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;
#[cfg(feature = "testing")]
extern crate std;

pub mod create;
pub mod diagnostics;
pub mod errors;
pub mod format;
pub(crate) mod keywords;
pub mod table_name;
#[cfg(feature = "testing")]
pub mod testing;
pub mod types;

// Re-export main types
pub use create::{
    ColumnDefinition, CreateStmtParser, CreateTable, column_section, split_column_section,
};
pub use diagnostics::Diagnostic;
pub use format::FormatSql;
pub use table_name::table_name;
pub use types::{DEFAULT_LENGTH, DataType, HSQL_TYPE_NAMES};

// Re-export errors
pub use errors::Error;
