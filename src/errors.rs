//! Submodule defining the errors used across the crate.

use alloc::string::String;

/// Errors that abort the parsing of a `CREATE TABLE` statement.
///
/// Formatting quirks of the DDL (a missing column section, an empty
/// `PRIMARY KEY` clause) never end up here: they are reported as
/// [`Diagnostic`](crate::Diagnostic)s and the parse carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The column type is not part of the supported HSQLDB vocabulary.
    #[error("Unknown HSQLDB column type '{0}'")]
    UnknownType(String),
    /// A type parameter is not an unsigned integer.
    #[error("Invalid parameter '{parameter}' for column type {type_name}")]
    InvalidTypeParameter {
        /// The type the parameter belongs to.
        type_name: String,
        /// The offending parameter, as written.
        parameter: String,
    },
    /// The parentheses of the column section do not balance.
    #[error("Unbalanced parentheses in column definition '{fragment}'")]
    UnbalancedParentheses {
        /// The fragment where the imbalance was detected.
        fragment: String,
    },
}
