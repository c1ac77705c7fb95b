//! Non-fatal anomalies raised while parsing.

/// A recoverable anomaly met while parsing a statement.
///
/// Every diagnostic is also emitted as a `tracing` warning when raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Diagnostic {
    /// The statement does not begin with `CREATE`, nothing was parsed.
    #[error("Not a create statement")]
    NotACreateStatement,
    /// No opening parenthesis was found, the table has no columns.
    #[error("No column definitions found")]
    MissingColumnSection,
    /// A blank fragment (e.g. a trailing comma) was skipped.
    #[error("Empty column definition skipped")]
    EmptyFragment,
}

impl Diagnostic {
    /// Emits the diagnostic as a warning and returns it.
    pub(crate) fn raise(self) -> Self {
        tracing::warn!(diagnostic = ?self, "{self}");
        self
    }
}
