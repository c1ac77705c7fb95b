//! Generic SQL type codes and the HSQLDB type name resolver.

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use crate::errors::Error;

/// Length given to character and binary columns declared without one.
///
/// This is the maximum length allowed by the SQL standard.
pub const DEFAULT_LENGTH: u32 = 8000;

/// Generic, dialect-independent SQL column type.
///
/// The discriminants are the JDBC (and SDBC) `DataType` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
#[repr(i32)]
pub enum DataType {
    /// Fixed-length character string.
    Char = 1,
    /// Variable-length character string.
    Varchar = 12,
    /// Long variable-length character string.
    LongVarchar = -1,
    /// 8-bit integer.
    TinyInt = -6,
    /// 16-bit integer.
    SmallInt = 5,
    /// 32-bit integer.
    Integer = 4,
    /// 64-bit integer.
    BigInt = -5,
    /// Exact numeric with precision and scale.
    Numeric = 2,
    /// Exact decimal with precision and scale.
    Decimal = 3,
    /// Boolean.
    Boolean = 16,
    /// Fixed-length binary string.
    Binary = -2,
    /// Variable-length binary string.
    VarBinary = -3,
    /// Long variable-length binary string.
    LongVarBinary = -4,
    /// Character large object.
    Clob = 2005,
    /// Binary large object.
    Blob = 2004,
    /// Calendar date.
    Date = 91,
    /// Time of day.
    Time = 92,
    /// Date and time.
    Timestamp = 93,
    /// Double precision floating point.
    Double = 8,
    /// Single precision floating point.
    Real = 7,
    /// Floating point with optional precision.
    Float = 6,
}

/// HSQLDB type keywords and the generic type they resolve to.
///
/// The lookup is case-sensitive: HSQLDB writes its schema scripts with
/// upper-case type names.
pub const HSQL_TYPE_NAMES: &[(&str, DataType)] = &[
    ("CHAR", DataType::Char),
    ("VARCHAR", DataType::Varchar),
    ("VARCHAR_IGNORECASE", DataType::Varchar),
    ("TINYINT", DataType::TinyInt),
    ("SMALLINT", DataType::SmallInt),
    ("INTEGER", DataType::Integer),
    ("BIGINT", DataType::BigInt),
    ("NUMERIC", DataType::Numeric),
    ("DECIMAL", DataType::Decimal),
    ("BOOLEAN", DataType::Boolean),
    ("LONGVARCHAR", DataType::LongVarchar),
    ("LONGVARBINARY", DataType::LongVarBinary),
    ("CLOB", DataType::Clob),
    ("BLOB", DataType::Blob),
    ("BINARY", DataType::Binary),
    ("VARBINARY", DataType::VarBinary),
    ("DATE", DataType::Date),
    ("TIME", DataType::Time),
    ("TIMESTAMP", DataType::Timestamp),
    ("DOUBLE", DataType::Double),
    ("REAL", DataType::Real),
    ("FLOAT", DataType::Float),
];

impl DataType {
    /// Resolves an HSQLDB type keyword.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] if the keyword is not in [`HSQL_TYPE_NAMES`].
    pub fn from_hsql_name(name: &str) -> Result<Self, Error> {
        HSQL_TYPE_NAMES
            .iter()
            .find(|(keyword, _)| *keyword == name)
            .map(|(_, data_type)| *data_type)
            .ok_or_else(|| Error::UnknownType(name.to_string()))
    }

    /// The JDBC type code.
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// The canonical HSQLDB keyword for this type.
    #[must_use]
    pub fn sql_name(self) -> &'static str {
        match self {
            DataType::Char => "CHAR",
            DataType::Varchar => "VARCHAR",
            DataType::LongVarchar => "LONGVARCHAR",
            DataType::TinyInt => "TINYINT",
            DataType::SmallInt => "SMALLINT",
            DataType::Integer => "INTEGER",
            DataType::BigInt => "BIGINT",
            DataType::Numeric => "NUMERIC",
            DataType::Decimal => "DECIMAL",
            DataType::Boolean => "BOOLEAN",
            DataType::Binary => "BINARY",
            DataType::VarBinary => "VARBINARY",
            DataType::LongVarBinary => "LONGVARBINARY",
            DataType::Clob => "CLOB",
            DataType::Blob => "BLOB",
            DataType::Date => "DATE",
            DataType::Time => "TIME",
            DataType::Timestamp => "TIMESTAMP",
            DataType::Double => "DOUBLE",
            DataType::Real => "REAL",
            DataType::Float => "FLOAT",
        }
    }

    /// Parameters implied when the type is declared without any.
    ///
    /// Character and binary strings get [`DEFAULT_LENGTH`], every other type
    /// gets none.
    #[must_use]
    pub fn default_parameters(self) -> Vec<u32> {
        match self {
            DataType::Char | DataType::Binary | DataType::VarBinary | DataType::Varchar => {
                vec![DEFAULT_LENGTH]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_every_keyword_resolves() {
        for (keyword, data_type) in HSQL_TYPE_NAMES {
            assert_eq!(DataType::from_hsql_name(keyword), Ok(*data_type));
        }
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for (_, data_type) in HSQL_TYPE_NAMES {
            assert_eq!(
                DataType::from_hsql_name(data_type.sql_name()),
                Ok(*data_type)
            );
        }
    }

    #[test]
    fn test_ignorecase_shares_varchar_code() {
        assert_eq!(
            DataType::from_hsql_name("VARCHAR_IGNORECASE"),
            Ok(DataType::Varchar)
        );
        assert_eq!(DataType::Varchar.code(), 12);
    }

    #[test]
    fn test_unknown_type_fails() {
        assert_eq!(
            DataType::from_hsql_name("TEXT"),
            Err(Error::UnknownType("TEXT".into()))
        );
        // Keywords are case-sensitive
        assert_eq!(
            DataType::from_hsql_name("integer"),
            Err(Error::UnknownType("integer".into()))
        );
        assert!(DataType::from_hsql_name("").is_err());
    }

    #[test]
    fn test_jdbc_codes() {
        assert_eq!(DataType::Integer.code(), 4);
        assert_eq!(DataType::BigInt.code(), -5);
        assert_eq!(DataType::Timestamp.code(), 93);
        assert_eq!(DataType::Clob.code(), 2005);
    }

    #[test]
    fn test_default_parameters() {
        for (_, data_type) in HSQL_TYPE_NAMES {
            let expected = matches!(
                data_type,
                DataType::Char | DataType::Binary | DataType::VarBinary | DataType::Varchar
            );
            assert_eq!(
                data_type.default_parameters(),
                if expected {
                    vec![DEFAULT_LENGTH]
                } else {
                    Vec::new()
                },
                "{data_type:?}"
            );
        }
    }
}
