//! Regression tests for the fuzz harnesses.
//!
//! Every harness under `fuzz/fuzz_targets/` calls one helper of
//! [`hsqldb_ddl_rs::testing`]; the inputs below replay through the same
//! helpers.
//!
//! | Harness            | Input type  | Helper                  |
//! |--------------------|-------------|-------------------------|
//! | `split_roundtrip`  | `&str`      | `test_split_roundtrip`  |
//! | `parse_create`     | `&str`      | `test_parse`            |
//! | `format_roundtrip` | `FuzzTable` | `test_format_roundtrip` |

use arbitrary::{Arbitrary, Unstructured};
use hsqldb_ddl_rs::DataType;
use hsqldb_ddl_rs::testing::{
    FuzzColumn, FuzzTable, test_format_roundtrip, test_parse, test_split_roundtrip,
};

#[test]
fn fuzz_regression_split_edge_sections() {
    for section in [
        "",
        ",",
        "()",
        ")(",
        "a(,)b,c",
        "((,),(,)),x",
        "\"é,(\" INTEGER",
        "a INTEGER,,,",
        "a VARCHAR(10) DEFAULT ')', \"x,y\" INTEGER",
        "'unterminated (, x",
    ] {
        test_split_roundtrip(section);
    }
}

/// Multi-byte characters right after a quote must not be sliced through.
#[test]
fn fuzz_regression_multibyte_names() {
    test_parse("CREATE TABLE \"ü\" (\"ä\"INTEGER, é VARCHAR(1))");
    test_parse("CREATE TABLE T (\"ß");
    test_parse("CREATE TABLE T (ö");
}

/// Parentheses in the wrong order must not panic when slicing the section.
#[test]
fn fuzz_regression_reversed_parentheses() {
    test_parse("CREATE ) TABLE (");
    test_parse("CREATE TABLE T (a INTEGER, PRIMARY KEY )a( )");
    test_parse("CREATE TABLE T (a VARCHAR)(10))");
}

/// Parentheses inside quoted names and literals are not structure.
#[test]
fn fuzz_regression_quoted_parentheses() {
    test_parse("CREATE TABLE \"My Table(1)\" (c1 INTEGER)");
    test_parse("CREATE TABLE \"(\"");
    test_parse("CREATE TABLE T (a CHAR(1) DEFAULT ')')");
    test_parse("CREATE TABLE T (a VARCHAR(10)NOT NULL PRIMARY KEY)");
}

#[test]
fn fuzz_regression_keywords_without_columns() {
    test_parse("CREATE");
    test_parse("CREATE (CONSTRAINT x)");
    test_parse("CREATE TABLE (PRIMARY KEY(a,,b))");
    test_parse("create table t (a integer)");
}

#[test]
fn fuzz_regression_format_every_type() {
    for data_type in hsqldb_ddl_rs::HSQL_TYPE_NAMES.iter().map(|(_, t)| *t) {
        let column = |quoted| FuzzColumn {
            quoted,
            data_type,
            params: vec![],
            primary_key: quoted,
            auto_increment: !quoted,
            nullable: quoted,
            case_insensitive: true,
        };
        let table = FuzzTable {
            name: "T \"x\"".into(),
            columns: vec![column(false), column(true)],
            table_primary_keys: vec![0, 3],
            foreign_keys: vec![1],
        };
        test_format_roundtrip(&table);
    }
}

#[test]
fn fuzz_regression_format_empty_table() {
    test_format_roundtrip(&FuzzTable {
        name: String::new(),
        columns: vec![],
        table_primary_keys: vec![7],
        foreign_keys: vec![7],
    });
}

#[test]
fn fuzz_regression_format_arbitrary_bytes() {
    let seeds: [&[u8]; 3] = [
        &[0x00; 64],
        &[0xff; 64],
        b"\x05T\x01\x02\x03\x04\x05\x06\x07\x08\x09\x0a\x0b\x0c\x0d\x0e\x0f\x10\x11\x12\x13",
    ];
    for seed in seeds {
        let mut u = Unstructured::new(seed);
        if let Ok(table) = FuzzTable::arbitrary(&mut u) {
            test_format_roundtrip(&table);
        }
    }
}

#[test]
fn fuzz_regression_varchar_ignorecase_keeps_length() {
    let table = FuzzTable {
        name: "T".into(),
        columns: vec![FuzzColumn {
            quoted: false,
            data_type: DataType::Varchar,
            params: vec![40000, 1, 2],
            primary_key: false,
            auto_increment: false,
            nullable: false,
            case_insensitive: true,
        }],
        table_primary_keys: vec![],
        foreign_keys: vec![],
    };
    test_format_roundtrip(&table);
}
