//! DDL rendering fuzzer.
//!
//! Generates an arbitrary table, renders it as a `CREATE TABLE` statement and
//! verifies that parsing the statement gives the same table.

use honggfuzz::fuzz;
use hsqldb_ddl_rs::testing::{FuzzTable, test_format_roundtrip};

fn main() {
    loop {
        fuzz!(|table: FuzzTable| {
            test_format_roundtrip(&table);
        });
    }
}
