//! `CREATE TABLE` parser fuzzer.
//!
//! Feeds arbitrary text to the parser: it must never panic, and whatever it
//! accepts must uphold the invariants checked by `test_parse`.

use honggfuzz::fuzz;
use hsqldb_ddl_rs::testing::test_parse;

fn main() {
    loop {
        fuzz!(|sql: &str| {
            test_parse(sql);
        });
    }
}
