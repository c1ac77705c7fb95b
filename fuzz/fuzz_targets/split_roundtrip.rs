//! Column section splitter fuzzer.
//!
//! Tests that joining the fragments of any accepted section gives the
//! section back.

use honggfuzz::fuzz;
use hsqldb_ddl_rs::testing::test_split_roundtrip;

fn main() {
    loop {
        fuzz!(|section: &str| {
            test_split_roundtrip(section);
        });
    }
}
