//! Storage layer for Sahla Budget
//!
//! JSON files with atomic writes. The household records live in a single
//! snapshot document.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use snapshot::{Snapshot, TransactionSource, ValidationIssue};
