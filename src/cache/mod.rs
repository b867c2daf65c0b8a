// Cache module for local puzzle inputs.
// Maps puzzle identifiers to files and enforces write-once semantics.

pub mod paths;
pub mod store;

pub use paths::{DEFAULT_INPUT_DIR, input_path};
pub use store::{WriteOutcome, exists, read_input, write_if_absent};
