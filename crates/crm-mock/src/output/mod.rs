//! JSON output for generated datasets.
//!
//! The [`JsonWriter`] writes the company list as one pretty-printed JSON
//! array, keeping non-ASCII text as-is.

mod writer;

pub use writer::{JsonWriter, to_json_string, write_to};
