//! Result files: one JSON array of original node records per subset.

pub mod writer;

pub use writer::{module_file_name, to_pretty_json, write_modules, WriteReport, MODULE_PREFIX};
