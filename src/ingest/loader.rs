use serde_json::Value as JsonValue;
use std::path::Path;

use crate::error::Result;

/// Read and parse one input file.
pub fn load_json_file(path: &Path) -> Result<JsonValue> {
    let content = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    Ok(value)
}
