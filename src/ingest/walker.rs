use walkdir::WalkDir;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::output::MODULE_PREFIX;

/// Collect the JSON files to process under `input`.
///
/// A regular file is taken as-is when its extension is `json`. A directory
/// is read one level deep, in file name order, keeping `.json` files that are
/// neither earlier results (`module_*`) nor the configuration file.
/// Anything else yields nothing.
pub fn collect_json_files(input: &Path) -> Vec<PathBuf> {
    if input.is_file() {
        return if has_json_extension(input) {
            vec![input.to_path_buf()]
        } else {
            Vec::new()
        };
    }

    if !input.is_dir() {
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() || !has_json_extension(path) {
            continue;
        }

        // Earlier results and the config share the input directory.
        let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
        if name.starts_with(MODULE_PREFIX) || name == CONFIG_FILE_NAME {
            continue;
        }

        files.push(path.to_path_buf());
    }

    log::debug!("Discovered {} JSON files in {}", files.len(), input.display());
    files
}

fn has_json_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("json")
}
