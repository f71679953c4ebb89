//! One invocation: discover inputs, build each graph, enumerate, write.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{FlowmodError, Result};
use crate::graph::build_graph;
use crate::ingest::{collect_json_files, load_json_file};
use crate::logging;
use crate::output::write_modules;
use crate::subgraph::{enumerate_subgraphs, SizeBounds};

/// Everything the command line supplies.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Input file or directory.
    pub input: PathBuf,
    /// Smallest subset size, as typed by the user.
    pub lower: i64,
    /// Largest subset size, as typed by the user.
    pub upper: i64,
    /// Field names whose subtrees are not scanned for references.
    pub ignored_labels: Vec<String>,
    /// Explicit configuration file; resolved next to the input when absent.
    pub config_path: Option<PathBuf>,
}

/// Totals over all processed files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub subgraphs_found: usize,
    pub modules_written: usize,
    pub write_failures: usize,
}

/// Run the whole pipeline.
///
/// Bad bounds, a missing input path or an input without JSON files are
/// fatal. A file that fails to parse is skipped, as is a result file that
/// cannot be written.
pub fn run(options: &RunOptions) -> Result<RunReport> {
    let bounds = SizeBounds::new(options.lower, options.upper)?;

    if !options.input.exists() {
        return Err(FlowmodError::PathNotFound(options.input.clone()));
    }

    let config_path = options
        .config_path
        .clone()
        .unwrap_or_else(|| Config::resolve_path(&options.input));
    let config = Config::load_or_default(&config_path);
    logging::apply_verbosity(config.verbose_debug);

    let files = collect_json_files(&options.input);
    if files.is_empty() {
        return Err(FlowmodError::NoInputFiles(options.input.clone()));
    }

    log::debug!("Config file: {}", config_path.display());
    log::debug!(
        "use_all_wires={}, allow_disconnected={}, verbose_debug={}",
        config.use_all_wires,
        config.allow_disconnected,
        config.verbose_debug
    );
    log::debug!("Input path: {}", options.input.display());
    log::debug!("Subset size range: [{}, {}]", bounds.lower, bounds.upper);
    if options.ignored_labels.is_empty() {
        log::debug!("Ignored labels: (none)");
    } else {
        log::debug!("Ignored labels: {}", options.ignored_labels.join(" "));
    }
    log::debug!("Files to process: {}", files.len());

    let ignored: HashSet<String> = options.ignored_labels.iter().cloned().collect();
    let mut report = RunReport::default();

    for file in &files {
        let data = match load_json_file(file) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Failed to load {}: {}", file.display(), e);
                report.files_skipped += 1;
                continue;
            }
        };

        log::info!("Processing {}", file.display());
        let graph = build_graph(&data, &ignored, config.use_all_wires);
        graph.log_summary();

        let subgraphs = enumerate_subgraphs(
            &graph,
            bounds.lower,
            bounds.upper,
            config.allow_disconnected,
        );
        log::info!("Closed subgraphs found: {}", subgraphs.len());

        let written = write_modules(file, &graph, &subgraphs, &options.ignored_labels);

        report.files_processed += 1;
        report.subgraphs_found += subgraphs.len();
        report.modules_written += written.written.len();
        report.write_failures += written.failed;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn options(input: PathBuf, lower: i64, upper: i64) -> RunOptions {
        RunOptions {
            input,
            lower,
            upper,
            ignored_labels: Vec::new(),
            config_path: None,
        }
    }

    fn write_chain(dir: &std::path::Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(
            &path,
            r#"[{"id": "A", "wires": [["B"]]}, {"id": "B", "wires": [["C"]]}, {"id": "C"}]"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_run_rejects_bad_bounds() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().to_path_buf();
        for (lower, upper) in [(0, 3), (3, 0), (-1, 2), (4, 2)] {
            let err = run(&options(input.clone(), lower, upper)).unwrap_err();
            assert!(matches!(err, FlowmodError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_run_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let err = run(&options(temp_dir.path().join("missing"), 1, 2)).unwrap_err();
        assert!(matches!(err, FlowmodError::PathNotFound(_)));
    }

    #[test]
    fn test_run_no_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("readme.txt"), "hi").unwrap();
        let err = run(&options(temp_dir.path().to_path_buf(), 1, 2)).unwrap_err();
        assert!(matches!(err, FlowmodError::NoInputFiles(_)));
    }

    #[test]
    fn test_run_directory() {
        let temp_dir = TempDir::new().unwrap();
        write_chain(temp_dir.path(), "chain.json");
        fs::write(temp_dir.path().join("broken.json"), "[{").unwrap();
        fs::write(temp_dir.path().join(crate::config::CONFIG_FILE_NAME), r#"{"verbose_debug": false}"#)
            .unwrap();

        let report = run(&options(temp_dir.path().to_path_buf(), 1, 3)).unwrap();
        assert_eq!(report.files_processed, 1);
        assert_eq!(report.files_skipped, 1);
        assert_eq!(report.subgraphs_found, 3);
        assert_eq!(report.modules_written, 3);
        assert_eq!(report.write_failures, 0);

        for name in ["module_chain_1_1.json", "module_chain_2_1.json", "module_chain_3_1.json"] {
            assert!(temp_dir.path().join(name).exists(), "missing {}", name);
        }
    }

    #[test]
    fn test_run_labels_in_file_names() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_chain(temp_dir.path(), "chain.json");
        let mut opts = options(input, 3, 3);
        opts.ignored_labels = vec!["z".to_string(), "meta".to_string()];

        let report = run(&opts).unwrap();
        assert_eq!(report.modules_written, 1);
        assert!(temp_dir.path().join("module_chain_z_meta_3_1.json").exists());
    }

    #[test]
    fn test_run_explicit_config_allows_disconnected() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("pair.json");
        fs::write(&input, r#"[{"id": "a"}, {"id": "b"}]"#).unwrap();
        let config = temp_dir.path().join("custom.cfg");
        fs::write(&config, r#"{"allow_disconnected": true}"#).unwrap();

        let mut opts = options(input.clone(), 2, 2);
        let connected = run(&opts).unwrap();
        assert_eq!(connected.subgraphs_found, 0);

        opts.config_path = Some(config);
        let any = run(&opts).unwrap();
        assert_eq!(any.subgraphs_found, 1);
        assert!(temp_dir.path().join("module_pair_2_1.json").exists());
    }
}
