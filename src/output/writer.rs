use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{FlowmodError, Result};
use crate::graph::Graph;
use crate::subgraph::Subgraph;

/// File name prefix of every result file.
pub const MODULE_PREFIX: &str = "module_";

/// Outcome of writing one file's results.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub failed: usize,
}

/// Name of a result file:
/// `module_<stem>_[<labels joined by _>_]<size>_<index>.json`.
pub fn module_file_name(stem: &str, labels: &[String], size: usize, index: usize) -> String {
    let mut name = format!("{}{}_", MODULE_PREFIX, stem);
    if !labels.is_empty() {
        name.push_str(&labels.join("_"));
        name.push('_');
    }
    name.push_str(&format!("{}_{}.json", size, index));
    name
}

/// Serialize records as a 4-space indented JSON array.
pub fn to_pretty_json(records: &[&JsonValue]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write every subset next to `input_file` as an array of its original records.
///
/// Sequence numbers start at 1 for each subset size. A file that cannot be
/// written is logged and skipped.
pub fn write_modules(
    input_file: &Path,
    graph: &Graph,
    subgraphs: &[Subgraph],
    labels: &[String],
) -> WriteReport {
    let stem = input_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = input_file.parent().unwrap_or_else(|| Path::new(""));

    let mut counter_by_size: HashMap<usize, usize> = HashMap::new();
    let mut report = WriteReport::default();

    for subgraph in subgraphs {
        let size = subgraph.len();
        let index = counter_by_size.entry(size).or_insert(0);
        *index += 1;

        let out_path = dir.join(module_file_name(&stem, labels, size, *index));
        match write_module(&out_path, graph, subgraph) {
            Ok(()) => {
                log::debug!(
                    "Module {} ({} nodes): {}",
                    out_path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default(),
                    size,
                    graph.ids_of(&subgraph.nodes).join(", ")
                );
                report.written.push(out_path);
            }
            Err(e) => {
                log::warn!("{}", e);
                report.failed += 1;
            }
        }
    }

    report
}

fn write_module(out_path: &Path, graph: &Graph, subgraph: &Subgraph) -> Result<()> {
    let records: Vec<&JsonValue> = subgraph
        .nodes
        .iter()
        .filter_map(|&index| graph.node(index))
        .map(|node| &node.data)
        .collect();
    let payload = to_pretty_json(&records)?;
    std::fs::write(out_path, payload).map_err(|source| FlowmodError::Output {
        path: out_path.to_path_buf(),
        source,
    })
}
