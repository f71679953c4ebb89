pub mod config;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod logging;
pub mod output;
pub mod run;
pub mod subgraph;

pub use config::Config;
pub use error::{FlowmodError, Result};
pub use graph::{build_graph, Graph, Node};
pub use run::{run, RunOptions, RunReport};
pub use subgraph::{enumerate_subgraphs, SizeBounds, Subgraph};
