// Graph artifact persistence.
//
// The graph built in the similarity phase is written once and reloaded by
// every grouping run; grouping mutates only its in-memory copy, so reruns
// at different thresholds read the same source graph. JSON keeps the
// artifact textual — node keys are the `YYYY_MM_topic_TT` identifiers —
// and serde_json round-trips the f64 weights exactly.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::TopicGraph;

pub fn save(graph: &TopicGraph, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create graph artifact {}", path.display()))?;
    serde_json::to_writer(BufWriter::new(file), graph)
        .with_context(|| format!("failed to serialize graph to {}", path.display()))?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        path = %path.display(),
        "Similarity graph persisted"
    );
    Ok(())
}

pub fn load(path: &Path) -> Result<TopicGraph> {
    let file = File::open(path).with_context(|| {
        format!(
            "failed to open graph artifact {} (run `supertopics build-graph` first)",
            path.display()
        )
    })?;
    let graph: TopicGraph = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse graph artifact {}", path.display()))?;
    Ok(graph)
}
