// Grouping pipeline: from persisted graph to super-topic reports.
//
// Loads the graph the building phase wrote, prunes meaningless and
// below-threshold edges, finds connected components, lets the selected
// strategy refine them, and emits the reports. Mutation is local to the
// loaded copy — the artifact on disk stays untouched, so reruns at other
// thresholds read the same source graph.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::corpus::{TopicNode, TopicStore};
use crate::graph::{connected_components, store};
use crate::grouping::{canonical_order, report, GroupingStrategy};

/// Counts reported back to the CLI after a grouping run.
#[derive(Debug)]
pub struct GroupingOutcome {
    pub components_before_threshold: usize,
    pub super_topics: usize,
    pub out_dir: PathBuf,
    /// Canonically ordered super-topics, for terminal display.
    pub components: Vec<Vec<TopicNode>>,
}

/// Run the grouping phase at `threshold` with the given strategy.
pub fn run(
    config: &Config,
    topics: &TopicStore,
    threshold: f64,
    strategy: &dyn GroupingStrategy,
) -> Result<GroupingOutcome> {
    // Step 1: load the persisted graph.
    let mut graph = store::load(&config.graph_path())?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Similarity graph loaded"
    );

    // Step 2: drop edges that mean nothing (zero or negative weight).
    let removed = graph.prune_zero_weight();
    info!(removed, remaining = graph.edge_count(), "Zero-weight edges removed");
    let components_before_threshold = connected_components(&graph).len();
    println!(
        "  Components before threshold: {components_before_threshold} ({} edges)",
        graph.edge_count()
    );

    // Step 3: apply the caller's threshold.
    let removed = graph.prune_below(threshold);
    info!(
        removed,
        remaining = graph.edge_count(),
        threshold,
        "Below-threshold edges removed"
    );

    // Step 4: the surviving components, refined by the strategy.
    let components = connected_components(&graph);
    println!(
        "  Components after threshold {threshold}: {} ({} edges)",
        components.len(),
        graph.edge_count()
    );
    let components = strategy.group(components, topics);

    // Step 5: canonical order, then reports.
    let components = canonical_order(components);
    let out_dir = config.grouping_dir(threshold);
    report::write_reports(&components, topics, config.range, &out_dir)?;

    Ok(GroupingOutcome {
        components_before_threshold,
        super_topics: components.len(),
        out_dir,
        components,
    })
}
