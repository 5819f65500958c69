// All-to-all similarity pipeline: the graph building phase.
//
// Compares every ordered pair of periods (p1 <= p2 in calendar order,
// including a month against itself as a sanity baseline), records both
// coefficients' aggregate measures to the semicolon report, persists each
// raw K×K matrix, and inserts one weighted edge per topic pair into the
// similarity graph. Rerunning an already-processed pair overwrites its
// edges; callers are expected not to.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::config::Config;
use crate::corpus::{TopicNode, TopicStore};
use crate::graph::{store, TopicGraph};
use crate::period::Period;
use crate::similarity::{compare, Jaccard, PairMatrix, SimilarityCoefficient, WordOverlap};

/// Which coefficient's matrix feeds the graph edge weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeCoefficient {
    /// Normalized [0, 1] weights (the default).
    Jaccard,
    /// Raw shared-word counts.
    WordOverlap,
}

/// Counts reported back to the CLI after a build run.
pub struct BuildOutcome {
    pub pairs: usize,
    pub nodes: usize,
    pub edges: usize,
}

/// Run the graph building phase over an already-loaded corpus.
pub fn run(
    config: &Config,
    topics: &TopicStore,
    edge_coefficient: EdgeCoefficient,
) -> Result<BuildOutcome> {
    // Step 1: one node per (period, topic), before any edges, so isolated
    // topics still exist for the grouping phase.
    let mut graph = TopicGraph::new();
    for period in config.range.periods() {
        for topic in 1..=config.num_topics {
            graph.add_node(TopicNode::new(period, topic));
        }
    }
    info!(nodes = graph.node_count(), "Graph nodes initialized");

    // Step 2: measures report with its fixed header.
    let measures_path = config.measures_path();
    let mut measures = BufWriter::new(File::create(&measures_path).with_context(|| {
        format!("failed to create measures report {}", measures_path.display())
    })?);
    writeln!(
        measures,
        "Month1;Month2;WO Similarity;WO New Topics;WO Number of New Topics;\
         Jaccard Similarity;Jaccard New Topics;Jaccard Number of New Topics"
    )?;

    // Step 3: compare every ordered pair.
    let pairs = config.range.ordered_pairs();
    let pb = ProgressBar::new(pairs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Comparing [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    for &(p1, p2) in &pairs {
        let topics_a = topics.period_topics(p1)?;
        let topics_b = topics.period_topics(p2)?;

        let wo = compare(&WordOverlap, &topics_a, &topics_b);
        let jc = compare(&Jaccard, &topics_a, &topics_b);

        writeln!(
            measures,
            "{};{};{};{:?};{};{};{:?};{}",
            p1,
            p2,
            wo.similarity,
            wo.new_topics,
            wo.new_topic_count(),
            jc.similarity,
            jc.new_topics,
            jc.new_topic_count()
        )?;

        save_matrix(config, WordOverlap.name(), p1, p2, &wo.matrix)?;
        save_matrix(config, Jaccard.name(), p1, p2, &jc.matrix)?;

        let edge_matrix = match edge_coefficient {
            EdgeCoefficient::Jaccard => &jc.matrix,
            EdgeCoefficient::WordOverlap => &wo.matrix,
        };
        add_pair_edges(&mut graph, p1, p2, edge_matrix);

        pb.inc(1);
    }
    pb.finish_and_clear();

    measures
        .flush()
        .with_context(|| format!("failed to write {}", measures_path.display()))?;

    // Step 4: persist the finished graph for the grouping phase.
    store::save(&graph, &config.graph_path())?;

    Ok(BuildOutcome {
        pairs: pairs.len(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
    })
}

/// Insert one edge per (topic of p1, topic of p2) cell. Topic indices are
/// 1-based on the nodes, 0-based in the matrix.
fn add_pair_edges(graph: &mut TopicGraph, p1: Period, p2: Period, matrix: &PairMatrix) {
    for i in 0..matrix.size() {
        for j in 0..matrix.size() {
            graph.add_edge(
                TopicNode::new(p1, i as u32 + 1),
                TopicNode::new(p2, j as u32 + 1),
                matrix.get(i, j),
            );
        }
    }
}

fn save_matrix(
    config: &Config,
    coefficient: &str,
    p1: Period,
    p2: Period,
    matrix: &PairMatrix,
) -> Result<()> {
    let path = config.matrix_path(coefficient, p1, p2);
    write_matrix(matrix, &path)
}

fn write_matrix(matrix: &PairMatrix, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create matrix artifact {}", path.display()))?;
    serde_json::to_writer(BufWriter::new(file), matrix)
        .with_context(|| format!("failed to serialize matrix to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::Period;

    #[test]
    fn pair_edges_cover_the_full_matrix() {
        let mut graph = TopicGraph::new();
        let p1 = Period::new(2015, 1);
        let p2 = Period::new(2015, 2);
        let mut matrix = PairMatrix::zeros(2);
        matrix.set(0, 1, 0.4);

        add_pair_edges(&mut graph, p1, p2, &matrix);

        assert_eq!(graph.edge_count(), 4);
        assert_eq!(
            graph.weight(&TopicNode::new(p1, 1), &TopicNode::new(p2, 2)),
            Some(0.4)
        );
        assert_eq!(
            graph.weight(&TopicNode::new(p1, 2), &TopicNode::new(p2, 2)),
            Some(0.0)
        );
    }

    #[test]
    fn same_period_pair_writes_self_loops() {
        let mut graph = TopicGraph::new();
        let p = Period::new(2015, 1);
        let mut matrix = PairMatrix::zeros(2);
        matrix.set(0, 0, 1.0);
        matrix.set(1, 1, 1.0);
        matrix.set(0, 1, 0.2);
        matrix.set(1, 0, 0.2);

        add_pair_edges(&mut graph, p, p, &matrix);

        // Two self-loops plus the cross edge (i,j) and (j,i) collapse to one.
        assert_eq!(graph.edge_count(), 3);
        let t1 = TopicNode::new(p, 1);
        assert_eq!(graph.weight(&t1, &t1), Some(1.0));
    }
}
