// Artifact status display — what has been built and how stale it is.

use std::fs;

use anyhow::Result;
use chrono::{DateTime, Local};

use crate::config::Config;
use crate::graph::store;

/// Display pipeline status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    // Corpus coverage
    if config.topics_dir.as_os_str().is_empty() {
        println!("Topics: SUPERTOPICS_TOPICS_DIR not set");
    } else {
        let present = config
            .range
            .periods()
            .filter(|&p| config.twords_path(p).is_file())
            .count();
        println!(
            "Topics: {} ({present}/{} period files present)",
            config.topics_dir.display(),
            config.range.len()
        );
    }

    // Graph artifact
    let graph_path = config.graph_path();
    if graph_path.is_file() {
        let graph = store::load(&graph_path)?;
        println!(
            "Graph: {} nodes, {} edges ({})",
            graph.node_count(),
            graph.edge_count(),
            modified_at(&graph_path)
        );
    } else {
        println!("Graph: not built");
        println!("  Run `supertopics build-graph` to build it");
    }

    // Measures report
    let measures_path = config.measures_path();
    if measures_path.is_file() {
        let rows = fs::read_to_string(&measures_path)
            .map(|s| s.lines().count().saturating_sub(1))
            .unwrap_or(0);
        println!("Measures: {rows} period pairs recorded");
    } else {
        println!("Measures: not written yet");
    }

    // Grouping runs
    let mut groupings: Vec<String> = Vec::new();
    if let Ok(entries) = fs::read_dir(&config.output_dir) {
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with("similar_topics_criteria_") && entry.path().is_dir() {
                groupings.push(name);
            }
        }
    }
    groupings.sort();
    if groupings.is_empty() {
        println!("Groupings: none yet");
        println!("  Run `supertopics group --threshold <w>` after building the graph");
    } else {
        println!("Groupings:");
        for name in groupings {
            println!("  {name}");
        }
    }

    Ok(())
}

fn modified_at(path: &std::path::Path) -> String {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map(|t| {
            let local: DateTime<Local> = t.into();
            local.format("built %Y-%m-%d %H:%M").to_string()
        })
        .unwrap_or_else(|_| "age unknown".to_string())
}
