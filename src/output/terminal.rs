// Colored terminal output for grouping results.
//
// This module handles all terminal-specific formatting: colors, tables,
// summaries. The main.rs display calls delegate here.

use colored::Colorize;

use crate::corpus::{TopicNode, TopicStore};
use crate::grouping::component_words;
use crate::output::truncate_chars;
use crate::period::PeriodRange;

/// How many super-topics the terminal summary lists before cutting off.
const SUMMARY_LIMIT: usize = 20;

/// Display the super-topics found by a grouping run.
pub fn display_super_topics(
    components: &[Vec<TopicNode>],
    topics: &TopicStore,
    range: PeriodRange,
) {
    println!(
        "\n{}",
        format!("=== Super-topics ({}) ===", components.len()).bold()
    );
    println!();
    println!(
        "  {:>5}  {:>7}  {:>7}  {}",
        "No.".dimmed(),
        "Topics".dimmed(),
        "Months".dimmed(),
        "Words".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for (position, component) in components.iter().take(SUMMARY_LIMIT).enumerate() {
        let months = touched_months(component, range);
        let words = component_words(component, topics);
        let preview: Vec<&str> = words.iter().copied().collect();
        let preview = truncate_chars(&preview.join(", "), 48);

        // Multi-month components are the interesting ones
        let number = format!("{:03}", position + 1);
        let number = if months > 1 {
            number.bold().to_string()
        } else {
            number.dimmed().to_string()
        };

        println!(
            "  {:>5}  {:>7}  {:>7}  {}",
            number,
            component.len(),
            months,
            preview.dimmed(),
        );
    }

    if components.len() > SUMMARY_LIMIT {
        println!(
            "  {}",
            format!("... and {} more", components.len() - SUMMARY_LIMIT).dimmed()
        );
    }
    println!();

    let spanning = components
        .iter()
        .filter(|c| touched_months(c, range) > 1)
        .count();
    println!(
        "  {} of {} super-topics span more than one month",
        spanning.to_string().bold(),
        components.len()
    );
}

fn touched_months(component: &[TopicNode], range: PeriodRange) -> usize {
    let mut seen = vec![false; range.len()];
    for node in component {
        if let Some(column) = range.column_index(node.period) {
            seen[column] = true;
        }
    }
    seen.into_iter().filter(|&t| t).count()
}
