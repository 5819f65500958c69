use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use supertopics::config::Config;
use supertopics::corpus::loader;
use supertopics::grouping::{EdgeThresholdGrouping, GroupingStrategy, SuccessiveMerging};
use supertopics::output::terminal;
use supertopics::pipeline::similarity::EdgeCoefficient;
use supertopics::{pipeline, status};

/// Supertopics: cross-period topic similarity and grouping.
///
/// Compares the monthly BTM topic models of a studied period against each
/// other, builds a topic similarity graph, and groups topics across months
/// into persistent super-topics.
#[derive(Parser)]
#[command(name = "supertopics", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare every pair of months and build the similarity graph
    BuildGraph {
        /// Coefficient used for graph edge weights
        #[arg(long, value_enum, default_value = "jaccard")]
        edge_coefficient: CoefficientArg,
    },

    /// Threshold the similarity graph and group topics into super-topics
    Group {
        /// Minimum edge weight kept in the similarity graph
        #[arg(long)]
        threshold: f64,

        /// How raw components become super-topics
        #[arg(long, value_enum, default_value = "components")]
        strategy: StrategyArg,

        /// Word-union overlap fraction for successive merging (0..=1)
        #[arg(long, default_value = "0.8")]
        merge_fraction: f64,
    },

    /// Show artifact status (corpus coverage, graph, groupings)
    Status,
}

#[derive(Clone, Copy, ValueEnum)]
enum CoefficientArg {
    Jaccard,
    WordOverlap,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Connected components of the thresholded graph, as-is
    Components,
    /// Iterative merging of components with overlapping vocabularies
    Successive,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("supertopics=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::BuildGraph { edge_coefficient } => {
            let config = Config::load()?;
            config.require_topics_dir()?;
            config.ensure_output_dir()?;

            let coefficient = match edge_coefficient {
                CoefficientArg::Jaccard => EdgeCoefficient::Jaccard,
                CoefficientArg::WordOverlap => EdgeCoefficient::WordOverlap,
            };

            println!(
                "Comparing all period pairs of {}..={}...",
                config.range.start_year, config.range.end_year
            );
            let topics = loader::load_topics(&config)?;
            let outcome = pipeline::similarity::run(&config, &topics, coefficient)?;

            println!("\n{}", "Graph build complete.".bold());
            println!("  Period pairs compared: {}", outcome.pairs);
            println!("  Graph: {} nodes, {} edges", outcome.nodes, outcome.edges);
            println!("  Artifacts in: {}", config.output_dir.display());
            println!(
                "{}",
                "Next: run `supertopics group --threshold <w>`".dimmed()
            );
        }

        Commands::Group {
            threshold,
            strategy,
            merge_fraction,
        } => {
            let config = Config::load()?;
            config.require_topics_dir()?;

            if !(0.0..=1.0).contains(&merge_fraction) {
                anyhow::bail!("--merge-fraction must be between 0 and 1, got {merge_fraction}");
            }

            let strategy: Box<dyn GroupingStrategy> = match strategy {
                StrategyArg::Components => Box::new(EdgeThresholdGrouping),
                StrategyArg::Successive => Box::new(SuccessiveMerging { merge_fraction }),
            };

            println!(
                "Grouping topics at threshold {threshold} ({})...",
                strategy.name()
            );
            let topics = loader::load_topics(&config)?;
            let outcome = pipeline::grouping::run(&config, &topics, threshold, strategy.as_ref())?;

            terminal::display_super_topics(&outcome.components, &topics, config.range);

            println!("\n{}", "Grouping complete.".bold());
            println!("  Super-topics: {}", outcome.super_topics);
            println!("  Reports in: {}", outcome.out_dir.display());
        }

        Commands::Status => {
            let config = Config::load()?;
            status::show(&config)?;
        }
    }

    Ok(())
}
