use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::period::{Period, PeriodRange};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// dataset-shaped lives here (paths, folder layout, K, studied years);
/// per-run knobs such as the grouping threshold are CLI arguments.
pub struct Config {
    /// Folder containing one subfolder per period with its twords file.
    pub topics_dir: PathBuf,
    /// Folder receiving all artifacts: measures report, matrices, graph,
    /// grouping output subfolders.
    pub output_dir: PathBuf,
    /// Number of topics K produced by each monthly run.
    pub num_topics: u32,
    /// Studied span of whole years.
    pub range: PeriodRange,
    /// Period subfolder prefix, `<prefix>_<YYYY>_<MM>`.
    pub period_dir_prefix: String,
    /// Name of the per-period topic words file.
    pub twords_filename: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only the topics directory has no usable default — everything else
    /// falls back to a K = 10 model over 2015..=2016.
    pub fn load() -> Result<Self> {
        let num_topics: u32 = env_or("SUPERTOPICS_NUM_TOPICS", "10")
            .parse()
            .context("SUPERTOPICS_NUM_TOPICS must be a positive integer")?;

        let start_year: i32 = env_or("SUPERTOPICS_START_YEAR", "2015")
            .parse()
            .context("SUPERTOPICS_START_YEAR must be a year")?;
        let end_year: i32 = env_or("SUPERTOPICS_END_YEAR", "2016")
            .parse()
            .context("SUPERTOPICS_END_YEAR must be a year")?;

        Ok(Self {
            topics_dir: PathBuf::from(env_or("SUPERTOPICS_TOPICS_DIR", "")),
            output_dir: PathBuf::from(env_or("SUPERTOPICS_OUTPUT_DIR", "./output")),
            num_topics,
            range: PeriodRange::new(start_year, end_year)?,
            period_dir_prefix: env_or("SUPERTOPICS_PERIOD_PREFIX", "btm"),
            twords_filename: env_or("SUPERTOPICS_TWORDS_FILE", "final_btm_model.twords"),
        })
    }

    /// Check that the topics directory is configured and present.
    /// Call this before any operation that reads the corpus.
    pub fn require_topics_dir(&self) -> Result<()> {
        if self.topics_dir.as_os_str().is_empty() {
            anyhow::bail!(
                "SUPERTOPICS_TOPICS_DIR not set. Point it at the folder that\n\
                 contains one <prefix>_<year>_<month> subfolder per studied month."
            );
        }
        if !self.topics_dir.is_dir() {
            anyhow::bail!(
                "topics directory {} does not exist",
                self.topics_dir.display()
            );
        }
        Ok(())
    }

    /// Create the output directory if needed.
    pub fn ensure_output_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "failed to create output directory {}",
                self.output_dir.display()
            )
        })
    }

    /// Subfolder holding one period's topic model output.
    pub fn period_dir(&self, period: Period) -> PathBuf {
        self.topics_dir.join(format!(
            "{}_{}",
            self.period_dir_prefix,
            period.identifier()
        ))
    }

    /// Full path to one period's twords file.
    pub fn twords_path(&self, period: Period) -> PathBuf {
        self.period_dir(period).join(&self.twords_filename)
    }

    /// The semicolon-delimited per-pair measures report.
    pub fn measures_path(&self) -> PathBuf {
        self.output_dir.join("general_measures.txt")
    }

    /// The persisted similarity graph artifact.
    pub fn graph_path(&self) -> PathBuf {
        self.output_dir.join("similarity_graph.json")
    }

    /// Artifact path for one persisted K×K pair matrix.
    pub fn matrix_path(&self, coefficient: &str, p1: Period, p2: Period) -> PathBuf {
        self.output_dir.join(format!(
            "{}_topic_pairs_matrix_{}_{}.json",
            coefficient,
            p1.identifier(),
            p2.identifier()
        ))
    }

    /// Output subfolder for one grouping run at the given threshold.
    pub fn grouping_dir(&self, threshold: f64) -> PathBuf {
        self.output_dir
            .join(format!("similar_topics_criteria_{threshold}_threshold"))
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
