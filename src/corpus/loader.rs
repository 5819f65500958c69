// Topic file loading.
//
// Each month's BTM run leaves a twords file in its own subfolder under the
// topics directory: one line per topic in ascending index order, top words
// separated by whitespace, no header. A missing folder or a line-count
// mismatch is bad input and aborts the run.

use std::fs;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::config::Config;
use crate::corpus::{TopicNode, TopicStore};
use crate::period::Period;

/// Load every period of the studied range into a [`TopicStore`].
pub fn load_topics(config: &Config) -> Result<TopicStore> {
    let mut store = TopicStore::new(config.num_topics);

    for period in config.range.periods() {
        let lists = load_period(config, period)?;
        for (index, words) in lists.into_iter().enumerate() {
            store.insert(TopicNode::new(period, index as u32 + 1), words);
        }
    }

    info!(
        topics = store.len(),
        periods = config.range.len(),
        "Topic corpus loaded"
    );
    Ok(store)
}

/// Read one period's twords file into K word lists, ascending topic order.
pub fn load_period(config: &Config, period: Period) -> Result<Vec<Vec<String>>> {
    let path = config.twords_path(period);
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read topic file {}", path.display()))?;

    let lists: Vec<Vec<String>> = contents
        .lines()
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect();

    if lists.len() != config.num_topics as usize {
        bail!(
            "topic file {} has {} topic lines, expected {}",
            path.display(),
            lists.len(),
            config.num_topics
        );
    }

    Ok(lists)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::period::PeriodRange;

    fn scratch_config(name: &str) -> Config {
        let root = std::env::temp_dir().join(format!("supertopics-loader-{name}"));
        Config {
            topics_dir: root.join("topics"),
            output_dir: root.join("out"),
            num_topics: 2,
            range: PeriodRange::new(2015, 2015).unwrap(),
            period_dir_prefix: "btm".to_string(),
            twords_filename: "final_btm_model.twords".to_string(),
        }
    }

    fn write_twords(config: &Config, period: Period, lines: &str) -> PathBuf {
        let path = config.twords_path(period);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, lines).unwrap();
        path
    }

    #[test]
    fn load_period_splits_words_in_order() {
        let config = scratch_config("order");
        let period = Period::new(2015, 1);
        write_twords(&config, period, "alpha beta gamma\ndelta epsilon\n");

        let lists = load_period(&config, period).unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0], vec!["alpha", "beta", "gamma"]);
        assert_eq!(lists[1], vec!["delta", "epsilon"]);
    }

    #[test]
    fn load_period_fails_on_missing_file() {
        let config = scratch_config("missing");
        let err = load_period(&config, Period::new(2015, 2)).unwrap_err();
        assert!(err.to_string().contains("failed to read topic file"));
    }

    #[test]
    fn load_period_fails_on_short_file() {
        let config = scratch_config("short");
        let period = Period::new(2015, 3);
        let path = write_twords(&config, period, "only one line\n");

        let err = load_period(&config, period).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("1 topic lines, expected 2"));
        assert!(msg.contains(&path.display().to_string()));
    }

    #[test]
    fn load_period_fails_on_extra_lines() {
        let config = scratch_config("long");
        let period = Period::new(2015, 4);
        write_twords(&config, period, "a b\nc d\ne f\n");

        assert!(load_period(&config, period).is_err());
    }
}
