// Topic corpus — the keyed store of per-period topic word lists.
//
// The external BTM run produces, for each month, a ranked word list per
// topic. Topics are addressed by a structured composite key rather than a
// concatenated string; the string form exists only at the serialization
// boundary (graph artifact, report files).

pub mod loader;

use std::collections::BTreeMap;
use std::fmt;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::period::Period;

/// Composite key for one topic of one period. Topic indices are 1-based,
/// matching the topic model's own numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TopicNode {
    pub period: Period,
    pub topic: u32,
}

impl TopicNode {
    pub fn new(period: Period, topic: u32) -> Self {
        Self { period, topic }
    }

    /// The `YYYY_MM_topic_TT` identifier used in the graph artifact and in
    /// the grouping reports.
    pub fn identifier(&self) -> String {
        format!("{}_topic_{:02}", self.period.identifier(), self.topic)
    }
}

impl fmt::Display for TopicNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_topic_{:02}", self.period, self.topic)
    }
}

impl From<TopicNode> for String {
    fn from(node: TopicNode) -> String {
        node.identifier()
    }
}

impl TryFrom<String> for TopicNode {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> {
        let (period, topic) = s
            .split_once("_topic_")
            .ok_or_else(|| anyhow!("invalid topic node identifier: {s:?}"))?;
        let period: Period = period.parse()?;
        let topic: u32 = topic
            .parse()
            .map_err(|_| anyhow!("invalid topic number in node identifier: {s:?}"))?;
        Ok(Self { period, topic })
    }
}

/// All loaded topics, keyed by (period, topic index). Built once per run by
/// the loader and immutable afterwards.
#[derive(Debug, Default)]
pub struct TopicStore {
    topics: BTreeMap<TopicNode, Vec<String>>,
    num_topics: u32,
}

impl TopicStore {
    pub fn new(num_topics: u32) -> Self {
        Self {
            topics: BTreeMap::new(),
            num_topics,
        }
    }

    pub fn num_topics(&self) -> u32 {
        self.num_topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn insert(&mut self, node: TopicNode, words: Vec<String>) {
        self.topics.insert(node, words);
    }

    /// Word list for one topic, if loaded.
    pub fn words(&self, node: &TopicNode) -> Option<&[String]> {
        self.topics.get(node).map(Vec::as_slice)
    }

    /// The K word lists of one period in ascending topic order.
    ///
    /// Errors when the period was never loaded — the loader guarantees all
    /// K topics of a loaded period are present together.
    pub fn period_topics(&self, period: Period) -> Result<Vec<Vec<String>>> {
        let mut lists = Vec::with_capacity(self.num_topics as usize);
        for topic in 1..=self.num_topics {
            let node = TopicNode::new(period, topic);
            let words = self
                .topics
                .get(&node)
                .ok_or_else(|| anyhow!("no topics loaded for period {period}"))?;
            lists.push(words.clone());
        }
        Ok(lists)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &TopicNode> {
        self.topics.keys()
    }
}
