// Successive grouping — iterative word-overlap merging.
//
// After the graph-based components are found, keep merging any two
// components whose word unions overlap by at least `merge_fraction` of the
// smaller union, until a full pass finds nothing to merge. Terminates
// because every merge round strictly decreases the component count.

use std::collections::BTreeSet;

use tracing::info;

use crate::corpus::{TopicNode, TopicStore};

use super::traits::GroupingStrategy;
use super::component_words;

pub struct SuccessiveMerging {
    /// Fraction of the smaller word union that must be shared for two
    /// components to merge.
    pub merge_fraction: f64,
}

impl GroupingStrategy for SuccessiveMerging {
    fn name(&self) -> &'static str {
        "successive"
    }

    fn group(
        &self,
        mut components: Vec<Vec<TopicNode>>,
        topics: &TopicStore,
    ) -> Vec<Vec<TopicNode>> {
        let mut round = 0;
        loop {
            let merge_groups = self.find_merge_groups(&components, topics);
            if merge_groups.is_empty() {
                if round > 0 {
                    info!(rounds = round, components = components.len(), "Successive merging converged");
                }
                return components;
            }
            round += 1;

            let mut merged: Vec<Vec<TopicNode>> = Vec::new();
            let mut absorbed: BTreeSet<usize> = BTreeSet::new();
            for group in &merge_groups {
                let mut combined = Vec::new();
                for &index in group {
                    absorbed.insert(index);
                    combined.extend(components[index].iter().copied());
                }
                combined.sort();
                merged.push(combined);
            }
            for (index, component) in components.into_iter().enumerate() {
                if !absorbed.contains(&index) {
                    merged.push(component);
                }
            }
            components = merged;
        }
    }
}

impl SuccessiveMerging {
    /// One pass over all component pairs: collect groups of component
    /// indices chained together by qualifying overlaps. A pair joins an
    /// existing group as soon as either index is already in it.
    fn find_merge_groups(
        &self,
        components: &[Vec<TopicNode>],
        topics: &TopicStore,
    ) -> Vec<BTreeSet<usize>> {
        let unions: Vec<BTreeSet<&str>> = components
            .iter()
            .map(|c| component_words(c, topics))
            .collect();

        let mut groups: Vec<BTreeSet<usize>> = Vec::new();
        for i in 0..components.len() {
            for j in (i + 1)..components.len() {
                let smaller = unions[i].len().min(unions[j].len());
                let shared = unions[i].intersection(&unions[j]).count();
                if smaller == 0 || (shared as f64) < self.merge_fraction * smaller as f64 {
                    continue;
                }
                match groups.iter_mut().find(|g| g.contains(&i) || g.contains(&j)) {
                    Some(group) => {
                        group.insert(i);
                        group.insert(j);
                    }
                    None => {
                        groups.push(BTreeSet::from([i, j]));
                    }
                }
            }
        }
        groups
    }
}
