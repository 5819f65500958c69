// Super-topic grouping.
//
// A super-topic is a connected component of the thresholded similarity
// graph: topics from different months judged similar enough to be one
// persistent theme. Components are ordered canonically before numbering so
// that rerunning the grouping reproduces the same report byte for byte.

pub mod report;
pub mod successive;
pub mod threshold;
pub mod traits;

pub use successive::SuccessiveMerging;
pub use threshold::EdgeThresholdGrouping;
pub use traits::GroupingStrategy;

use std::collections::BTreeSet;

use crate::corpus::{TopicNode, TopicStore};

/// Sort components into the canonical report order.
///
/// Primary key: the space-joined, sorted list of each member's `YYYY_MM`
/// prefix (topic indices ignored) — components spanning the same months
/// sort together. Secondary key: the member list itself. Both keys are
/// total, so the order is deterministic across runs.
pub fn canonical_order(mut components: Vec<Vec<TopicNode>>) -> Vec<Vec<TopicNode>> {
    for component in &mut components {
        component.sort();
    }
    components.sort_by_cached_key(|component| {
        let mut prefixes: Vec<String> = component
            .iter()
            .map(|n| n.period.identifier())
            .collect();
        prefixes.sort();
        (prefixes.join(" "), component.clone())
    });
    components
}

/// The set of distinct words across a component's member topics.
///
/// BTreeSet keeps the union sorted, so the report's word lists come out in
/// a reproducible order.
pub fn component_words<'a>(
    component: &[TopicNode],
    topics: &'a TopicStore,
) -> BTreeSet<&'a str> {
    let mut words = BTreeSet::new();
    for node in component {
        if let Some(list) = topics.words(node) {
            words.extend(list.iter().map(String::as_str));
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::Period;

    fn node(year: i32, month: u32, topic: u32) -> TopicNode {
        TopicNode::new(Period::new(year, month), topic)
    }

    #[test]
    fn canonical_order_sorts_by_period_prefixes_then_members() {
        let components = vec![
            vec![node(2016, 1, 1)],
            vec![node(2015, 3, 2), node(2015, 1, 1)],
            vec![node(2015, 1, 2)],
        ];
        let ordered = canonical_order(components);
        assert_eq!(
            ordered,
            vec![
                vec![node(2015, 1, 1), node(2015, 3, 2)],
                vec![node(2015, 1, 2)],
                vec![node(2016, 1, 1)],
            ]
        );
    }

    #[test]
    fn canonical_order_is_deterministic_across_runs() {
        let components = vec![
            vec![node(2016, 5, 3), node(2015, 2, 1)],
            vec![node(2015, 12, 9)],
            vec![node(2015, 2, 2), node(2016, 5, 1)],
        ];
        let once = canonical_order(components.clone());
        let twice = canonical_order(components);
        assert_eq!(once, twice);
    }

    #[test]
    fn component_words_unions_and_sorts() {
        let mut store = TopicStore::new(1);
        store.insert(node(2015, 1, 1), vec!["zebra".into(), "apple".into()]);
        store.insert(node(2015, 2, 1), vec!["apple".into(), "mango".into()]);
        let words = component_words(&[node(2015, 1, 1), node(2015, 2, 1)], &store);
        let collected: Vec<&str> = words.into_iter().collect();
        assert_eq!(collected, vec!["apple", "mango", "zebra"]);
    }
}
