// Plain threshold grouping.
//
// The edge pruning already happened on the graph; whatever hangs together
// afterwards is a super-topic.

use crate::corpus::{TopicNode, TopicStore};

use super::traits::GroupingStrategy;

pub struct EdgeThresholdGrouping;

impl GroupingStrategy for EdgeThresholdGrouping {
    fn name(&self) -> &'static str {
        "components"
    }

    fn group(&self, components: Vec<Vec<TopicNode>>, _topics: &TopicStore) -> Vec<Vec<TopicNode>> {
        components
    }
}
