// Grouping strategy trait — swap-ready abstraction.
//
// Component discovery over the pruned graph is shared; what differs is how
// the raw components become the final super-topics. The plain strategy
// takes them as-is, the successive strategy keeps merging components with
// heavily overlapping vocabularies.

use crate::corpus::{TopicNode, TopicStore};

/// Strategy for refining raw connected components into super-topics.
pub trait GroupingStrategy {
    /// Short identifier for logs and summaries.
    fn name(&self) -> &'static str;

    /// Refine `components` into the final grouping. Implementations may
    /// merge components but never split or drop members.
    fn group(&self, components: Vec<Vec<TopicNode>>, topics: &TopicStore) -> Vec<Vec<TopicNode>>;
}
