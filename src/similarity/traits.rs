// Similarity coefficient trait — swap-ready abstraction.
//
// Both coefficients answer the same question ("given two ordered sets of K
// topics, how similar is each topic to each topic?") so the graph builder
// and the measures report stay agnostic about which one is in play.

use super::PairMatrix;

/// Strategy for scoring every topic of one period against every topic of
/// another. Implementations must return a square matrix with one row per
/// topic of `topics_a` and one column per topic of `topics_b`.
pub trait SimilarityCoefficient {
    /// Short identifier used in artifact file names ("jaccard", "wo").
    fn name(&self) -> &'static str;

    /// Compute the pairwise score matrix.
    fn matrix(&self, topics_a: &[Vec<String>], topics_b: &[Vec<String>]) -> PairMatrix;
}
