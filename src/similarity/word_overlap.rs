// Word overlap coefficient: shared-word counts without union normalization.
//
// Cell (i, j) counts the words of topic i — per occurrence, order ignored —
// that appear anywhere in topic j's word set. A word listed twice in topic
// i scores twice, so the coefficient is asymmetric whenever the two topics'
// word multisets differ in composition.

use std::collections::HashSet;

use super::traits::SimilarityCoefficient;
use super::PairMatrix;

pub struct WordOverlap;

impl SimilarityCoefficient for WordOverlap {
    fn name(&self) -> &'static str {
        "wo"
    }

    fn matrix(&self, topics_a: &[Vec<String>], topics_b: &[Vec<String>]) -> PairMatrix {
        let sets_b: Vec<HashSet<&str>> = topics_b
            .iter()
            .map(|t| t.iter().map(String::as_str).collect())
            .collect();

        let mut matrix = PairMatrix::zeros(topics_a.len());
        for (i, words_a) in topics_a.iter().enumerate() {
            for (j, set_b) in sets_b.iter().enumerate() {
                let count = words_a
                    .iter()
                    .filter(|w| set_b.contains(w.as_str()))
                    .count();
                matrix.set(i, j, count as f64);
            }
        }
        matrix
    }
}
