// Aggregate measures over a pair matrix.
//
// For each topic of the first period, its best match in the second period
// sets a row maximum; near-ties within 5% of that maximum count as matched
// too, so rounding noise between almost-equally-similar topics does not
// produce spurious "new topic" flags. Topics of the second period that no
// row matched are the new topics.

use std::collections::BTreeSet;

use super::traits::SimilarityCoefficient;
use super::PairMatrix;

/// Fraction of a row's maximum that still counts as a match.
pub const NEAR_TIE_TOLERANCE: f64 = 0.95;

/// The aggregate outcome of comparing two periods under one coefficient.
#[derive(Debug, Clone)]
pub struct PairComparison {
    /// Mean of the row maxima — one number for how much of period A
    /// survives into period B.
    pub similarity: f64,
    /// 1-based topic numbers of period B that nothing in period A matched,
    /// ascending, no duplicates.
    pub new_topics: Vec<u32>,
    /// The raw K×K matrix, kept for the graph builder and the artifacts.
    pub matrix: PairMatrix,
}

impl PairComparison {
    pub fn new_topic_count(&self) -> usize {
        self.new_topics.len()
    }
}

/// Compare two periods' topic lists under `coefficient` and aggregate.
pub fn compare(
    coefficient: &dyn SimilarityCoefficient,
    topics_a: &[Vec<String>],
    topics_b: &[Vec<String>],
) -> PairComparison {
    aggregate(coefficient.matrix(topics_a, topics_b))
}

/// The shared aggregate step, independent of which coefficient filled the
/// matrix.
pub fn aggregate(matrix: PairMatrix) -> PairComparison {
    let size = matrix.size();
    let mut matched: BTreeSet<usize> = BTreeSet::new();
    let mut maxima_sum = 0.0;

    for row in matrix.rows() {
        let row_max = row.iter().cloned().fold(0.0_f64, f64::max);
        maxima_sum += row_max;

        // A zero row carries no evidence that any column topic was seen.
        if row_max > 0.0 {
            for (col, &cell) in row.iter().enumerate() {
                if cell >= NEAR_TIE_TOLERANCE * row_max {
                    matched.insert(col);
                }
            }
        }
    }

    let similarity = if size == 0 {
        0.0
    } else {
        maxima_sum / size as f64
    };

    let new_topics: Vec<u32> = (0..size)
        .filter(|col| !matched.contains(col))
        .map(|col| col as u32 + 1)
        .collect();

    PairComparison {
        similarity,
        new_topics,
        matrix,
    }
}
