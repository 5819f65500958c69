// Pairwise topic similarity.
//
// Two coefficient strategies behind one trait, plus the aggregate step that
// turns a K×K pair matrix into a single model-similarity score and a list
// of topics the second period introduced.

pub mod jaccard;
pub mod measures;
pub mod traits;
pub mod word_overlap;

pub use jaccard::Jaccard;
pub use measures::{compare, PairComparison};
pub use traits::SimilarityCoefficient;
pub use word_overlap::WordOverlap;

use serde::{Deserialize, Serialize};

/// A K×K matrix of pairwise topic scores. Row i is topic i+1 of the first
/// period, column j is topic j+1 of the second. Word-overlap cells are
/// integral counts stored as f64; Jaccard cells are in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairMatrix {
    cells: Vec<Vec<f64>>,
}

impl PairMatrix {
    pub fn zeros(size: usize) -> Self {
        Self {
            cells: vec![vec![0.0; size]; size],
        }
    }

    /// Number of topics per side.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.cells[row][col] = value;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.iter().map(Vec::as_slice)
    }
}
