// Jaccard coefficient: |intersection| / |union| over topic word sets.
//
// Duplicate words within a topic collapse before scoring. An empty union
// scores 0.0 rather than dividing by zero.

use std::collections::HashSet;

use super::traits::SimilarityCoefficient;
use super::PairMatrix;

pub struct Jaccard;

impl SimilarityCoefficient for Jaccard {
    fn name(&self) -> &'static str {
        "jaccard"
    }

    fn matrix(&self, topics_a: &[Vec<String>], topics_b: &[Vec<String>]) -> PairMatrix {
        let sets_a: Vec<HashSet<&str>> = topics_a.iter().map(|t| word_set(t)).collect();
        let sets_b: Vec<HashSet<&str>> = topics_b.iter().map(|t| word_set(t)).collect();

        let mut matrix = PairMatrix::zeros(topics_a.len());
        for (i, set_a) in sets_a.iter().enumerate() {
            for (j, set_b) in sets_b.iter().enumerate() {
                matrix.set(i, j, jaccard_index(set_a, set_b));
            }
        }
        matrix
    }
}

fn word_set(words: &[String]) -> HashSet<&str> {
    words.iter().map(String::as_str).collect()
}

fn jaccard_index(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(lists: &[&[&str]]) -> Vec<Vec<String>> {
        lists
            .iter()
            .map(|l| l.iter().map(|w| w.to_string()).collect())
            .collect()
    }

    #[test]
    fn self_similarity_is_one() {
        let t = topics(&[&["a", "b", "c"]]);
        let m = Jaccard.matrix(&t, &t);
        assert_eq!(m.get(0, 0), 1.0);
    }

    #[test]
    fn symmetric_in_both_arguments() {
        let t1 = topics(&[&["a", "b", "c"]]);
        let t2 = topics(&[&["b", "c", "d", "e"]]);
        let forward = Jaccard.matrix(&t1, &t2);
        let backward = Jaccard.matrix(&t2, &t1);
        assert_eq!(forward.get(0, 0), backward.get(0, 0));
        // |{b,c}| / |{a,b,c,d,e}|
        assert_eq!(forward.get(0, 0), 2.0 / 5.0);
    }

    #[test]
    fn duplicates_collapse_to_a_set() {
        let t1 = topics(&[&["a", "a", "b"]]);
        let t2 = topics(&[&["a", "b"]]);
        let m = Jaccard.matrix(&t1, &t2);
        assert_eq!(m.get(0, 0), 1.0);
    }

    #[test]
    fn empty_union_scores_zero() {
        let t1 = topics(&[&[]]);
        let t2 = topics(&[&[]]);
        let m = Jaccard.matrix(&t1, &t2);
        assert_eq!(m.get(0, 0), 0.0);
    }

    #[test]
    fn entries_stay_in_unit_interval() {
        let t1 = topics(&[&["a", "b"], &["c", "d"]]);
        let t2 = topics(&[&["a", "x"], &["c", "d"]]);
        let m = Jaccard.matrix(&t1, &t2);
        for row in m.rows() {
            for &cell in row {
                assert!((0.0..=1.0).contains(&cell));
            }
        }
    }
}
