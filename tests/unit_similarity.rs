// Unit tests for the pairwise similarity engine.
//
// Exercises the public coefficient strategies and the shared aggregate
// step: self-similarity, symmetry/asymmetry, the 95% near-tie band, bounds
// on the model similarity, and the new-topic complement rule.

use supertopics::similarity::{compare, Jaccard, SimilarityCoefficient, WordOverlap};

fn topics(lists: &[&[&str]]) -> Vec<Vec<String>> {
    lists
        .iter()
        .map(|l| l.iter().map(|w| w.to_string()).collect())
        .collect()
}

// ============================================================
// Jaccard — coefficient-level properties
// ============================================================

#[test]
fn jaccard_self_similarity_is_maximal() {
    let t = topics(&[&["economia", "reforma", "imposto"], &["saude", "hospital"]]);
    let m = Jaccard.matrix(&t, &t);
    for i in 0..t.len() {
        assert_eq!(m.get(i, i), 1.0, "topic {i} should match itself exactly");
    }
}

#[test]
fn jaccard_is_symmetric_for_all_pairs() {
    let t1 = topics(&[&["a", "b", "c"], &["d", "e", "f"]]);
    let t2 = topics(&[&["b", "c", "x"], &["e", "y", "z"]]);
    let forward = Jaccard.matrix(&t1, &t2);
    let backward = Jaccard.matrix(&t2, &t1);
    for i in 0..2 {
        for j in 0..2 {
            assert_eq!(forward.get(i, j), backward.get(j, i));
        }
    }
}

#[test]
fn word_overlap_is_asymmetric_when_multisets_differ() {
    // "voto voto urna" scores 3 against {voto, urna, lei}; the reverse
    // direction only scores 2.
    let t1 = topics(&[&["voto", "voto", "urna"]]);
    let t2 = topics(&[&["voto", "urna", "lei"]]);
    let forward = WordOverlap.matrix(&t1, &t2);
    let backward = WordOverlap.matrix(&t2, &t1);
    assert_ne!(forward.get(0, 0), backward.get(0, 0));
}

// ============================================================
// Aggregate step — matched set and new topics
// ============================================================

#[test]
fn matched_set_always_contains_the_argmax_column() {
    // Topic 1 of the second period is each row's best match; it must never
    // be reported as new.
    let t1 = topics(&[&["a", "b"], &["a", "c"]]);
    let t2 = topics(&[&["a", "b", "c"], &["x", "y", "z"]]);
    let result = compare(&Jaccard, &t1, &t2);
    assert!(!result.new_topics.contains(&1));
    assert_eq!(result.new_topics, vec![2]);
}

#[test]
fn new_topics_are_sorted_unique_and_one_based() {
    let t1 = topics(&[&["a"], &["a"], &["a"]]);
    let t2 = topics(&[&["x"], &["y"], &["a"]]);
    let result = compare(&Jaccard, &t1, &t2);
    assert_eq!(result.new_topics, vec![1, 2]);
    let mut sorted = result.new_topics.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted, result.new_topics);
}

#[test]
fn jaccard_model_similarity_stays_in_unit_interval() {
    let t1 = topics(&[&["a", "b"], &["c"], &["d", "e", "f"]]);
    let t2 = topics(&[&["a", "z"], &["q"], &["d", "e"]]);
    let result = compare(&Jaccard, &t1, &t2);
    assert!(result.similarity >= 0.0 && result.similarity <= 1.0);
}

// ============================================================
// Worked scenarios
// ============================================================

#[test]
fn scenario_partial_overlap_flags_second_topic_as_new() {
    let t1 = topics(&[&["a", "b", "c"], &["d", "e"]]);
    let t2 = topics(&[&["a", "b"], &["x", "y"]]);
    let result = compare(&Jaccard, &t1, &t2);

    assert!((result.matrix.get(0, 0) - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(result.matrix.get(0, 1), 0.0);
    assert_eq!(result.matrix.get(1, 0), 0.0);
    assert_eq!(result.matrix.get(1, 1), 0.0);
    assert_eq!(result.new_topics, vec![2]);
}

#[test]
fn scenario_identical_periods_have_full_similarity_and_no_new_topics() {
    let t = topics(&[&["a", "b"], &["c", "d"], &["e", "f"]]);
    let forward = compare(&Jaccard, &t, &t);
    assert_eq!(forward.similarity, 1.0);
    assert!(forward.new_topics.is_empty());
    for (i, row) in forward.matrix.rows().enumerate() {
        assert_eq!(row[i], 1.0);
    }

    // Both directions: the comparison is its own reverse here.
    let backward = compare(&Jaccard, &t, &t);
    assert!(backward.new_topics.is_empty());
}

#[test]
fn word_overlap_and_jaccard_agree_on_which_topics_are_new() {
    // Fully disjoint second topic: both coefficients must flag it.
    let t1 = topics(&[&["a", "b", "c"]]);
    let t2 = topics(&[&["x", "y", "z"]]);
    let wo = compare(&WordOverlap, &t1, &t2);
    let jc = compare(&Jaccard, &t1, &t2);
    assert_eq!(wo.new_topics, vec![1]);
    assert_eq!(jc.new_topics, vec![1]);
}
