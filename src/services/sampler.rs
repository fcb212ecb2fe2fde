/// Indices of up to three sentences spread across the document: the midpoint
/// of each third, clamped into range, deduplicated, ascending. Small inputs
/// collapse to fewer indices when the midpoints coincide.
pub fn sample_indices(sentence_count: usize) -> Vec<usize> {
    if sentence_count == 0 {
        return Vec::new();
    }
    let third = sentence_count as f64 / 3.0;
    let mut indices = Vec::new();
    for midpoint in [0.5, 1.5, 2.5] {
        let index = ((third * midpoint).round() as usize).min(sentence_count - 1);
        if !indices.contains(&index) {
            indices.push(index);
        }
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_sentences_pick_one_from_each_third() {
        assert_eq!(sample_indices(6), vec![1, 3, 5]);
    }

    #[test]
    fn thirty_sentences_pick_the_third_midpoints() {
        assert_eq!(sample_indices(30), vec![5, 15, 25]);
    }

    #[test]
    fn two_sentences_collapse_to_both() {
        assert_eq!(sample_indices(2), vec![0, 1]);
    }

    #[test]
    fn one_sentence_collapses_to_it() {
        assert_eq!(sample_indices(1), vec![0]);
    }

    #[test]
    fn no_sentences_yield_no_indices() {
        assert!(sample_indices(0).is_empty());
    }

    #[test]
    fn indices_are_always_in_range_and_ascending() {
        for n in 1..50 {
            let indices = sample_indices(n);
            assert!(!indices.is_empty());
            assert!(indices.len() <= 3);
            assert!(indices.iter().all(|&i| i < n));
            assert!(indices.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
