
#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::{corruptor, segmenter};

    #[test]
    fn sample_summary_has_seven_qualifying_sentences() {
        let sentences = segmenter::segment(&sample_summary());
        assert_eq!(sentences.len(), 7);
    }

    #[test]
    fn barren_summary_has_two_qualifying_sentences() {
        let sentences = segmenter::segment(&barren_summary());
        assert_eq!(sentences, barren_sentences());
    }

    #[test]
    fn barren_sentences_resist_every_corruption_strategy() {
        for sentence in barren_sentences() {
            assert!(corruptor::corrupt(&sentence).is_empty());
        }
    }

    #[test]
    fn seeded_rngs_are_reproducible() {
        use rand::Rng;

        let a: u64 = seeded_rng().gen();
        let b: u64 = seeded_rng().gen();
        assert_eq!(a, b);
    }
}
