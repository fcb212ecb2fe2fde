use rand::Rng;

use crate::models::question::QuizSet;
use crate::services::{question_builder, sampler, segmenter};

const MIN_QUALIFYING_SENTENCES: usize = 2;

pub struct QuizService;

impl QuizService {
    /// Generate a quiz from summary text with ambient randomness. Fewer than
    /// two qualifying sentences yields an empty set, never an error.
    pub fn generate(summary_text: &str) -> QuizSet {
        Self::generate_with_rng(summary_text, &mut rand::thread_rng())
    }

    /// Generate with a caller-supplied random source. Segmentation and
    /// sampling carry no randomness, so the eligible sentences and the
    /// correct answers are fixed per input; only distractor selection and
    /// option order vary with `rng`.
    pub fn generate_with_rng<R: Rng>(summary_text: &str, rng: &mut R) -> QuizSet {
        let sentences = segmenter::segment(summary_text);
        if sentences.len() < MIN_QUALIFYING_SENTENCES {
            log::debug!(
                "{} qualifying sentences, quiz unavailable",
                sentences.len()
            );
            return QuizSet::default();
        }

        let selected: Vec<String> = sampler::sample_indices(sentences.len())
            .into_iter()
            .map(|index| sentences[index].clone())
            .collect();
        log::info!(
            "generating {} questions from {} qualifying sentences",
            selected.len(),
            sentences.len()
        );

        let questions = question_builder::build_questions(&selected, &sentences, rng);
        QuizSet { questions }
    }
}
