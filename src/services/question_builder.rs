use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::templates::{
    concept_question_text, topic_fallbacks, DEFAULT_TOPIC, STATEMENT_FALLBACKS,
    TRUE_STATEMENT_QUESTION, UNRELATED_SUFFIX,
};
use crate::models::question::Question;
use crate::services::{concepts, corruptor};

const MAX_QUESTIONS: usize = 3;
const DISTRACTOR_COUNT: usize = 3;
const MIN_DISTRACTOR_CHARS: usize = 20;

enum Archetype {
    TrueStatement,
    ConceptQuestion,
}

// cycle: true-statement, concept-question, true-statement
fn archetype_for(position: usize) -> Archetype {
    match position % 3 {
        1 => Archetype::ConceptQuestion,
        _ => Archetype::TrueStatement,
    }
}

/// Assemble the final question set for the sampled sentences. Each question
/// carries exactly four pairwise-distinct options with the verbatim source
/// sentence among them.
pub fn build_questions<R: Rng>(
    selected: &[String],
    sentences: &[String],
    rng: &mut R,
) -> Vec<Question> {
    selected
        .iter()
        .take(MAX_QUESTIONS)
        .enumerate()
        .map(|(position, sentence)| match archetype_for(position) {
            Archetype::TrueStatement => {
                true_statement_question(position, sentence, sentences, rng)
            }
            Archetype::ConceptQuestion => concept_question(position, sentence, rng),
        })
        .collect()
}

/// Distractors come from corrupting the sentence itself plus one other
/// sentence picked at random, padded from the rest of the document when the
/// corruptions run dry.
fn true_statement_question<R: Rng>(
    position: usize,
    sentence: &str,
    sentences: &[String],
    rng: &mut R,
) -> Question {
    let mut pool = corruptor::corrupt(sentence);

    let others: Vec<&String> = sentences
        .iter()
        .filter(|s| s.as_str() != sentence)
        .collect();
    if let Some(other) = others.choose(rng) {
        pool.extend(corruptor::corrupt(other.as_str()));
    }

    let mut distractors = dedup(pool);
    distractors.retain(|c| c != sentence && c.chars().count() > MIN_DISTRACTOR_CHARS);
    distractors.shuffle(rng);
    distractors.truncate(DISTRACTOR_COUNT);

    // walk the remaining sentences in document order, then the generic
    // fallbacks; a filler that fails to corrupt is used verbatim, marked
    let mut fillers = others
        .iter()
        .map(|s| s.as_str())
        .chain(STATEMENT_FALLBACKS)
        .map(String::from);
    while distractors.len() < DISTRACTOR_COUNT {
        let Some(filler) = fillers.next() else {
            push_distinct(&mut distractors, STATEMENT_FALLBACKS[0].to_string(), sentence);
            continue;
        };
        let candidate = corruptor::corrupt(&filler)
            .into_iter()
            .next()
            .unwrap_or_else(|| format!("{}{}", filler, UNRELATED_SUFFIX));
        if candidate != sentence && !distractors.contains(&candidate) {
            distractors.push(candidate);
        }
    }

    assemble(position, TRUE_STATEMENT_QUESTION.to_string(), sentence, distractors, rng)
}

/// Distractors come from this sentence's own corruptions only; topic
/// fallbacks fill any gap.
fn concept_question<R: Rng>(position: usize, sentence: &str, rng: &mut R) -> Question {
    let topic = concepts::extract_concepts(sentence)
        .into_iter()
        .next()
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string());

    let mut distractors = dedup(corruptor::corrupt(sentence));
    distractors.retain(|c| c != sentence);
    distractors.shuffle(rng);
    distractors.truncate(DISTRACTOR_COUNT);

    let mut fallbacks = topic_fallbacks(&topic).into_iter();
    while distractors.len() < DISTRACTOR_COUNT {
        let Some(candidate) = fallbacks.next() else {
            push_distinct(
                &mut distractors,
                format!("{} is not mentioned in the summary", topic),
                sentence,
            );
            continue;
        };
        if candidate != sentence && !distractors.contains(&candidate) {
            distractors.push(candidate);
        }
    }

    assemble(position, concept_question_text(&topic), sentence, distractors, rng)
}

fn assemble<R: Rng>(
    position: usize,
    text: String,
    correct: &str,
    mut distractors: Vec<String>,
    rng: &mut R,
) -> Question {
    distractors.truncate(DISTRACTOR_COUNT);
    let mut options = Vec::with_capacity(DISTRACTOR_COUNT + 1);
    options.push(correct.to_string());
    options.append(&mut distractors);
    options.shuffle(rng);
    debug_assert_eq!(options.len(), DISTRACTOR_COUNT + 1);

    Question {
        id: position,
        text,
        options,
        correct_answer: correct.to_string(),
    }
}

/// First occurrence wins; later textual duplicates are dropped.
fn dedup(pool: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    pool.into_iter().filter(|c| seen.insert(c.clone())).collect()
}

/// Append a padding candidate, growing it with the unrelated marker until it
/// collides with neither the correct answer nor an existing distractor.
fn push_distinct(distractors: &mut Vec<String>, mut candidate: String, correct: &str) {
    while candidate == correct || distractors.iter().any(|d| *d == candidate) {
        candidate.push_str(UNRELATED_SUFFIX);
    }
    distractors.push(candidate);
}
