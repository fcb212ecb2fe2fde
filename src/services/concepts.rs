use std::collections::HashSet;

use crate::constants::lexicon::STOP_WORDS;

/// Alphabetic characters of a token, everything else dropped.
pub(crate) fn strip_non_alphabetic(token: &str) -> String {
    token.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

/// Salient content words of a sentence, in order of first occurrence.
/// Duplicates are kept at the sentence level.
pub fn extract_concepts(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(strip_non_alphabetic)
        .filter(|word| word.len() > 3 && !STOP_WORDS.contains(word.to_lowercase().as_str()))
        .collect()
}

/// Document-level concept aggregate: lowercased, longer than four letters,
/// deduplicated in first-seen order across a left-to-right scan.
pub fn all_concepts(sentences: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut concepts = Vec::new();
    for sentence in sentences {
        for concept in extract_concepts(sentence) {
            let lowered = concept.to_lowercase();
            if lowered.len() > 4 && seen.insert(lowered.clone()) {
                concepts.push(lowered);
            }
        }
    }
    concepts
}
