use crate::constants::lexicon::{ANTONYMS, AUXILIARY_VERBS, NEGATION_WORDS, STOP_WORDS};
use crate::services::concepts::strip_non_alphabetic;

const KEY_WORD_MIN_LEN: usize = 5;

/// False variants of a true sentence. Candidates arrive in a fixed order:
/// every antonym swap in scan order, then at most one negation insertion,
/// then at most one key-word transposition. A candidate equal to the
/// (whitespace-normalized) input is discarded, so no strategy can hand back
/// a no-op edit.
pub fn corrupt(sentence: &str) -> Vec<String> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let original = words.join(" ");
    let mut candidates = Vec::new();

    antonym_swaps(&words, &original, &mut candidates);
    if let Some(candidate) = negation_insertion(&words) {
        candidates.push(candidate);
    }
    if let Some(candidate) = keyword_transposition(&words, &original) {
        candidates.push(candidate);
    }
    candidates
}

/// One candidate per matched word: the single occurrence is replaced by its
/// opposite, keeping the original token's leading capitalization. A token's
/// attached punctuation does not survive the replacement.
fn antonym_swaps(words: &[&str], original: &str, out: &mut Vec<String>) {
    for (index, word) in words.iter().enumerate() {
        let clean = strip_non_alphabetic(word).to_lowercase();
        let Some(opposite) = ANTONYMS.get(clean.as_str()) else {
            continue;
        };
        let replacement = match_capitalization(word, opposite);
        let candidate = splice(words, index, &replacement);
        if candidate != original {
            out.push(candidate);
        }
    }
}

/// Insert a literal "not" after the first auxiliary verb that is not already
/// followed by a negation, then stop scanning.
fn negation_insertion(words: &[&str]) -> Option<String> {
    for (index, word) in words.iter().enumerate() {
        let clean = strip_non_alphabetic(word).to_lowercase();
        if !AUXILIARY_VERBS.contains(&clean.as_str()) {
            continue;
        }
        let next = words
            .get(index + 1)
            .map(|w| w.to_lowercase())
            .unwrap_or_default();
        if NEGATION_WORDS.contains(&next.as_str()) {
            continue;
        }
        let mut negated: Vec<&str> = words.to_vec();
        negated.insert(index + 1, "not");
        return Some(negated.join(" "));
    }
    None
}

/// Swap the first and last key words in place. Fewer than two key words, or
/// a swap that changes nothing, yields no candidate.
fn keyword_transposition(words: &[&str], original: &str) -> Option<String> {
    let key_indices: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, word)| {
            let clean = strip_non_alphabetic(word);
            clean.len() >= KEY_WORD_MIN_LEN && !STOP_WORDS.contains(clean.to_lowercase().as_str())
        })
        .map(|(index, _)| index)
        .collect();

    let (&first, &last) = (key_indices.first()?, key_indices.last()?);
    if first == last {
        return None;
    }
    let mut swapped: Vec<&str> = words.to_vec();
    swapped.swap(first, last);
    let candidate = swapped.join(" ");
    (candidate != original).then_some(candidate)
}

fn splice(words: &[&str], index: usize, replacement: &str) -> String {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| if i == index { replacement } else { word })
        .collect::<Vec<_>>()
        .join(" ")
}

fn match_capitalization(source: &str, replacement: &str) -> String {
    let starts_upper = source.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
