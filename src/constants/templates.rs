/// Question text for the true-statement archetype.
pub const TRUE_STATEMENT_QUESTION: &str =
    "Which of the following statements is TRUE according to the summary?";

/// Topic label when a sentence yields no concepts.
pub const DEFAULT_TOPIC: &str = "this topic";

/// Suffix marking a padded option built from an uncorrupted sentence.
pub const UNRELATED_SUFFIX: &str = " (unrelated)";

/// Generic fillers for true-statement questions once the source sentences
/// are exhausted.
pub const STATEMENT_FALLBACKS: [&str; 3] = [
    "This topic is not covered in the summary",
    "The summary makes no claim along these lines",
    "None of the key points in the summary relate to this",
];

pub fn concept_question_text(topic: &str) -> String {
    format!("What does the summary mention about \"{}\"?", topic)
}

/// Topic-specific fillers for concept questions, distinct by phrasing.
pub fn topic_fallbacks(topic: &str) -> [String; 3] {
    [
        format!("{} is not mentioned in the summary", topic),
        format!("The summary gives no details about {}", topic),
        format!("{} only appears in the summary in passing", topic),
    ]
}
