use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Word-to-opposite pairs used to flip the meaning of a statement. Entries
/// are single-direction; most pairs appear in both directions. Lookups are
/// by exact lowercased match against the alphabetic characters of a token.
pub static ANTONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("increase", "decrease"),
        ("decrease", "increase"),
        ("improve", "worsen"),
        ("worsen", "improve"),
        ("positive", "negative"),
        ("negative", "positive"),
        ("important", "insignificant"),
        ("significant", "minor"),
        ("faster", "slower"),
        ("slower", "faster"),
        ("larger", "smaller"),
        ("smaller", "larger"),
        ("better", "worse"),
        ("worse", "better"),
        ("more", "fewer"),
        ("fewer", "more"),
        ("higher", "lower"),
        ("lower", "higher"),
        ("strong", "weak"),
        ("weak", "strong"),
        ("advanced", "basic"),
        ("basic", "advanced"),
        ("complex", "simple"),
        ("simple", "complex"),
        ("efficient", "inefficient"),
        ("modern", "traditional"),
        ("traditional", "modern"),
        ("human", "machine"),
        ("machine", "human"),
        ("natural", "artificial"),
        ("artificial", "natural"),
        ("automated", "manual"),
        ("manual", "automated"),
        ("public", "private"),
        ("private", "public"),
        ("create", "destroy"),
        ("help", "hinder"),
        ("support", "oppose"),
        ("benefit", "harm"),
        ("reduce", "increase"),
        ("enable", "prevent"),
        ("replace", "preserve"),
        ("accept", "reject"),
        ("allow", "prohibit"),
    ])
});

/// Words excluded from concept extraction.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has",
        "had", "do", "does", "did", "will", "would", "could", "should", "may", "might", "shall",
        "can", "need", "used", "that", "this", "these", "those", "it", "its", "they", "them",
        "their", "he", "she", "his", "her", "we", "our", "you", "your", "i", "my", "me", "and",
        "or", "but", "so", "for", "nor", "yet", "at", "by", "in", "of", "on", "to", "up", "as",
        "with", "from", "into", "about", "than", "also", "just", "very", "much", "most", "some",
        "any", "all", "each", "every", "many", "few", "not", "only", "such", "if", "when",
        "then", "now", "well", "here", "there", "what", "which", "who", "how", "why", "where",
        "going", "like", "make", "take", "even", "still",
    ])
});

/// Auxiliary and modal verbs eligible for negation insertion.
pub const AUXILIARY_VERBS: [&str; 11] = [
    "is", "are", "was", "can", "will", "could", "should", "does", "do", "has", "have",
];

/// Words that mark a verb as already negated.
pub const NEGATION_WORDS: [&str; 6] = ["not", "never", "don't", "doesn't", "isn't", "aren't"];
