use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: usize,              // 0-based position within one generation pass
    pub text: String,           // question prompt, numbering is presentation
    pub options: Vec<String>,   // exactly four, shuffled, pairwise distinct
    pub correct_answer: String, // always one of `options`, a verbatim source sentence
}

/// One generation pass worth of questions. Regeneration replaces the whole
/// set; nothing inside is reused across passes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSet {
    pub questions: Vec<Question>,
}

impl QuizSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
