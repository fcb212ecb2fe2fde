pub mod question;
pub mod quiz_attempt;
pub use question::{Question, QuizSet};
pub use quiz_attempt::{AnswerRecord, QuizAttempt};
