use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::question::QuizSet;

/// Session state for one walk through a generated quiz. Discarded wholesale
/// on retake; a new attempt owns a freshly generated QuizSet.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub id: Uuid,
    pub quiz: QuizSet,
    pub current_index: usize,
    pub score: u32,
    pub answers: Vec<AnswerRecord>,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerRecord {
    pub question_id: usize,
    pub selected: String,
    pub correct: bool,
}
