use chrono::Utc;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::question::{Question, QuizSet};
use crate::models::quiz_attempt::{AnswerRecord, QuizAttempt};

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Begin a new attempt over a generated quiz. An empty quiz means "no
    /// quiz available" and cannot be attempted.
    pub fn start(quiz: QuizSet) -> AppResult<QuizAttempt> {
        if quiz.is_empty() {
            return Err(AppError::ValidationError(
                "quiz has no questions".to_string(),
            ));
        }
        Ok(QuizAttempt {
            id: Uuid::new_v4(),
            quiz,
            current_index: 0,
            score: 0,
            answers: Vec::new(),
            started_at: Utc::now(),
            completed_at: None,
        })
    }

    pub fn current_question(attempt: &QuizAttempt) -> Option<&Question> {
        if attempt.completed_at.is_some() {
            return None;
        }
        attempt.quiz.questions.get(attempt.current_index)
    }

    /// Grade a selected option against the current question and advance.
    /// Selection is compared to the correct answer by exact string equality.
    pub fn submit_answer(attempt: &mut QuizAttempt, selected: &str) -> AppResult<bool> {
        if attempt.completed_at.is_some() {
            return Err(AppError::ValidationError(
                "attempt is already complete".to_string(),
            ));
        }
        let question = attempt
            .quiz
            .questions
            .get(attempt.current_index)
            .ok_or_else(|| AppError::NotFound("no current question".to_string()))?;

        if !question.options.iter().any(|option| option == selected) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not one of the options",
                selected
            )));
        }

        let correct = question.correct_answer == selected;
        let question_id = question.id;
        log::debug!("question {} answered, correct: {}", question_id, correct);

        attempt.answers.push(AnswerRecord {
            question_id,
            selected: selected.to_string(),
            correct,
        });
        if correct {
            attempt.score += 1;
        }
        attempt.current_index += 1;
        if attempt.current_index >= attempt.quiz.len() {
            attempt.completed_at = Some(Utc::now());
        }
        Ok(correct)
    }

    pub fn is_complete(attempt: &QuizAttempt) -> bool {
        attempt.completed_at.is_some()
    }

    pub fn total(attempt: &QuizAttempt) -> usize {
        attempt.quiz.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_question_quiz() -> QuizSet {
        QuizSet {
            questions: vec![
                Question {
                    id: 0,
                    text: "Which of the following statements is TRUE according to the summary?"
                        .to_string(),
                    options: vec![
                        "alpha".to_string(),
                        "beta".to_string(),
                        "gamma".to_string(),
                        "delta".to_string(),
                    ],
                    correct_answer: "beta".to_string(),
                },
                Question {
                    id: 1,
                    text: "What does the summary mention about \"topic\"?".to_string(),
                    options: vec![
                        "one".to_string(),
                        "two".to_string(),
                        "three".to_string(),
                        "four".to_string(),
                    ],
                    correct_answer: "one".to_string(),
                },
            ],
        }
    }

    #[test]
    fn starting_with_an_empty_quiz_is_rejected() {
        let result = QuizAttemptService::start(QuizSet::default());
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn answers_are_graded_and_scored() {
        let mut attempt = QuizAttemptService::start(two_question_quiz()).unwrap();

        let first = QuizAttemptService::submit_answer(&mut attempt, "beta").unwrap();
        assert!(first);
        assert_eq!(attempt.score, 1);

        let second = QuizAttemptService::submit_answer(&mut attempt, "four").unwrap();
        assert!(!second);
        assert_eq!(attempt.score, 1);

        assert!(QuizAttemptService::is_complete(&attempt));
        assert_eq!(attempt.answers.len(), 2);
        assert!(attempt.answers[0].correct);
        assert!(!attempt.answers[1].correct);
    }

    #[test]
    fn selections_outside_the_options_are_rejected() {
        let mut attempt = QuizAttemptService::start(two_question_quiz()).unwrap();
        let result = QuizAttemptService::submit_answer(&mut attempt, "omega");

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(attempt.current_index, 0);
        assert_eq!(attempt.score, 0);
    }

    #[test]
    fn completed_attempts_reject_further_answers() {
        let mut attempt = QuizAttemptService::start(two_question_quiz()).unwrap();
        QuizAttemptService::submit_answer(&mut attempt, "beta").unwrap();
        QuizAttemptService::submit_answer(&mut attempt, "one").unwrap();

        assert!(QuizAttemptService::current_question(&attempt).is_none());
        let result = QuizAttemptService::submit_answer(&mut attempt, "two");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn current_question_walks_the_set_in_order() {
        let mut attempt = QuizAttemptService::start(two_question_quiz()).unwrap();

        assert_eq!(QuizAttemptService::current_question(&attempt).unwrap().id, 0);
        QuizAttemptService::submit_answer(&mut attempt, "alpha").unwrap();
        assert_eq!(QuizAttemptService::current_question(&attempt).unwrap().id, 1);
        assert_eq!(QuizAttemptService::total(&attempt), 2);
    }
}
