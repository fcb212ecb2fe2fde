pub mod concepts;
pub mod corruptor;
pub mod question_builder;
pub mod quiz_attempt_service;
pub mod quiz_service;
pub mod sampler;
pub mod segmenter;

pub use quiz_attempt_service::QuizAttemptService;
pub use quiz_service::QuizService;
