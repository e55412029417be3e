pub mod answer_service;
pub mod prompt;

pub use answer_service::AnswerService;
