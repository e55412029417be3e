pub mod answer;

pub use answer::{AnswerRequest, AnswerResponse, AskRequest, ErrorResponse, MessageResponse};
