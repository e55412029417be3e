//! 提示词模板

use crate::models::answer::AnswerRequest;

/// 系统消息
pub const TUTOR_SYSTEM_MESSAGE: &str =
    "You are an AI tutor specialized in various subjects and levels.";

/// 构建辅导提示词
///
/// 各字段原样插入，不做转义或截断
pub fn build_tutor_prompt(req: &AnswerRequest) -> String {
    format!(
        r#"You are a tutor specialized in {subject} at {level} level.
Question: {question}

Additional context from extracted text:
{extracted_text}

Please provide a clear and concise answer to the question, taking into account any relevant information from the extracted text. Include key concepts, step-by-step explanations if applicable, and any relevant examples to aid understanding."#,
        subject = req.subject,
        level = req.level,
        question = req.question,
        extracted_text = req.extracted_text,
    )
}
