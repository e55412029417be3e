//! 答案生成服务 - 业务能力层
//!
//! 校验后的请求 → 提示词 → 一次 LLM 调用 → 答案文本。
//! 不重试，不缓存；上游失败在这里记录日志后原样向上返回。

use std::sync::Arc;

use tracing::{debug, error};

use crate::clients::ChatProvider;
use crate::error::{AppError, AppResult};
use crate::models::answer::{AnswerRequest, AskRequest};
use crate::services::prompt::{build_tutor_prompt, TUTOR_SYSTEM_MESSAGE};

/// 答案生成服务
pub struct AnswerService {
    provider: Arc<dyn ChatProvider>,
}

impl AnswerService {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// 根据科目、级别、问题和补充文本生成答案
    pub async fn generate_answer(&self, req: &AnswerRequest) -> AppResult<String> {
        debug!(
            "生成答案: subject={}, level={}, 补充文本 {} 字符",
            req.subject,
            req.level,
            req.extracted_text.chars().count()
        );

        let prompt = build_tutor_prompt(req);
        self.provider
            .complete(Some(TUTOR_SYSTEM_MESSAGE), &prompt)
            .await
            .map_err(|e| {
                error!("Error generating answer: {}", e);
                AppError::from(e)
            })
    }

    /// 直接把问题发给 LLM，不带系统消息
    pub async fn ask(&self, req: &AskRequest) -> AppResult<String> {
        self.provider
            .complete(None, &req.question)
            .await
            .map_err(|e| {
                error!("Error answering question: {}", e);
                AppError::from(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 记录收到的消息并返回固定答案
    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<(Option<String>, String)>>,
    }

    #[async_trait]
    impl ChatProvider for Recording {
        async fn complete(&self, system: Option<&str>, user: &str) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((system.map(str::to_string), user.to_string()));
            Ok("42".to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl ChatProvider for Failing {
        async fn complete(&self, _system: Option<&str>, _user: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyResponse {
                model: "test".to_string(),
            })
        }
    }

    fn request() -> AnswerRequest {
        AnswerRequest {
            subject: "Science".to_string(),
            level: "Intermediate".to_string(),
            question: "Why is the sky blue?".to_string(),
            extracted_text: "Rayleigh scattering".to_string(),
        }
    }

    #[tokio::test]
    async fn test_generate_answer_sends_one_call() {
        let provider = Arc::new(Recording::default());
        let service = AnswerService::new(provider.clone());

        let answer = service.generate_answer(&request()).await.unwrap();
        assert_eq!(answer, "42");

        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0.as_deref(), Some(TUTOR_SYSTEM_MESSAGE));
        assert_eq!(calls[0].1, build_tutor_prompt(&request()));
    }

    #[tokio::test]
    async fn test_ask_has_no_system_message() {
        let provider = Arc::new(Recording::default());
        let service = AnswerService::new(provider.clone());

        let req = AskRequest {
            question: "What is photosynthesis?".to_string(),
        };
        service.ask(&req).await.unwrap();

        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, None);
        assert_eq!(calls[0].1, "What is photosynthesis?");
    }

    #[tokio::test]
    async fn test_provider_error_becomes_llm_error() {
        let service = AnswerService::new(Arc::new(Failing));
        let err = service.generate_answer(&request()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
