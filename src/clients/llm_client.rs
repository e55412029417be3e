//! LLM API 客户端
//!
//! 封装与 chat-completion 服务的交互。默认指向 Groq 的 OpenAI 兼容端点，
//! 任何兼容 OpenAI API 的服务都可以通过配置切换。

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::LlmError;
use crate::utils::logging::truncate_text;

/// 对话补全能力
///
/// 发送一条可选的系统消息和一条用户消息，返回第一条候选回复的文本。
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(&self, system: Option<&str>, user: &str) -> Result<String, LlmError>;
}

/// LLM 客户端
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        // 关闭 async-openai 默认的重试：5xx / 429 直接返回错误，每个请求只调用一次上游
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        Self {
            client: Client::with_config(openai_config).with_backoff(no_retry),
            model_name: config.llm_model_name.clone(),
        }
    }

    fn build_failed(&self, source: impl std::error::Error + Send + Sync + 'static) -> LlmError {
        LlmError::RequestBuildFailed {
            model: self.model_name.clone(),
            source: Box::new(source),
        }
    }
}

#[async_trait]
impl ChatProvider for LlmClient {
    async fn complete(&self, system: Option<&str>, user: &str) -> Result<String, LlmError> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息: {}", truncate_text(user, 80));

        let mut messages = Vec::with_capacity(2);

        if let Some(sys_msg) = system {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()
                .map_err(|e| self.build_failed(e))?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user)
            .build()
            .map_err(|e| self.build_failed(e))?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        // 只指定模型和消息，其余生成参数使用服务端默认值
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .build()
            .map_err(|e| self.build_failed(e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            LlmError::ApiCallFailed {
                model: self.model_name.clone(),
                source: Box::new(e),
            }
        })?;

        debug!("LLM API 调用成功");

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::EmptyResponse {
                model: self.model_name.clone(),
            })?;

        choice.message.content.ok_or_else(|| LlmError::EmptyContent {
            model: self.model_name.clone(),
        })
    }
}
