//! # Tutor Answer
//!
//! 一个把辅导问题转发给 LLM 并返回答案的 HTTP 服务
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 持有外部 API 客户端，只暴露能力
//! - `ChatProvider` - 对话补全能力的抽象
//! - `LlmClient` - 基于 async-openai 的实现（默认 Groq）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `prompt` - 辅导提示词模板
//! - `AnswerService` - 构建提示词并调用一次 LLM
//!
//! ### ③ HTTP 层（Server）
//! - `server/` - 路由、CORS、404、监听循环
//! - `handlers` - 解析请求体，调用服务，转换错误
//!
//! ### 其他
//! - `config` - 环境变量配置
//! - `error` - 错误类型以及到 HTTP 状态码的映射
//! - `models` - 请求 / 响应结构
//! - `utils::logging` - 日志初始化

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use clients::{ChatProvider, LlmClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use server::{router, AppState};
pub use services::AnswerService;
