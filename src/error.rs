use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::answer::ErrorResponse;

/// 对外统一的上游失败提示，不暴露具体原因
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate answer. Please try again later.";
/// 未匹配路由的提示
pub const NOT_FOUND_MESSAGE: &str = "The requested URL was not found on the server.";

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 客户端输入错误
    #[error("请求校验失败: {0}")]
    Validation(#[from] ValidationError),
    /// LLM 服务错误
    #[error("LLM错误: {0}")]
    Llm(#[from] LlmError),
    /// 路由不存在
    #[error("路由不存在")]
    NotFound,
}

/// 请求校验错误
///
/// `Display` 即返回给调用方的错误信息
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// 请求体为空或不是非空 JSON 对象
    #[error("No data provided")]
    NoData,
    /// 请求体不是合法 JSON
    #[error("Request body must be valid JSON")]
    InvalidJson,
    /// 缺少 subject / level / question
    #[error("Missing subject, level, or question in request")]
    MissingFields,
    /// `/ask` 缺少 question
    #[error("Missing question in request")]
    MissingQuestion,
    /// 字段存在但不是字符串
    #[error("Field '{field}' must be a string")]
    InvalidField { field: String },
}

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// 构建请求失败
    #[error("构建 LLM 请求失败 (模型: {model}): {source}")]
    RequestBuildFailed {
        model: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 调用失败（网络、鉴权、限流等）
    #[error("LLM API调用失败 (模型: {model}): {source}")]
    ApiCallFailed {
        model: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 返回结果为空
    #[error("LLM返回结果为空 (模型: {model})")]
    EmptyResponse { model: String },
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
}

/// 配置错误，只在启动时出现，不会转换成 HTTP 响应
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 环境变量不存在
    #[error("环境变量 {var_name} 不存在")]
    EnvVarNotFound { var_name: String },
}

impl AppError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// 返回给调用方的信息，上游错误只给固定提示
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::Llm(_) => GENERATE_FAILED_MESSAGE.to_string(),
            AppError::NotFound => NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.client_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
