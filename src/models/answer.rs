//! 请求 / 响应数据结构
//!
//! 请求体按原始字节解析，这样"没有请求体"、"JSON 不合法"、"缺字段"
//! 可以分别给出 400 提示，而不是交给框架的默认拒绝。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

type JsonObject = Map<String, Value>;

/// 生成答案的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRequest {
    pub subject: String,
    pub level: String,
    pub question: String,
    /// 补充上下文，未提供时为空字符串
    pub extracted_text: String,
}

impl AnswerRequest {
    /// 从请求体解析并校验
    pub fn from_body(body: &[u8]) -> Result<Self, ValidationError> {
        let data = parse_object(body)?;

        let subject = string_field(&data, "subject")?;
        let level = string_field(&data, "level")?;
        let question = string_field(&data, "question")?;
        let extracted_text = string_field(&data, "extractedText")?.unwrap_or_default();

        match (non_empty(subject), non_empty(level), non_empty(question)) {
            (Some(subject), Some(level), Some(question)) => Ok(Self {
                subject,
                level,
                question,
                extracted_text,
            }),
            _ => Err(ValidationError::MissingFields),
        }
    }
}

/// 直接提问的请求（不带科目 / 级别）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskRequest {
    pub question: String,
}

impl AskRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, ValidationError> {
        let data = parse_object(body)?;
        non_empty(string_field(&data, "question")?)
            .map(|question| Self { question })
            .ok_or(ValidationError::MissingQuestion)
    }
}

/// 成功响应
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 根路径的欢迎信息
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

fn parse_object(body: &[u8]) -> Result<JsonObject, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::NoData);
    }
    let value: Value = serde_json::from_slice(body).map_err(|_| ValidationError::InvalidJson)?;
    match value {
        Value::Object(map) if !map.is_empty() => Ok(map),
        _ => Err(ValidationError::NoData),
    }
}

/// 读取字符串字段；`null` 与缺失等价
fn string_field(data: &JsonObject, field: &str) -> Result<Option<String>, ValidationError> {
    match data.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::InvalidField {
            field: field.to_string(),
        }),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
