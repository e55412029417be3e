//! HTTP 请求处理函数
//!
//! 请求体以原始字节接收，解析和校验交给 `models::answer`，
//! 所有错误通过 `AppError: IntoResponse` 转换成 JSON 响应。

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::Json;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::answer::{AnswerRequest, AnswerResponse, AskRequest, MessageResponse};
use crate::server::AppState;

/// 根路径的欢迎信息
pub const WELCOME_MESSAGE: &str = "Welcome to the API!";

/// GET /
pub async fn health() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// POST /generate-answer
///
/// ```bash
/// curl -X POST http://127.0.0.1:5000/generate-answer \
///   -H 'content-type: application/json' \
///   -d '{"subject":"Math","level":"Grade 10","question":"What is a derivative?"}'
/// ```
pub async fn generate_answer(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<AnswerResponse>> {
    let req = AnswerRequest::from_body(&body)?;
    let answer = state.answer_service.generate_answer(&req).await?;
    Ok(Json(AnswerResponse { answer }))
}

/// POST /ask
pub async fn ask(State(state): State<AppState>, body: Bytes) -> AppResult<Json<AnswerResponse>> {
    let req = AskRequest::from_body(&body)?;
    let answer = state.answer_service.ask(&req).await?;
    Ok(Json(AnswerResponse { answer }))
}

/// 未匹配的路由
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    debug!("未匹配的路由: {} {}", method, uri);
    AppError::NotFound
}
