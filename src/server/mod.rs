//! HTTP 层
//!
//! 路由、CORS、请求追踪以及监听循环

pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::services::AnswerService;

/// 各请求共享的状态，只读
#[derive(Clone)]
pub struct AppState {
    pub answer_service: Arc<AnswerService>,
}

impl AppState {
    pub fn new(answer_service: AnswerService) -> Self {
        Self {
            answer_service: Arc::new(answer_service),
        }
    }
}

/// 构建路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/generate-answer", post(handlers::generate_answer))
        .route("/ask", post(handlers::ask))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// 允许任意来源跨域访问所有路由
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// 在 `listener` 上提供服务，直到收到 Ctrl-C
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("✓ 开始监听 http://{}", addr);
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听 Ctrl-C 信号: {}", e);
        // 监听失败时不主动退出
        std::future::pending::<()>().await;
    }
    info!("收到退出信号，正在关闭服务...");
}
