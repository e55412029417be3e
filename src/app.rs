use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::clients::LlmClient;
use crate::config::Config;
use crate::server::{self, AppState};
use crate::services::AnswerService;
use crate::utils::logging::log_startup;

/// 应用主结构
pub struct App {
    config: Config,
    state: AppState,
}

impl App {
    /// 初始化应用：创建 LLM 客户端并注入服务
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);

        let client = LlmClient::new(&config);
        let state = AppState::new(AnswerService::new(Arc::new(client)));

        Self { config, state }
    }

    /// 绑定端口并运行，直到收到退出信号
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("无法绑定地址 {}", addr))?;

        server::serve(listener, self.state)
            .await
            .context("HTTP 服务异常退出")
    }
}
