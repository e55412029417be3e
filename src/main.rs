use anyhow::{Context, Result};
use tutor_answer::utils::logging;
use tutor_answer::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置，缺少 API key 时直接退出
    let config = Config::from_env().context("配置加载失败，请设置 GROQ_API_KEY")?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).run().await
}
