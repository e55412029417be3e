use crate::error::ConfigError;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            verbose_logging: false,
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.groq.com/openai/v1".to_string(),
            llm_model_name: "llama3-8b-8192".to_string(),
        }
    }
}

impl Config {
    /// 从进程环境变量加载配置
    ///
    /// 缺少 `GROQ_API_KEY`（或 `LLM_API_KEY`）时直接返回错误，服务不会启动
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源加载配置
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let llm_api_key = non_empty("GROQ_API_KEY")
            .or_else(|| non_empty("LLM_API_KEY"))
            .ok_or_else(|| ConfigError::EnvVarNotFound {
                var_name: "GROQ_API_KEY".to_string(),
            })?;

        Ok(Self {
            host: non_empty("HOST").unwrap_or(default.host),
            port: parse_var(&lookup, "PORT", "u16")?.unwrap_or(default.port),
            verbose_logging: parse_var(&lookup, "VERBOSE_LOGGING", "bool")?
                .unwrap_or(default.verbose_logging),
            llm_api_key,
            llm_api_base_url: lookup("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: lookup("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
        })
    }

    /// 监听地址，形如 `0.0.0.0:5000`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var_name: &str, expected_type: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let Some(value) = lookup(var_name) else {
        return Ok(None);
    };
    let parsed = value.trim().parse::<T>();
    match parsed {
        Ok(v) => Ok(Some(v)),
        Err(_) => Err(ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value,
            expected_type: expected_type.to_string(),
        }),
    }
}
