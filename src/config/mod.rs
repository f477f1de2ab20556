use std::env;
use std::time::Duration;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// API 服务地址，例如 `http://localhost:5000`
    pub api_origin: String,
    /// 单次请求超时（秒），不设置则不限制
    pub request_timeout_secs: Option<u64>,
    /// 会话存储：`memory`、`file:<path>` 或 `redis://...`
    pub session_store: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key))
    }

    /// 从任意键值来源读取配置，`API_ORIGIN` 必填
    pub fn from_lookup<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let optional = |key: &str| {
            lookup(key)
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let request_timeout_secs = optional("API_TIMEOUT_SECS").and_then(|value| {
            value
                .trim_end_matches('s')
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
        });

        Ok(Config {
            api_origin: lookup("API_ORIGIN")?.trim().to_string(),
            request_timeout_secs,
            session_store: optional("SESSION_STORE").unwrap_or_else(|| "memory".into()),
            username: optional("NH_USERNAME"),
            password: optional("NH_PASSWORD"),
        })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// 同时配置了用户名和密码时返回登录凭据
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.as_str(), password.as_str())),
            _ => None,
        }
    }
}
