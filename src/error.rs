use thiserror::Error;

/// 客户端底层错误
///
/// 只有 `ApiClient::call` 和存储层会返回这个类型，上层的接口操作会把它
/// 转换成失败的 `ApiResult`。
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API origin: {0}")]
    InvalidOrigin(String),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode response body (HTTP {status}): {message}")]
    Decode { status: u16, message: String },
    #[error("failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("session storage error: {0}")]
    Storage(String),
}

impl From<redis::RedisError> for ClientError {
    fn from(err: redis::RedisError) -> Self {
        ClientError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Storage(err.to_string())
    }
}

impl ClientError {
    /// 是否为网络层失败（连接不上、读取中断等）
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}
