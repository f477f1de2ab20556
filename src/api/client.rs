use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::ClientError;
use crate::result::ApiResult;
use crate::session::Session;

/// 服务端用 422 表示令牌无效或已过期
pub const INVALID_TOKEN_STATUS: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_reqwest().as_str())
    }
}

/// 单次请求的描述，每次调用时构造，不保留
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub path: String,
    pub method: Method,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::Get,
            body: None,
        }
    }

    pub fn new(path: impl Into<String>, method: Method, body: Option<Value>) -> Self {
        Self {
            path: path.into(),
            method,
            body,
        }
    }
}

/// 带认证的 API 客户端
///
/// 有令牌时自动加上 `Authorization: Bearer <token>`；服务端返回 422 时清空
/// 会话并且不带令牌重发一次。
#[derive(Debug, Clone)]
pub struct ApiClient {
    origin: String,
    timeout: Option<Duration>,
    http: reqwest::Client,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(origin: &str, session: Arc<Session>) -> Result<Self, ClientError> {
        Self::with_http(origin, session, reqwest::Client::new())
    }

    pub fn with_http(
        origin: &str,
        session: Arc<Session>,
        http: reqwest::Client,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            origin: normalize_origin(origin)?,
            timeout: None,
            http,
            session,
        })
    }

    pub fn from_config(config: &Config, session: Arc<Session>) -> Result<Self, ClientError> {
        Ok(Self::new(&config.api_origin, session)?.with_timeout(config.request_timeout()))
    }

    /// 设置单次请求超时，`None` 表示交给调用方或传输层处理
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim();
        if path.starts_with('/') {
            format!("{}{}", self.origin, path)
        } else {
            format!("{}/{}", self.origin, path)
        }
    }

    /// 发起请求并返回解析后的 JSON
    ///
    /// 除 422 以外的状态码不做区分，响应体是什么就返回什么。
    pub async fn call(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let body = body.map(serde_json::to_vec).transpose()?;
        let credential = self.session.credential();

        let response = self
            .dispatch(path, method, body.as_deref(), credential.as_deref())
            .await?;

        match credential {
            Some(rejected) if response.status() == INVALID_TOKEN_STATUS => {
                tracing::warn!("Invalid token detected, clearing and retrying...");
                if let Err(e) = self.session.invalidate(&rejected).await {
                    tracing::warn!("Failed to clear invalid token from storage: {}", e);
                }
                // 重发时不读会话，避免带上别的请求刚刚作废的令牌
                let retry = self.dispatch(path, method, body.as_deref(), None).await?;
                decode_json(retry).await
            }
            _ => decode_json(response).await,
        }
    }

    pub async fn send(&self, request: &RequestDescriptor) -> Result<Value, ClientError> {
        self.call(&request.path, request.method, request.body.as_ref())
            .await
    }

    pub async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.call(path, Method::Get, None).await
    }

    /// 带类型化请求体的调用
    pub async fn call_with<B>(
        &self,
        path: &str,
        method: Method,
        body: &B,
    ) -> Result<Value, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.call(path, method, Some(&body)).await
    }

    /// 调用并规整成信封，网络层失败转换成 `Connection error: ...`
    pub async fn fetch(&self, path: &str, method: Method, body: Option<Value>) -> ApiResult<Value> {
        match self.call(path, method, body.as_ref()).await {
            Ok(value) => ApiResult::from_value(value),
            Err(e) => {
                tracing::warn!("{} {} failed: {}", method, path, e);
                ApiResult::connection_error(&e)
            }
        }
    }

    pub(crate) async fn fetch_with<B>(&self, path: &str, method: Method, body: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        match serde_json::to_value(body) {
            Ok(body) => self.fetch(path, method, Some(body)).await,
            Err(e) => ApiResult::error(ClientError::from(e).to_string()),
        }
    }

    /// 不读取会话、不做 422 处理的原始请求
    pub(crate) async fn dispatch(
        &self,
        path: &str,
        method: Method,
        body: Option<&[u8]>,
        credential: Option<&str>,
    ) -> Result<reqwest::Response, ClientError> {
        let url = self.endpoint(path);
        tracing::debug!("{} {} (auth: {})", method, url, credential.is_some());

        let mut request = self
            .http
            .request(method.as_reqwest(), url.as_str())
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = credential {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.body(body.to_vec());
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        Ok(request.send().await?)
    }
}

pub(crate) async fn decode_json(response: reqwest::Response) -> Result<Value, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode {
        status: status.as_u16(),
        message: e.to_string(),
    })
}

fn normalize_origin(origin: &str) -> Result<String, ClientError> {
    let trimmed = origin.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ClientError::InvalidOrigin("origin must not be empty".to_string()));
    }
    let parsed = url::Url::parse(trimmed)
        .map_err(|e| ClientError::InvalidOrigin(format!("{}: {}", trimmed, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ClientError::InvalidOrigin(format!(
            "{}: must be an http(s) URL with a host",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(origin: &str) -> ApiClient {
        ApiClient::new(origin, Arc::new(Session::in_memory())).expect("client")
    }

    #[test]
    fn endpoint_joins_origin_and_path() {
        let client = client("http://localhost:5000/");
        assert_eq!(client.origin(), "http://localhost:5000");
        assert_eq!(
            client.endpoint("/api/segments"),
            "http://localhost:5000/api/segments"
        );
        assert_eq!(
            client.endpoint("api/segments"),
            "http://localhost:5000/api/segments"
        );
    }

    #[test]
    fn bad_origins_are_rejected() {
        let session = Arc::new(Session::in_memory());
        for origin in ["", "   ", "localhost:5000", "ftp://example.com", "not a url"] {
            assert!(
                matches!(
                    ApiClient::new(origin, session.clone()),
                    Err(ClientError::InvalidOrigin(_))
                ),
                "{origin:?} should be rejected"
            );
        }
    }

    #[test]
    fn method_names() {
        assert_eq!(Method::default(), Method::Get);
        assert_eq!(Method::Delete.to_string(), "DELETE");
        assert_eq!(Method::Put.to_string(), "PUT");
    }
}
