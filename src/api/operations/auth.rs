// 认证相关操作

use serde_json::Value;

use crate::api::client::{ApiClient, Method, decode_json};
use crate::api::models::{LoginData, LoginRequest};
use crate::api::paths;
use crate::result::ApiResult;

impl ApiClient {
    /// 登录
    ///
    /// 成功时令牌和用户一起写入会话；失败时返回服务端的提示，会话不变。
    /// 登录请求本身从不携带旧令牌。
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<()> {
        tracing::debug!("Logging in as {}", username);

        let envelope = match self.post_login(username, password).await {
            Ok(value) => ApiResult::from_value(value),
            Err(e) => {
                tracing::warn!("Login request for {} failed: {}", username, e);
                return ApiResult::connection_error(&e);
            }
        };

        if !envelope.success {
            tracing::info!(
                "Login rejected for {}: {}",
                username,
                envelope.message_or_default()
            );
            return ApiResult {
                success: false,
                data: None,
                message: envelope.message,
                details: envelope.details,
            };
        }

        let Some(login) = envelope.decode_data::<LoginData>() else {
            tracing::warn!("Login response for {} carried no token", username);
            return ApiResult::error("Login response did not include a token");
        };

        if let Err(e) = self.session().establish(&login.token, login.user).await {
            tracing::error!("Failed to persist session for {}: {}", username, e);
            return ApiResult::error(format!("Session storage error: {}", e));
        }

        tracing::info!("Logged in as {}", username);
        ApiResult::ok()
    }

    /// 清空本地会话，不通知服务端
    pub async fn logout(&self) {
        if let Err(e) = self.session().clear().await {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
        tracing::info!("Logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    /// 当前用户信息（服务端视角）
    pub async fn current_user_info(&self) -> ApiResult<Value> {
        self.fetch(paths::CURRENT_USER, Method::Get, None).await
    }

    async fn post_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Value, crate::error::ClientError> {
        let body = serde_json::to_vec(&LoginRequest { username, password })?;
        let response = self
            .dispatch(paths::LOGIN, Method::Post, Some(&body), None)
            .await?;
        decode_json(response).await
    }
}
