use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 登录请求
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// 登录成功后 `data` 的内容
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub token: String,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// 已登录用户信息，与服务端登录接口返回的 `user` 对象对应
///
/// 所有字段都是可选的，未知字段原样保留，写回存储时不会丢失。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_office_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionUser {
    pub fn display_name(&self) -> Option<&str> {
        self.full_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn is_central(&self) -> bool {
        self.role.as_deref() == Some("central")
    }
}
