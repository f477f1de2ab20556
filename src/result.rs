use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

/// 服务端统一的响应信封 `{success, data | message}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult<T = Value> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl<T> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            details: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            details: None,
        }
    }

    /// 网络层失败时合成的失败信封
    pub fn connection_error(err: &ClientError) -> Self {
        Self::error(format!("Connection error: {}", err))
    }

    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

impl ApiResult<()> {
    /// 不携带数据的成功结果（登录成功只需要告诉调用方成功与否）
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
            details: None,
        }
    }
}

impl ApiResult<Value> {
    /// 把服务端返回的任意 JSON 规整成信封
    ///
    /// 非对象或缺少 `success` 字段的响应按失败处理，原始内容放进 `details`。
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<ApiResult<Value>>(value.clone()) {
            Ok(envelope) if value.get("success").is_some() => envelope,
            _ => Self {
                success: false,
                data: None,
                message: value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
                details: Some(value),
            },
        }
    }

    /// `data` 为数组时返回数组，否则返回空切片
    pub fn data_array(&self) -> &[Value] {
        self.data
            .as_ref()
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// 把 `data` 解析成具体类型
    pub fn decode_data<T: DeserializeOwned>(&self) -> Option<T> {
        self.data
            .clone()
            .and_then(|data| serde_json::from_value(data).ok())
    }
}
