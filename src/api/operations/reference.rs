// 基础数据：国道、分局、配置类型、健康检查

use serde_json::Value;

use crate::api::client::{ApiClient, Method};
use crate::api::paths;
use crate::result::ApiResult;

impl ApiClient {
    pub async fn get_all_nhs(&self) -> ApiResult<Value> {
        self.fetch(paths::NHS, Method::Get, None).await
    }

    pub async fn get_nh(&self, nh_id: i64) -> ApiResult<Value> {
        self.fetch(&paths::nh(nh_id), Method::Get, None).await
    }

    pub async fn get_nh_segments(&self, nh_id: i64) -> ApiResult<Value> {
        self.fetch(&paths::nh_segments(nh_id), Method::Get, None)
            .await
    }

    pub async fn get_divisions(&self) -> ApiResult<Value> {
        self.fetch(paths::DIVISIONS, Method::Get, None).await
    }

    /// 路面配置类型
    pub async fn get_configurations(&self) -> ApiResult<Value> {
        self.fetch(paths::CONFIGURATIONS, Method::Get, None).await
    }

    pub async fn health_check(&self) -> ApiResult<Value> {
        self.fetch(paths::HEALTH, Method::Get, None).await
    }
}
