// 报表

use serde_json::Value;

use crate::api::client::{ApiClient, Method};
use crate::api::paths;
use crate::result::ApiResult;

impl ApiClient {
    /// 单条国道的配置汇总
    pub async fn get_nh_report(&self, nh_number: &str) -> ApiResult<Value> {
        self.fetch(&paths::nh_summary(nh_number), Method::Get, None)
            .await
    }

    /// 分局工作量汇总
    pub async fn get_division_report(&self, division_name: &str) -> ApiResult<Value> {
        self.fetch(&paths::division_summary(division_name), Method::Get, None)
            .await
    }

    pub async fn get_config_stats(&self) -> ApiResult<Value> {
        self.fetch(paths::CONFIG_STATISTICS, Method::Get, None).await
    }

    /// 某种配置在各路段的桩号明细
    pub async fn get_detailed_config_report(&self, config_id: i64) -> ApiResult<Value> {
        self.fetch(&paths::config_details(config_id), Method::Get, None)
            .await
    }

    pub async fn get_division_wise_report(
        &self,
        nh_number: &str,
        config_id: Option<i64>,
    ) -> ApiResult<Value> {
        self.fetch(&paths::division_wise(nh_number, config_id), Method::Get, None)
            .await
    }
}
