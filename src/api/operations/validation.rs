// 数据校验

use futures_util::future::join_all;
use serde_json::Value;

use crate::api::client::{ApiClient, Method};
use crate::api::models::{ValidationCheck, ValidationReport};
use crate::result::ApiResult;

impl ApiClient {
    pub async fn run_check(&self, check: ValidationCheck) -> ApiResult<Value> {
        self.fetch(check.path(), Method::Get, None).await
    }

    pub async fn check_overlapping_segments(&self) -> ApiResult<Value> {
        self.run_check(ValidationCheck::OverlappingSegments).await
    }

    pub async fn check_overlapping_configurations(&self) -> ApiResult<Value> {
        self.run_check(ValidationCheck::OverlappingConfigurations)
            .await
    }

    pub async fn check_out_of_bounds(&self) -> ApiResult<Value> {
        self.run_check(ValidationCheck::OutOfBounds).await
    }

    /// 三项校验并发执行，全部返回后再汇总
    ///
    /// 某一项请求失败时该项结果为空，并记录在 `failed_checks` 中。
    pub async fn run_validation(&self) -> ValidationReport {
        let outcomes = join_all(
            ValidationCheck::ALL
                .into_iter()
                .map(|check| async move { (check, self.get(check.path()).await) }),
        )
        .await;

        let mut report = ValidationReport::default();
        for (check, outcome) in outcomes {
            let issues = match outcome {
                Ok(value) => data_list(&value),
                Err(e) => {
                    tracing::warn!("Validation check {:?} failed: {}", check, e);
                    report.failed_checks.push(check);
                    Vec::new()
                }
            };
            match check {
                ValidationCheck::OverlappingSegments => report.overlapping_segments = issues,
                ValidationCheck::OverlappingConfigurations => report.overlapping_configs = issues,
                ValidationCheck::OutOfBounds => report.out_of_bounds = issues,
            }
        }

        tracing::debug!(
            "Validation finished: {} issue(s), {} failed check(s)",
            report.issue_count(),
            report.failed_checks.len()
        );
        report
    }
}

/// 响应中的 `data` 数组，缺失或不是数组时为空
pub(crate) fn data_list(value: &Value) -> Vec<Value> {
    value
        .get("data")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
