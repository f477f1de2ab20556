use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 首页统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(rename = "totalNHs")]
    pub total_nhs: usize,
    pub total_segments: usize,
    pub total_offices: usize,
    pub segments: Vec<Value>,
}

impl DashboardStats {
    /// 任何一个请求失败时返回的全零结果
    pub fn empty() -> Self {
        Self::default()
    }
}

/// 三项数据校验的汇总
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub overlapping_segments: Vec<Value>,
    pub overlapping_configs: Vec<Value>,
    pub out_of_bounds: Vec<Value>,
    /// 请求失败的校验项，正常情况下为空
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_checks: Vec<ValidationCheck>,
}

impl ValidationReport {
    pub fn issue_count(&self) -> usize {
        self.overlapping_segments.len() + self.overlapping_configs.len() + self.out_of_bounds.len()
    }

    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0 && self.failed_checks.is_empty()
    }
}

/// 校验项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationCheck {
    OverlappingSegments,
    OverlappingConfigurations,
    OutOfBounds,
}

impl ValidationCheck {
    pub const ALL: [ValidationCheck; 3] = [
        ValidationCheck::OverlappingSegments,
        ValidationCheck::OverlappingConfigurations,
        ValidationCheck::OutOfBounds,
    ];

    pub fn path(self) -> &'static str {
        match self {
            ValidationCheck::OverlappingSegments => "/api/validation/overlapping-segments",
            ValidationCheck::OverlappingConfigurations => {
                "/api/validation/overlapping-configurations"
            }
            ValidationCheck::OutOfBounds => "/api/validation/out-of-bounds",
        }
    }
}
