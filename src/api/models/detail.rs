use serde::{Deserialize, Serialize};

/// 新增路段配置明细
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadDetailRequest {
    pub segment_id: i64,
    pub config_id: i64,
    /// 起点桩号（km）
    pub start_chainage: f64,
    /// 终点桩号（km）
    pub end_chainage: f64,
    #[serde(default)]
    pub remarks: String,
}

/// 修改路段配置明细，只能改桩号范围和备注
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadDetailUpdate {
    pub start_chainage: f64,
    pub end_chainage: f64,
    #[serde(default)]
    pub remarks: String,
}
