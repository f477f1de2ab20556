use serde::{Deserialize, Serialize};

/// 新建路段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRequest {
    pub nh_id: i64,
    pub division_id: i64,
    pub start_chainage: f64,
    pub end_chainage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// 修改路段，只发送需要改动的字段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nh_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_chainage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_chainage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
