// 接口路径
// 带参数的路径都在这里拼接，查询参数统一做百分号编码

use url::form_urlencoded;

pub const LOGIN: &str = "/api/auth/login";
pub const CURRENT_USER: &str = "/api/auth/me";
pub const HEALTH: &str = "/api/health";
pub const DIVISIONS: &str = "/api/divisions";
pub const NHS: &str = "/api/nh";
pub const SEGMENTS: &str = "/api/segments";
pub const CONFIGURATIONS: &str = "/api/configurations";
pub const DETAILS: &str = "/api/details";
pub const CONFIG_STATISTICS: &str = "/api/reports/config-statistics";

pub fn nh(nh_id: i64) -> String {
    format!("{}/{}", NHS, nh_id)
}

pub fn nh_segments(nh_id: i64) -> String {
    format!("{}/{}/segments", NHS, nh_id)
}

pub fn segment(segment_id: i64) -> String {
    format!("{}/{}", SEGMENTS, segment_id)
}

pub fn segment_details(segment_id: i64) -> String {
    format!("{}/{}/details", SEGMENTS, segment_id)
}

pub fn detail(detail_id: i64) -> String {
    format!("{}/{}", DETAILS, detail_id)
}

pub fn nh_summary(nh_number: &str) -> String {
    with_query("/api/reports/nh-summary", &[("nh_number", Some(nh_number))])
}

pub fn division_summary(division_name: &str) -> String {
    with_query(
        "/api/reports/division-summary",
        &[("division_name", Some(division_name))],
    )
}

pub fn config_details(config_id: i64) -> String {
    let config_id = config_id.to_string();
    with_query("/api/reports/config-details", &[("config_id", Some(config_id.as_str()))])
}

pub fn division_wise(nh_number: &str, config_id: Option<i64>) -> String {
    let config_id = config_id.map(|id| id.to_string());
    with_query(
        "/api/reports/division-wise",
        &[
            ("nh_number", Some(nh_number)),
            ("config_id", config_id.as_deref()),
        ],
    )
}

/// 拼接查询串，值为 `None` 的参数省略
fn with_query(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        if let Some(value) = value {
            serializer.append_pair(key, value);
        }
    }
    let query = serializer.finish();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}
