// 首页统计

use futures_util::future::join3;

use crate::api::client::ApiClient;
use crate::api::models::DashboardStats;
use crate::api::operations::validation::data_list;
use crate::api::paths;

impl ApiClient {
    /// 国道数、路段数、分局数以及路段列表
    ///
    /// 三个请求并发执行；任意一个网络层失败都返回全零结果，不会报错。
    pub async fn get_dashboard_stats(&self) -> DashboardStats {
        let (nhs, segments, divisions) = join3(
            self.get(paths::NHS),
            self.get(paths::SEGMENTS),
            self.get(paths::DIVISIONS),
        )
        .await;

        match (nhs, segments, divisions) {
            (Ok(nhs), Ok(segments), Ok(divisions)) => {
                let segments = data_list(&segments);
                DashboardStats {
                    total_nhs: data_list(&nhs).len(),
                    total_segments: segments.len(),
                    total_offices: data_list(&divisions).len(),
                    segments,
                }
            }
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                tracing::error!("Error fetching dashboard stats: {}", e);
                DashboardStats::empty()
            }
        }
    }
}
