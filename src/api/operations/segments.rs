// 路段及路段明细操作

use serde_json::Value;

use crate::api::client::{ApiClient, Method};
use crate::api::models::{RoadDetailRequest, RoadDetailUpdate, SegmentRequest, SegmentUpdate};
use crate::api::paths;
use crate::result::ApiResult;

impl ApiClient {
    /// 路段列表，服务端按登录用户的角色过滤
    pub async fn get_segments(&self) -> ApiResult<Value> {
        self.fetch(paths::SEGMENTS, Method::Get, None).await
    }

    pub async fn get_segment_details(&self, segment_id: i64) -> ApiResult<Value> {
        self.fetch(&paths::segment(segment_id), Method::Get, None)
            .await
    }

    pub async fn create_segment(&self, segment: &SegmentRequest) -> ApiResult<Value> {
        self.fetch_with(paths::SEGMENTS, Method::Post, segment).await
    }

    pub async fn update_segment(&self, segment_id: i64, changes: &SegmentUpdate) -> ApiResult<Value> {
        self.fetch_with(&paths::segment(segment_id), Method::Put, changes)
            .await
    }

    /// 删除路段，服务端会连同其下的明细一起删除
    pub async fn delete_segment(&self, segment_id: i64) -> ApiResult<Value> {
        self.fetch(&paths::segment(segment_id), Method::Delete, None)
            .await
    }

    /// 某个路段下的配置明细
    pub async fn get_road_details(&self, segment_id: i64) -> ApiResult<Value> {
        self.fetch(&paths::segment_details(segment_id), Method::Get, None)
            .await
    }

    pub async fn add_road_detail(&self, detail: &RoadDetailRequest) -> ApiResult<Value> {
        self.fetch_with(paths::DETAILS, Method::Post, detail).await
    }

    pub async fn update_road_detail(&self, detail_id: i64, detail: &RoadDetailUpdate) -> ApiResult<Value> {
        self.fetch_with(&paths::detail(detail_id), Method::Put, detail)
            .await
    }

    pub async fn delete_road_detail(&self, detail_id: i64) -> ApiResult<Value> {
        self.fetch(&paths::detail(detail_id), Method::Delete, None)
            .await
    }
}
