// API 操作模块
// 每个文件为 `ApiClient` 补充一组接口方法

pub mod auth;
pub mod dashboard;
pub mod reference;
pub mod reports;
pub mod segments;
pub mod validation;
