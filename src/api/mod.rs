// API 客户端
// client 负责请求的构造与令牌处理，operations 为各个接口提供类型化的方法

pub mod client;
pub mod models;
pub mod operations;
pub mod paths;

pub use client::{ApiClient, INVALID_TOKEN_STATUS, Method, RequestDescriptor};
