// 会话持久化存储
// 包含存储键、存储接口以及各个后端实现

pub mod keys;
pub mod operations;

use async_trait::async_trait;

use crate::error::ClientError;

pub use operations::{FileStore, MemoryStore, RedisStore};

/// 字符串键值存储，重启后仍然保留（类似浏览器的 localStorage）
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError>;

    /// 一次写入多个键，后端应尽量保证原子性
    async fn set_entries(&self, entries: &[(&str, &str)]) -> Result<(), ClientError>;

    async fn remove_entries(&self, keys: &[&str]) -> Result<(), ClientError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.set_entries(&[(key, value)]).await
    }

    async fn remove(&self, key: &str) -> Result<(), ClientError> {
        self.remove_entries(&[key]).await
    }
}

/// 根据配置串创建存储后端
///
/// * `memory`：进程内存储
/// * `file:<path>`：JSON 文件
/// * `redis://...` / `rediss://...`：Redis
pub fn open_store(location: &str) -> Result<Box<dyn SessionStore>, ClientError> {
    let location = location.trim();
    if location.is_empty() || location == "memory" {
        return Ok(Box::new(MemoryStore::new()));
    }
    if let Some(path) = location.strip_prefix("file:") {
        return Ok(Box::new(FileStore::new(path)));
    }
    if location.starts_with("redis://") || location.starts_with("rediss://") {
        return Ok(Box::new(RedisStore::open(location)?));
    }
    Err(ClientError::Storage(format!(
        "unsupported session store: {}",
        location
    )))
}
