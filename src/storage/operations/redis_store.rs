use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use crate::error::ClientError;
use crate::storage::SessionStore;
use crate::storage::keys::redis_key;

/// Redis 存储，适合多个客户端进程共享同一个会话
#[derive(Debug, Clone)]
pub struct RedisStore {
    redis: Arc<RedisClient>,
}

impl RedisStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    pub fn open(url: &str) -> Result<Self, ClientError> {
        let client = RedisClient::open(url)?;
        Ok(Self::new(Arc::new(client)))
    }
}

#[async_trait]
impl SessionStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let result: Option<String> = conn.get(redis_key(key)).await?;
        Ok(result)
    }

    async fn set_entries(&self, entries: &[(&str, &str)]) -> Result<(), ClientError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        // 令牌和用户信息要么一起写入，要么都不写
        let mut pipe = redis::pipe();
        pipe.atomic();
        for (key, value) in entries {
            pipe.set(redis_key(key), *value).ignore();
        }
        let _: () = pipe.query_async(&mut conn).await?;

        Ok(())
    }

    async fn remove_entries(&self, keys: &[&str]) -> Result<(), ClientError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let keys: Vec<String> = keys.iter().map(|key| redis_key(key)).collect();
        let _: () = conn.del(keys).await?;

        Ok(())
    }
}
