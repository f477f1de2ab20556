use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::storage::SessionStore;

/// 进程内存储，进程退出即丢失
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有内容初始化，测试里用来模拟“上次打开时留下的会话”
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.lock().get(key).cloned())
    }

    async fn set_entries(&self, entries: &[(&str, &str)]) -> Result<(), ClientError> {
        let mut map = self.lock();
        for (key, value) in entries {
            map.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    async fn remove_entries(&self, keys: &[&str]) -> Result<(), ClientError> {
        let mut map = self.lock();
        for key in keys {
            map.remove(*key);
        }
        Ok(())
    }
}
