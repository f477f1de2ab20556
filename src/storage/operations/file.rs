use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::ClientError;
use crate::storage::SessionStore;

/// JSON 文件存储
///
/// 整个文件就是一个 `{key: value}` 对象。每次写入都先写临时文件再重命名，
/// 读到一半的文件不会出现。
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<BTreeMap<String, String>, ClientError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }
        serde_json::from_slice(&bytes).map_err(|e| {
            ClientError::Storage(format!(
                "corrupt session file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_vec_pretty(map)?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        let map = self.read_map().await?;
        Ok(map.get(key).cloned())
    }

    async fn set_entries(&self, entries: &[(&str, &str)]) -> Result<(), ClientError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        for (key, value) in entries {
            map.insert((*key).to_string(), (*value).to_string());
        }
        self.write_map(&map).await
    }

    async fn remove_entries(&self, keys: &[&str]) -> Result<(), ClientError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        let before = map.len();
        for key in keys {
            map.remove(*key);
        }
        if map.len() == before {
            return Ok(());
        }
        self.write_map(&map).await
    }
}
