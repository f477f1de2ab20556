// 会话状态
// 内存中的令牌和用户信息，以及它们在持久化存储里的副本

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::Mutex;

use crate::api::models::SessionUser;
use crate::error::ClientError;
use crate::storage::keys::{TOKEN_KEY, USER_KEY};
use crate::storage::{MemoryStore, SessionStore};

/// 会话快照
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub credential: Option<String>,
    pub user: Option<SessionUser>,
}

/// 当前登录会话
///
/// 读操作只短暂持有 `RwLock`，从不跨越 `.await`。所有修改都先拿到 `mutation`
/// 这把异步锁，内存和存储的更新因此不会与另一个修改交错。
pub struct Session {
    state: RwLock<SessionState>,
    store: Arc<dyn SessionStore>,
    mutation: Mutex<()>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read_state();
        f.debug_struct("Session")
            .field("authenticated", &state.credential.is_some())
            .field("user", &state.user)
            .finish()
    }
}

impl Session {
    /// 空会话，存储在内存中
    pub fn in_memory() -> Self {
        Self::with_state(Arc::new(MemoryStore::new()), SessionState::default())
    }

    fn with_state(store: Arc<dyn SessionStore>, state: SessionState) -> Self {
        Self {
            state: RwLock::new(state),
            store,
            mutation: Mutex::new(()),
        }
    }

    /// 从存储中恢复上一次的会话
    ///
    /// 读取失败或内容损坏时按未登录处理。没有令牌时不恢复用户信息。
    pub async fn restore(store: Arc<dyn SessionStore>) -> Self {
        let credential = match store.get(TOKEN_KEY).await {
            Ok(token) => token.filter(|token| !token.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read stored token: {}", e);
                None
            }
        };

        let user = match credential {
            Some(_) => match store.get(USER_KEY).await {
                Ok(Some(json)) => parse_stored_user(&json),
                Ok(None) => None,
                Err(e) => {
                    tracing::warn!("Failed to read stored user: {}", e);
                    None
                }
            },
            None => None,
        };

        tracing::debug!(
            "Restored session: authenticated={}, user={:?}",
            credential.is_some(),
            user.as_ref().and_then(|u| u.username.as_deref())
        );
        Self::with_state(store, SessionState { credential, user })
    }

    pub fn credential(&self) -> Option<String> {
        self.read_state().credential.clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.read_state().user.clone()
    }

    pub fn snapshot(&self) -> SessionState {
        self.read_state().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_state().credential.is_some()
    }

    /// 登录成功后写入令牌和用户
    ///
    /// 先写存储再改内存，存储失败时内存保持原状。
    pub async fn establish(
        &self,
        credential: &str,
        user: Option<SessionUser>,
    ) -> Result<(), ClientError> {
        let _guard = self.mutation.lock().await;

        match &user {
            Some(user) => {
                let user_json = serde_json::to_string(user)?;
                self.store
                    .set_entries(&[(TOKEN_KEY, credential), (USER_KEY, user_json.as_str())])
                    .await?;
            }
            None => {
                self.store.set(TOKEN_KEY, credential).await?;
                self.store.remove(USER_KEY).await?;
            }
        }

        *self.write_state() = SessionState {
            credential: Some(credential.to_string()),
            user,
        };
        Ok(())
    }

    /// 清空会话（退出登录）
    ///
    /// 内存立即清空；存储删除失败时返回错误，但内存不会回滚。
    pub async fn clear(&self) -> Result<(), ClientError> {
        let _guard = self.mutation.lock().await;

        *self.write_state() = SessionState::default();
        self.store.remove_entries(&[TOKEN_KEY, USER_KEY]).await
    }

    /// 服务端拒绝了 `rejected` 这个令牌
    ///
    /// 只有当前持有的令牌仍然是它时才清空（令牌和用户一起清空），
    /// 这样旧请求的 422 不会把期间新登录的会话清掉。返回是否真的清空了。
    pub async fn invalidate(&self, rejected: &str) -> Result<bool, ClientError> {
        let _guard = self.mutation.lock().await;

        {
            let mut state = self.write_state();
            if state.credential.as_deref() != Some(rejected) {
                return Ok(false);
            }
            *state = SessionState::default();
        }

        self.store.remove_entries(&[TOKEN_KEY, USER_KEY]).await?;
        Ok(true)
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn parse_stored_user(json: &str) -> Option<SessionUser> {
    match serde_json::from_str::<Option<SessionUser>>(json) {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Discarding unreadable stored user: {}", e);
            None
        }
    }
}
