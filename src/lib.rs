use std::sync::Arc;

use api::ApiClient;
use api::models::SessionUser;
use config::Config;
use error::ClientError;
use session::Session;
use ui::{Presenter, UiSurface};

pub mod api;
pub mod config;
pub mod error;
pub mod result;
pub mod session;
pub mod storage;
pub mod ui;
pub mod utils;

pub use result::ApiResult;

/// 跳转到应用首页的地址
pub const APP_ROOT: &str = "/";

/// 应用入口：API 客户端加上界面辅助
///
/// 不使用全局单例，需要的地方传引用或克隆（内部都是 `Arc`）。
#[derive(Clone, Debug)]
pub struct NhApp {
    pub client: ApiClient,
    pub presenter: Presenter,
}

impl NhApp {
    pub fn new(client: ApiClient, surface: Arc<dyn UiSurface>) -> Self {
        Self {
            client,
            presenter: Presenter::new(surface),
        }
    }

    /// 按配置创建存储、恢复会话并构造客户端
    pub async fn from_config(
        config: &Config,
        surface: Arc<dyn UiSurface>,
    ) -> Result<Self, ClientError> {
        let store = storage::open_store(&config.session_store)?;
        let session = Arc::new(Session::restore(Arc::from(store)).await);
        let client = ApiClient::from_config(config, session)?;
        Ok(Self::new(client, surface))
    }

    pub async fn login(&self, username: &str, password: &str) -> ApiResult<()> {
        self.client.login(username, password).await
    }

    /// 退出登录并回到首页，不做确认
    pub async fn logout(&self) {
        self.client.logout().await;
        self.presenter.surface().navigate(APP_ROOT);
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.is_authenticated()
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.client.session().user()
    }

    pub fn user_initials(&self) -> String {
        utils::user_initials(self.current_user().as_ref())
    }
}
