use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use super::{UiElement, UiSurface};

/// 加载遮罩的固定 id
pub const LOADING_OVERLAY_ID: &str = "loadingOverlay";

/// 提示框容器的 id，由页面提供
pub const ALERT_CONTAINER_ID: &str = "alertContainer";

/// 提示框显示时长
pub const ALERT_LIFETIME: Duration = Duration::from_secs(5);

const MODAL_ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl AlertKind {
    fn class_suffix(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            AlertKind::Success => "✓",
            AlertKind::Error => "✗",
            AlertKind::Warning | AlertKind::Info => "ℹ",
        }
    }
}

/// 加载遮罩、提示框、弹窗
#[derive(Clone)]
pub struct Presenter {
    surface: Arc<dyn UiSurface>,
}

impl std::fmt::Debug for Presenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presenter").finish_non_exhaustive()
    }
}

impl Presenter {
    pub fn new(surface: Arc<dyn UiSurface>) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &Arc<dyn UiSurface> {
        &self.surface
    }

    /// 显示加载遮罩，已经显示时不重复添加
    pub fn show_loading(&self) {
        if self.surface.contains(LOADING_OVERLAY_ID) {
            return;
        }
        self.surface.append(
            None,
            UiElement {
                id: LOADING_OVERLAY_ID.to_string(),
                class_name: "loading-overlay".to_string(),
                inner_html: r#"<div class="loading-spinner"></div>"#.to_string(),
            },
        );
    }

    pub fn hide_loading(&self) {
        self.surface.remove(LOADING_OVERLAY_ID);
    }

    /// 在提示框容器中插入一条提示，5 秒后自动移除
    ///
    /// 页面没有提示框容器时什么也不做，返回 `None`。
    pub fn show_alert(&self, message: &str, kind: AlertKind) -> Option<String> {
        if !self.surface.contains(ALERT_CONTAINER_ID) {
            return None;
        }

        let id = format!("alert-{}", Uuid::new_v4().simple());
        let inserted = self.surface.append(
            Some(ALERT_CONTAINER_ID),
            UiElement {
                id: id.clone(),
                class_name: format!("alert alert-{}", kind.class_suffix()),
                inner_html: format!(
                    "<span>{}</span><span>{}</span>",
                    kind.icon(),
                    escape_html(message)
                ),
            },
        );
        if !inserted {
            return None;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let surface = Arc::clone(&self.surface);
                let alert_id = id.clone();
                handle.spawn(async move {
                    tokio::time::sleep(ALERT_LIFETIME).await;
                    surface.remove(&alert_id);
                });
            }
            Err(_) => {
                tracing::warn!("No async runtime; alert {} will not be dismissed", id);
            }
        }
        Some(id)
    }

    pub fn show_modal(&self, modal_id: &str) {
        self.surface.add_class(modal_id, MODAL_ACTIVE_CLASS);
    }

    pub fn hide_modal(&self, modal_id: &str) {
        self.surface.remove_class(modal_id, MODAL_ACTIVE_CLASS);
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
