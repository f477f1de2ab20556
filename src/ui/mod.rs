// 界面适配层
// 客户端只通过 UiSurface 操作页面元素，测试和命令行下使用 HeadlessSurface

pub mod headless;
pub mod presenter;

pub use headless::HeadlessSurface;
pub use presenter::{ALERT_CONTAINER_ID, ALERT_LIFETIME, AlertKind, LOADING_OVERLAY_ID, Presenter};

/// 要插入页面的元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiElement {
    pub id: String,
    pub class_name: String,
    pub inner_html: String,
}

/// 页面能力，由宿主环境提供
///
/// 元素不存在时各方法返回 `false`，不报错。
pub trait UiSurface: Send + Sync {
    fn contains(&self, id: &str) -> bool;

    /// 追加元素；`parent` 为 `None` 时追加到 body
    fn append(&self, parent: Option<&str>, element: UiElement) -> bool;

    fn remove(&self, id: &str) -> bool;

    fn add_class(&self, id: &str, class: &str) -> bool;

    fn remove_class(&self, id: &str, class: &str) -> bool;

    /// 整页跳转
    fn navigate(&self, href: &str);
}
