use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};

use super::{UiElement, UiSurface};

#[derive(Debug, Clone)]
struct Node {
    parent: Option<String>,
    classes: BTreeSet<String>,
    inner_html: String,
}

#[derive(Debug, Default)]
struct Page {
    nodes: HashMap<String, Node>,
    // 保持插入顺序，方便按顺序取子元素
    order: Vec<String>,
    location: Option<String>,
}

/// 内存中的页面，没有渲染
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    page: Mutex<Page>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// 带有常用容器（提示框容器）的页面
    pub fn with_containers<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let surface = Self::new();
        for id in ids {
            surface.append(
                None,
                UiElement {
                    id: id.to_string(),
                    class_name: String::new(),
                    inner_html: String::new(),
                },
            );
        }
        surface
    }

    pub fn classes(&self, id: &str) -> Vec<String> {
        self.lock()
            .nodes
            .get(id)
            .map(|node| node.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.lock()
            .nodes
            .get(id)
            .is_some_and(|node| node.classes.contains(class))
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.lock().nodes.get(id).map(|node| node.inner_html.clone())
    }

    /// 某个元素的直接子元素 id，按插入顺序
    pub fn children(&self, parent: &str) -> Vec<String> {
        let page = self.lock();
        page.order
            .iter()
            .filter(|id| {
                page.nodes
                    .get(id.as_str())
                    .is_some_and(|node| node.parent.as_deref() == Some(parent))
            })
            .cloned()
            .collect()
    }

    /// 最近一次跳转的地址
    pub fn location(&self) -> Option<String> {
        self.lock().location.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Page> {
        self.page
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl UiSurface for HeadlessSurface {
    fn contains(&self, id: &str) -> bool {
        self.lock().nodes.contains_key(id)
    }

    fn append(&self, parent: Option<&str>, element: UiElement) -> bool {
        let mut page = self.lock();
        if let Some(parent) = parent {
            if !page.nodes.contains_key(parent) {
                return false;
            }
        }
        if page.nodes.contains_key(&element.id) {
            return false;
        }

        let classes = element
            .class_name
            .split_whitespace()
            .map(str::to_string)
            .collect();
        page.order.push(element.id.clone());
        page.nodes.insert(
            element.id,
            Node {
                parent: parent.map(str::to_string),
                classes,
                inner_html: element.inner_html,
            },
        );
        true
    }

    fn remove(&self, id: &str) -> bool {
        let mut page = self.lock();
        if page.nodes.remove(id).is_none() {
            return false;
        }

        // 连同子孙元素一起移除
        let mut removed = vec![id.to_string()];
        loop {
            let orphans: Vec<String> = page
                .nodes
                .iter()
                .filter(|(_, node)| {
                    node.parent
                        .as_ref()
                        .is_some_and(|parent| removed.contains(parent))
                })
                .map(|(child, _)| child.clone())
                .collect();
            if orphans.is_empty() {
                break;
            }
            for child in &orphans {
                page.nodes.remove(child);
            }
            removed.extend(orphans);
        }
        page.order.retain(|existing| !removed.contains(existing));
        true
    }

    fn add_class(&self, id: &str, class: &str) -> bool {
        match self.lock().nodes.get_mut(id) {
            Some(node) => {
                node.classes.insert(class.to_string());
                true
            }
            None => false,
        }
    }

    fn remove_class(&self, id: &str, class: &str) -> bool {
        match self.lock().nodes.get_mut(id) {
            Some(node) => {
                node.classes.remove(class);
                true
            }
            None => false,
        }
    }

    fn navigate(&self, href: &str) {
        tracing::debug!("Navigating to {}", href);
        self.lock().location = Some(href.to_string());
    }
}
