//! 预览注册表 - 基础设施层
//!
//! 持有所有图片预览的内存数据，只暴露"创建 / 解析预览地址"的能力。
//! 预览地址由 `PreviewHandle` 持有，句柄被丢弃时地址随之失效。

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

const URL_PREFIX: &str = "blob:quizgen/";

#[derive(Default)]
struct RegistryInner {
    next_id: AtomicU64,
    live: Mutex<HashMap<String, Arc<[u8]>>>,
}

/// 预览注册表
///
/// 可以安全地 clone，所有 clone 共享同一份预览数据
#[derive(Clone, Default)]
pub struct PreviewRegistry {
    inner: Arc<RegistryInner>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为内存中的文件内容创建预览地址
    pub fn create(&self, bytes: Arc<[u8]>) -> PreviewHandle {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let url = format!("{}{}", URL_PREFIX, id);
        if let Ok(mut live) = self.inner.live.lock() {
            live.insert(url.clone(), bytes);
        }
        debug!("创建预览: {}", url);
        PreviewHandle {
            url,
            registry: Arc::clone(&self.inner),
        }
    }

    /// 根据预览地址取回文件内容，已释放的地址返回 `None`
    pub fn resolve(&self, url: &str) -> Option<Arc<[u8]>> {
        self.inner.live.lock().ok()?.get(url).cloned()
    }

    /// 当前仍然有效的预览数量
    pub fn live_count(&self) -> usize {
        self.inner.live.lock().map(|live| live.len()).unwrap_or(0)
    }
}

impl fmt::Debug for PreviewRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewRegistry")
            .field("live", &self.live_count())
            .finish()
    }
}

/// 预览地址句柄，被丢弃时释放对应的预览
pub struct PreviewHandle {
    url: String,
    registry: Arc<RegistryInner>,
}

impl PreviewHandle {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PreviewHandle").field(&self.url).finish()
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if let Ok(mut live) = self.registry.live.lock() {
            live.remove(&self.url);
        }
        debug!("释放预览: {}", self.url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_drop_revokes_url() {
        let registry = PreviewRegistry::new();
        let handle = registry.create(Arc::from(&b"png"[..]));
        let url = handle.url().to_string();

        assert!(url.starts_with(URL_PREFIX));
        assert_eq!(registry.resolve(&url).as_deref(), Some(&b"png"[..]));
        assert_eq!(registry.live_count(), 1);

        drop(handle);
        assert!(registry.resolve(&url).is_none());
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn test_urls_are_unique() {
        let registry = PreviewRegistry::new();
        let a = registry.create(Arc::from(&b"a"[..]));
        let b = registry.create(Arc::from(&b"b"[..]));
        assert_ne!(a.url(), b.url());
        assert_eq!(registry.live_count(), 2);
    }
}
