use crate::domain::EngineError;
use crate::infra::diagram::engine::{Artifact, RenderEngine, RenderId};
use crate::infra::diagram::readiness::ReadinessGate;
use crate::infra::diagram::theme::ThemeOptions;
use async_trait::async_trait;
use lru::LruCache;
use parking_lot::Mutex;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use twox_hash::XxHash64;

type CacheKey = u64;

/// Remembers successful renders so revisiting an entry skips the engine.
///
/// Entries are keyed by the configured theme and the diagram source.
/// Failures are never cached.
pub struct CachedEngine<E> {
    inner: E,
    theme_key: AtomicU64,
    cache: Mutex<LruCache<CacheKey, Artifact>>,
}

impl<E: RenderEngine> CachedEngine<E> {
    pub fn new(inner: E, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            theme_key: AtomicU64::new(0),
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    fn key(&self, source: &str) -> CacheKey {
        let mut hasher = XxHash64::with_seed(0);
        self.theme_key.load(Ordering::Acquire).hash(&mut hasher);
        source.hash(&mut hasher);
        hasher.finish()
    }
}

fn theme_key(theme: &ThemeOptions) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    theme.hash(&mut hasher);
    hasher.finish()
}

#[async_trait]
impl<E: RenderEngine> RenderEngine for CachedEngine<E> {
    fn readiness(&self) -> ReadinessGate {
        self.inner.readiness()
    }

    fn configure(&self, theme: &ThemeOptions) {
        self.theme_key.store(theme_key(theme), Ordering::Release);
        self.inner.configure(theme);
    }

    async fn render(&self, id: &RenderId, source: &str) -> Result<Artifact, EngineError> {
        let key = self.key(source);
        let hit = self.cache.lock().get(&key).cloned();
        if let Some(hit) = hit {
            log::debug!("Diagram cache hit for {id}");
            return Ok(hit);
        }

        let artifact = self.inner.render(id, source).await?;
        self.cache.lock().put(key, artifact.clone());
        Ok(artifact)
    }
}
