use std::cell::RefCell;
use std::sync::Arc;

use serde::Serialize;

use crate::foundation::core::GeneratedPoint;
use crate::geometry::points::{EquationConfig, ParametricCurve, generate_points};
use crate::geometry::shapes::{CircleConfig, RoundedRectConfig};
use crate::memo::cache::{CacheStats, MemoCache, MemoOpts};
use crate::memo::key::cache_key;

/// Memoized front for the point generators.
///
/// Only serializable equations are accepted, so the cache key always covers every input that
/// shapes the curve. Results are shared as `Arc<[GeneratedPoint]>`. Not `Sync`.
#[derive(Debug)]
pub struct GeometryCache {
    opts: MemoOpts,
    cache: RefCell<MemoCache<Arc<[GeneratedPoint]>>>,
}

impl Default for GeometryCache {
    fn default() -> Self {
        Self::new(MemoOpts::geometry())
    }
}

impl GeometryCache {
    /// Create a cache with the given policy.
    pub fn new(opts: MemoOpts) -> Self {
        Self {
            opts,
            cache: RefCell::new(MemoCache::new(opts)),
        }
    }

    /// Memoized [`generate_points`]. `tag` names the equation family in the key.
    pub fn points<C>(&self, tag: &str, cfg: &EquationConfig<C>) -> Arc<[GeneratedPoint]>
    where
        C: ParametricCurve + Serialize,
    {
        self.memo(tag, cfg, || generate_points(cfg))
    }

    /// Memoized [`crate::gen_circle_path`].
    pub fn circle(&self, cfg: &CircleConfig) -> Arc<[GeneratedPoint]> {
        self.points("circle", &cfg.equation_config())
    }

    /// Memoized [`crate::gen_rect_path`].
    pub fn rect(&self, cfg: &RoundedRectConfig) -> Arc<[GeneratedPoint]> {
        self.points("rounded_rect", &cfg.equation_config())
    }

    /// Cache counters.
    pub fn stats(&self) -> CacheStats {
        self.cache.borrow().stats()
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    fn memo<A: Serialize>(
        &self,
        tag: &str,
        args: &A,
        compute: impl FnOnce() -> Vec<GeneratedPoint>,
    ) -> Arc<[GeneratedPoint]> {
        if !self.opts.enabled {
            return compute().into();
        }
        let key = match cache_key(tag, args, self.opts.precision) {
            Ok(k) => k,
            Err(e) => {
                tracing::warn!(tag, error = %e, "geometry key unavailable, bypassing cache");
                return compute().into();
            }
        };
        if let Some(hit) = self.cache.borrow_mut().get(&key) {
            return Arc::clone(hit);
        }
        // Released before computing: a curve may itself draw on this cache.
        let points: Arc<[GeneratedPoint]> = compute().into();
        self.cache.borrow_mut().insert(key, Arc::clone(&points));
        points
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/cache.rs"]
mod tests;
