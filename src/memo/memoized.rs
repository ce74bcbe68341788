use std::cell::RefCell;
use std::marker::PhantomData;

use serde::Serialize;

use crate::memo::cache::{CacheStats, MemoCache, MemoOpts};
use crate::memo::key::cache_key;

/// A pure function wrapped with an LRU/TTL cache keyed on its rounded, serialized argument.
///
/// The key only sees `A`. Anything else the function reads (captured variables, globals) is
/// invisible to the cache, so a wrapped function must depend on its argument alone or results
/// go stale. Pass such state in `A` instead.
///
/// Uses interior mutability and is therefore not `Sync`; keep one instance per thread.
pub struct Memoized<A: ?Sized, R, F> {
    tag: &'static str,
    f: F,
    opts: MemoOpts,
    cache: RefCell<MemoCache<R>>,
    _arg: PhantomData<fn(&A)>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Serialize + ?Sized,
    R: Clone,
    F: Fn(&A) -> R,
{
    /// Wrap `f`. `tag` prefixes every key so several wrappers can share a key space in logs.
    pub fn new(tag: &'static str, f: F, opts: MemoOpts) -> Self {
        Self {
            tag,
            f,
            opts,
            cache: RefCell::new(MemoCache::new(opts)),
            _arg: PhantomData,
        }
    }

    /// Call through the cache (or directly when disabled).
    pub fn call(&self, args: &A) -> R {
        if !self.opts.enabled {
            return (self.f)(args);
        }

        let key = match cache_key(self.tag, args, self.opts.precision) {
            Ok(k) => k,
            Err(e) => {
                tracing::warn!(tag = self.tag, error = %e, "memo key unavailable, bypassing cache");
                return (self.f)(args);
            }
        };

        if let Some(v) = self.cache.borrow_mut().get(&key) {
            return v.clone();
        }

        // The borrow is released before calling out so `f` may re-enter other memoized calls.
        let v = (self.f)(args);
        self.cache.borrow_mut().insert(key, v.clone());
        v
    }

    /// Cache counters.
    pub fn stats(&self) -> CacheStats {
        self.cache.borrow().stats()
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Drop all cached results.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/memo/memoized.rs"]
mod tests;
