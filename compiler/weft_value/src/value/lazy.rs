//! Deferred values.
//!
//! A lazy value runs its resolver on first access and caches the result for
//! its whole lifetime. `OnceLock` makes the cache safe to fill from any
//! thread; concurrent first accesses block until one resolver finishes.

use std::fmt;
use std::sync::OnceLock;

use super::Value;

type Resolver = dyn Fn() -> Value + Send + Sync;

pub struct Lazy {
    resolver: Box<Resolver>,
    resolved: OnceLock<Value>,
}

impl Lazy {
    pub(super) fn new(resolver: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Lazy {
            resolver: Box::new(resolver),
            resolved: OnceLock::new(),
        }
    }

    /// The resolved value; never itself lazy.
    pub(super) fn force(&self) -> &Value {
        self.resolved
            .get_or_init(|| (self.resolver)().resolved().clone())
    }

    pub(super) fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }
}

impl fmt::Debug for Lazy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolved.get() {
            Some(value) => f.debug_tuple("Lazy").field(value).finish(),
            None => f.write_str("Lazy(<pending>)"),
        }
    }
}
