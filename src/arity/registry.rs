//! Arity records keyed by function identity.

use crate::function::FunctionId;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::LazyLock;

#[cfg(feature = "fxhash")]
type RegistryHasher = rustc_hash::FxBuildHasher;

#[cfg(not(feature = "fxhash"))]
type RegistryHasher = std::collections::hash_map::RandomState;

static GLOBAL_REGISTRY: LazyLock<ArityRegistry> = LazyLock::new(ArityRegistry::new);

/// Maps a [`FunctionId`] to a recorded arity.
///
/// Each identity holds at most one arity; a later [`record`](Self::record)
/// replaces the earlier value. Lookups fall back to a caller-supplied value,
/// normally the function's own declared count, so the answer for an
/// identity can change over the life of the registry.
///
/// Keys are identities minted per constructed function, never names, so
/// unrelated functions cannot overwrite each other's entries. Entries are
/// independent of the function's lifetime and stay until
/// [`forget`](Self::forget) is called.
///
/// # Examples
///
/// ```rust
/// use arity_combinators::arity::ArityRegistry;
/// use arity_combinators::function::{Function, Value};
///
/// let registry = ArityRegistry::new();
/// let sum: Function = Function::variadic(|_| Ok(Value::Unit));
///
/// assert_eq!(registry.lookup(sum.id(), 0), 0);
/// registry.record(sum.id(), 2);
/// assert_eq!(registry.lookup(sum.id(), 0), 2);
///
/// // Last write wins.
/// assert_eq!(registry.record(sum.id(), 3), Some(2));
/// assert_eq!(registry.lookup(sum.id(), 0), 3);
/// ```
#[derive(Debug, Default)]
pub struct ArityRegistry {
    entries: RwLock<HashMap<FunctionId, usize, RegistryHasher>>,
}

impl ArityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::with_hasher(RegistryHasher::default())),
        }
    }

    /// Returns the process-wide registry, creating it on first use.
    pub fn global() -> &'static Self {
        &GLOBAL_REGISTRY
    }

    /// Stores `arity` under `id`, returning the value it replaced.
    pub fn record(&self, id: FunctionId, arity: usize) -> Option<usize> {
        let previous = self.entries.write().insert(id, arity);
        tracing::trace!(%id, arity, ?previous, "recorded arity");
        previous
    }

    /// Returns the arity recorded for `id`, or `fallback` if none is.
    pub fn lookup(&self, id: FunctionId, fallback: usize) -> usize {
        self.get(id).unwrap_or(fallback)
    }

    /// Returns the arity recorded for `id`, if any.
    pub fn get(&self, id: FunctionId) -> Option<usize> {
        self.entries.read().get(&id).copied()
    }

    /// Removes the entry for `id`, returning the arity it held.
    pub fn forget(&self, id: FunctionId) -> Option<usize> {
        let removed = self.entries.write().remove(&id);
        tracing::trace!(%id, ?removed, "forgot arity");
        removed
    }

    /// Returns the number of recorded identities.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

static_assertions::assert_impl_all!(ArityRegistry: Send, Sync);
