//! Name resolution.
//!
//! A `Scope` owns its local bindings and borrows its parent. Lookups walk
//! the parent chain; writes only ever touch the local map. A child scope
//! borrows its parent for as long as it lives, so a parent cannot be written
//! while one of its children is active.

use rustc_hash::FxHashMap;

use crate::errors::undefined_name;
use crate::{EvalError, Value};

/// A chained name-to-value mapping.
#[derive(Debug, Default)]
pub struct Scope<'p> {
    /// Local bindings.
    bindings: FxHashMap<String, Value>,
    /// Enclosing scope, consulted when a name is not bound locally.
    parent: Option<&'p Scope<'p>>,
}

impl<'p> Scope<'p> {
    /// Create a root scope.
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    /// Create a scope whose lookups fall back to `parent`.
    pub fn with_parent(parent: &'p Scope<'p>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// The enclosing scope, if any.
    pub fn parent(&self) -> Option<&'p Scope<'p>> {
        self.parent
    }

    /// Resolve `name`, walking up to the root.
    pub fn get(&self, name: &str) -> Result<Value, EvalError> {
        self.lookup(name)
            .cloned()
            .ok_or_else(|| undefined_name(name))
    }

    /// Resolve `name` without building an error.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let mut scope = self;
        loop {
            if let Some(value) = scope.bindings.get(name) {
                return Some(value);
            }
            scope = scope.parent?;
        }
    }

    /// Bind `name` in this scope, shadowing any ancestor binding.
    #[inline]
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Returns `true` if `name` is bound in this scope itself.
    pub fn contains_local(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of scopes in the chain, this one included.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut scope = self;
        while let Some(parent) = scope.parent {
            depth += 1;
            scope = parent;
        }
        depth
    }
}
