//! Variable bindings captured by a successful name parse.

use std::collections::BTreeMap;

use crate::id::ResourceId;

/// The typed result of matching a name against a format: one resource id
/// per variable segment.
///
/// Variables are stored in sorted order for deterministic iteration and
/// comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    inner: BTreeMap<String, ResourceId>,
}

impl Bindings {
    /// Creates an empty binding set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates bindings from an iterator of `(variable, id)` pairs.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, ResourceId)>,
        K: Into<String>,
    {
        let mut bindings = Self::new();
        for (var, id) in pairs {
            bindings.set(var, id);
        }
        bindings
    }

    /// Binds `var` to `id`.
    ///
    /// Returns the previous id if `var` was already bound.
    pub fn set(&mut self, var: impl Into<String>, id: ResourceId) -> Option<ResourceId> {
        self.inner.insert(var.into(), id)
    }

    /// Returns the id bound to `var`.
    pub fn get(&self, var: &str) -> Option<ResourceId> {
        self.inner.get(var).copied()
    }

    /// Returns true if `var` is bound.
    pub fn contains(&self, var: &str) -> bool {
        self.inner.contains_key(var)
    }

    /// Returns the number of bound variables.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if no variables are bound.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over `(variable, id)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ResourceId)> {
        self.inner.iter().map(|(var, id)| (var.as_str(), *id))
    }

    /// Iterates over bound variable names in sorted order.
    pub fn vars(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(|var| var.as_str())
    }
}
