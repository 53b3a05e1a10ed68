//! Resolved views and captured path parameters.

use crate::route::RouteEntry;
use std::sync::Arc;

/// Parameters captured from a path pattern, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing an earlier value with the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no parameter was captured.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// The component selected for display by a committed navigation.
///
/// A view is never mutated: the next navigation replaces it with a new one.
#[derive(Debug)]
pub struct ResolvedView<C> {
    component: C,
    entry: Arc<RouteEntry<C>>,
    path: String,
    params: Params,
    generation: u64,
}

impl<C: 'static> ResolvedView<C> {
    /// Assemble a view for a matched entry.
    pub fn new(
        component: C,
        entry: Arc<RouteEntry<C>>,
        path: impl Into<String>,
        params: Params,
        generation: u64,
    ) -> Self {
        Self {
            component,
            entry,
            path: path.into(),
            params,
            generation,
        }
    }

    /// The component to render.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// The matched route entry.
    pub fn entry(&self) -> &Arc<RouteEntry<C>> {
        &self.entry
    }

    /// Name of the matched route.
    pub fn name(&self) -> &str {
        self.entry.name()
    }

    /// The normalised path that was navigated to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parameters captured from the path.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Generation token of the navigation that produced this view.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
