//! # Route Table
//!
//! The static mapping from path to component resolver.
//!
//! A [`RouteTable`] is built once at startup and never mutated afterwards;
//! share it through `Arc`. Construction fails with a [`ConfigError`] when two
//! entries declare the same path or the same name, which the application
//! should treat as fatal.
//!
//! # Matching
//!
//! Requested paths are normalised (query and fragment dropped, trailing slash
//! ignored unless the table is [`strict`](RouteTableBuilder::strict)) and
//! compared against every entry in insertion order. The first entry that
//! matches wins.
//!
//! ```rust,ignore
//! let table = RouteTable::register([
//!     RouteEntry::direct("/", "home", View::Home),
//!     RouteEntry::deferred("/users/{id}", "user", load_user_view),
//! ])?;
//!
//! let matched = table.lookup("/users/7").matched().unwrap();
//! assert_eq!(matched.params.get("id"), Some("7"));
//! ```

mod matcher;

use lazyroute_core::{ConfigError, HrefError, Params, RouteEntry, path};
use matcher::{Matcher, is_pattern};
use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
    sync::Arc,
};

/// A successful lookup.
#[derive(Debug)]
pub struct RouteMatch<'a, C> {
    /// The matched entry.
    pub entry: &'a Arc<RouteEntry<C>>,
    /// Parameters captured from the requested path.
    pub params: Params,
}

/// Result of a routing lookup.
#[derive(Debug)]
pub enum RouteResult<'a, C> {
    /// An entry matched.
    Matched(RouteMatch<'a, C>),
    /// No entry matches the path.
    NotFound,
}

impl<'a, C> RouteResult<'a, C> {
    /// Returns true if an entry matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(_))
    }

    /// Returns the match, if any.
    pub fn matched(self) -> Option<RouteMatch<'a, C>> {
        match self {
            RouteResult::Matched(m) => Some(m),
            RouteResult::NotFound => None,
        }
    }
}

struct Route<C> {
    entry: Arc<RouteEntry<C>>,
    matcher: Matcher,
}

/// Immutable, ordered set of routes.
pub struct RouteTable<C> {
    routes: Vec<Route<C>>,
    names: HashMap<String, usize>,
    strict: bool,
}

impl<C: 'static> RouteTable<C> {
    /// Build a non-strict table from `entries`, in order.
    pub fn register<I>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = RouteEntry<C>>,
    {
        let mut builder = RouteTableBuilder::new();
        builder.extend(entries)?;
        Ok(builder.build())
    }

    /// Start building a table.
    pub fn builder() -> RouteTableBuilder<C> {
        RouteTableBuilder::new()
    }

    /// Normalise a requested location the way lookups do.
    pub fn normalize<'p>(&self, location: &'p str) -> Cow<'p, str> {
        path::normalize(location, self.strict)
    }

    /// Find the first entry matching `path`.
    pub fn lookup(&self, path: &str) -> RouteResult<'_, C> {
        let path = self.normalize(path);
        self.routes
            .iter()
            .find_map(|route| {
                route.matcher.matches(&path).map(|params| RouteMatch {
                    entry: &route.entry,
                    params,
                })
            })
            .map_or(RouteResult::NotFound, RouteResult::Matched)
    }

    /// Find an entry by name.
    pub fn lookup_name(&self, name: &str) -> Option<&Arc<RouteEntry<C>>> {
        self.names.get(name).map(|&index| &self.routes[index].entry)
    }

    /// Build the path of a named route, filling in pattern parameters.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, HrefError> {
        let entry = self
            .lookup_name(name)
            .ok_or_else(|| HrefError::UnknownRoute(name.to_string()))?;

        if !is_pattern(entry.path()) {
            return Ok(self.normalize(entry.path()).into_owned());
        }

        let mut segments = Vec::new();
        for segment in entry.path().split('/') {
            let param = segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
                .map(|s| s.trim_start_matches('*'));

            match param {
                Some(key) => {
                    let value = params.get(key).ok_or_else(|| HrefError::MissingParam {
                        route: name.to_string(),
                        param: key.to_string(),
                    })?;
                    segments.push(value);
                }
                None => segments.push(segment),
            }
        }
        Ok(self.normalize(&segments.join("/")).into_owned())
    }

    /// Returns true if a trailing slash is significant.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &Arc<RouteEntry<C>>> {
        self.routes.iter().map(|route| &route.entry)
    }
}

/// Builder for [`RouteTable`].
pub struct RouteTableBuilder<C> {
    routes: Vec<Route<C>>,
    names: HashMap<String, usize>,
    paths: HashSet<String>,
    strict: bool,
}

impl<C: 'static> Default for RouteTableBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: 'static> RouteTableBuilder<C> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            names: HashMap::new(),
            paths: HashSet::new(),
            strict: false,
        }
    }

    /// Make trailing slashes significant. Must be set before inserting.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Append an entry.
    ///
    /// Returns an error if its path or name is already registered, or if its
    /// path is not a valid pattern.
    pub fn insert(&mut self, entry: RouteEntry<C>) -> Result<(), ConfigError> {
        let key = path::normalize(entry.path(), self.strict).into_owned();

        if self.paths.contains(&key) {
            return Err(ConfigError::DuplicatePath(entry.path().to_string()));
        }
        if self.names.contains_key(entry.name()) {
            return Err(ConfigError::DuplicateName(entry.name().to_string()));
        }

        let matcher = Matcher::compile(&key)?;
        self.names.insert(entry.name().to_string(), self.routes.len());
        self.paths.insert(key);
        self.routes.push(Route {
            entry: Arc::new(entry),
            matcher,
        });
        Ok(())
    }

    /// Append every entry, stopping at the first error.
    pub fn extend<I>(&mut self, entries: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = RouteEntry<C>>,
    {
        entries.into_iter().try_for_each(|entry| self.insert(entry))
    }

    /// Build the table, consuming the builder.
    pub fn build(self) -> RouteTable<C> {
        RouteTable {
            routes: self.routes,
            names: self.names,
            strict: self.strict,
        }
    }
}
