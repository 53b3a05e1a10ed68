//! Path normalisation and base-path handling.

use std::borrow::Cow;

/// Normalise a requested location into a lookup key.
///
/// The query string and fragment are dropped and an empty path becomes `/`.
/// Unless `strict` is set, a single trailing slash is ignored.
pub fn normalize(location: &str, strict: bool) -> Cow<'_, str> {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];

    if path.is_empty() {
        return Cow::Borrowed("/");
    }

    let path = if !strict && path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };

    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

/// Remove `base` from the front of `location`.
///
/// Returns `None` if the location lies outside the base. An empty base or `/`
/// accepts every location.
pub fn strip_base<'a>(location: &'a str, base: &str) -> Option<&'a str> {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return Some(location);
    }

    let rest = location.strip_prefix(base)?;
    if rest.is_empty() {
        Some("/")
    } else if rest.starts_with(['/', '?', '#']) {
        Some(rest)
    } else {
        None
    }
}

/// Prefix `path` with `base`.
pub fn join_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("", false), "/");
        assert_eq!(normalize("/", false), "/");
        assert_eq!(normalize("/socket-optimisation/", false), "/socket-optimisation");
        assert_eq!(normalize("/socket-optimisation/", true), "/socket-optimisation/");
        assert_eq!(normalize("/a?b=1#top", false), "/a");
        assert_eq!(normalize("?tab=2", false), "/");
        assert_eq!(normalize("about", false), "/about");
    }

    #[test]
    fn test_strip_base() {
        assert_eq!(strip_base("/app/users", "/app/"), Some("/users"));
        assert_eq!(strip_base("/app", "/app"), Some("/"));
        assert_eq!(strip_base("/app?x=1", "/app"), Some("?x=1"));
        assert_eq!(strip_base("/application", "/app"), None);
        assert_eq!(strip_base("/other", "/app"), None);
        assert_eq!(strip_base("/users", "/"), Some("/users"));
    }

    #[test]
    fn test_join_base() {
        assert_eq!(join_base("/app/", "/users"), "/app/users");
        assert_eq!(join_base("", "/users"), "/users");
        assert_eq!(join_base("/app", "users"), "/app/users");
    }
}
