//! Per-entry path matchers.
//!
//! Plain paths compare by string. Paths containing `{param}` or `{*rest}`
//! segments are compiled with `matchit` when the `matchit` feature is
//! enabled, and rejected otherwise.

use lazyroute_core::{ConfigError, Params};

#[cfg(feature = "matchit")]
use matchit::Router as InnerRouter;

pub(crate) enum Matcher {
    Exact(String),
    #[cfg(feature = "matchit")]
    Pattern(InnerRouter<()>),
}

impl Matcher {
    /// Compile an already normalised path.
    pub(crate) fn compile(path: &str) -> Result<Self, ConfigError> {
        if !is_pattern(path) {
            return Ok(Matcher::Exact(path.to_string()));
        }

        #[cfg(feature = "matchit")]
        {
            let mut router = InnerRouter::new();
            router
                .insert(path, ())
                .map_err(|e| ConfigError::InvalidPattern {
                    path: path.to_string(),
                    reason: e.to_string(),
                })?;
            Ok(Matcher::Pattern(router))
        }

        #[cfg(not(feature = "matchit"))]
        {
            Err(ConfigError::InvalidPattern {
                path: path.to_string(),
                reason: "path parameters require the `matchit` feature".to_string(),
            })
        }
    }

    /// Match a normalised path, returning the captured parameters.
    pub(crate) fn matches(&self, path: &str) -> Option<Params> {
        match self {
            Matcher::Exact(expected) => (expected == path).then(Params::new),
            #[cfg(feature = "matchit")]
            Matcher::Pattern(router) => router
                .at(path)
                .ok()
                .map(|matched| matched.params.iter().collect()),
        }
    }
}

pub(crate) fn is_pattern(path: &str) -> bool {
    path.contains(['{', '}'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matcher() {
        let matcher = Matcher::compile("/socket-optimisation").unwrap();
        assert_eq!(matcher.matches("/socket-optimisation"), Some(Params::new()));
        assert_eq!(matcher.matches("/socket"), None);
    }

    #[cfg(feature = "matchit")]
    #[test]
    fn test_pattern_matcher_captures() {
        let matcher = Matcher::compile("/users/{id}").unwrap();
        let params = matcher.matches("/users/42").unwrap();
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(matcher.matches("/users"), None);

        let catch_all = Matcher::compile("/files/{*rest}").unwrap();
        let params = catch_all.matches("/files/img/logo.png").unwrap();
        assert_eq!(params.get("rest"), Some("img/logo.png"));
    }

    #[cfg(feature = "matchit")]
    #[test]
    fn test_malformed_pattern() {
        let result = Matcher::compile("/users/{id");
        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
    }

    #[cfg(not(feature = "matchit"))]
    #[test]
    fn test_pattern_requires_feature() {
        let result = Matcher::compile("/users/{id}");
        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
    }
}
