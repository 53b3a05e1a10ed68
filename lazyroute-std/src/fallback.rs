//! Logging fallback for navigation failures.

use lazyroute_core::{Fallback, LoadError};

/// A fallback that logs unmatched paths and failed loads.
///
/// This is the navigator's default. It only records; presenting an error
/// view is left to an application-specific [`Fallback`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingFallback;

impl Fallback for LoggingFallback {
    fn not_found(&self, path: &str) {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(%path, "no route matches path");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = path; // Suppress unused warning
        }
    }

    fn load_failed(&self, path: &str, error: &LoadError) {
        #[cfg(feature = "tracing")]
        {
            tracing::error!(%path, route = error.route(), cause = %error.cause(), "view failed to load");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = (path, error);
        }
    }
}
