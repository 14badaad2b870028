//! API key resolution.
//!
//! The key comes either from an explicit value or from the
//! [`API_KEY_ENV`] environment variable. Resolution happens once, when a
//! [`RetrievalConfig`](crate::RetrievalConfig) is built.

use std::fmt;

use crate::error::{RagieError, Result};

/// The environment variable consulted when no explicit key is given.
pub const API_KEY_ENV: &str = "RAGIE_API_KEY";

const MISSING_KEY_MESSAGE: &str = "Ragie API key not found. Please set the RAGIE_API_KEY \
                                   environment variable or pass it via `api_key`.";

/// A Ragie API key.
///
/// The value is redacted from `Debug` output and has no `Display`
/// implementation, so it cannot end up in logs or error messages by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Return the raw key, for use in the `Authorization` header only.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Resolve the API key from an explicit value or the environment.
///
/// `lookup` is called with [`API_KEY_ENV`] only when `explicit` is `None`.
/// An empty environment value counts as unset.
///
/// # Errors
///
/// Returns [`RagieError::ConfigError`] if the explicit key is empty, or if
/// no explicit key was given and the environment has none either.
pub fn resolve_api_key<F>(explicit: Option<String>, lookup: F) -> Result<ApiKey>
where
    F: Fn(&str) -> Option<String>,
{
    match explicit {
        Some(key) if key.trim().is_empty() => {
            Err(RagieError::ConfigError("API key must not be empty".to_string()))
        }
        Some(key) => Ok(ApiKey(key)),
        None => lookup(API_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .map(ApiKey)
            .ok_or_else(|| RagieError::ConfigError(MISSING_KEY_MESSAGE.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_wins_without_consulting_env() {
        let key = resolve_api_key(Some("explicit".into()), |_| panic!("env consulted")).unwrap();
        assert_eq!(key.expose_secret(), "explicit");
    }

    #[test]
    fn falls_back_to_env() {
        let key = resolve_api_key(None, |name| {
            assert_eq!(name, API_KEY_ENV);
            Some("from-env".into())
        })
        .unwrap();
        assert_eq!(key.expose_secret(), "from-env");
    }

    #[test]
    fn missing_key_names_the_variable() {
        let err = resolve_api_key(None, |_| None).unwrap_err();
        assert!(matches!(err, RagieError::ConfigError(_)));
        assert!(err.to_string().contains("RAGIE_API_KEY"));
    }

    #[test]
    fn empty_env_value_counts_as_missing() {
        let err = resolve_api_key(None, |_| Some(String::new())).unwrap_err();
        assert!(err.to_string().contains("RAGIE_API_KEY"));
    }

    #[test]
    fn empty_explicit_key_is_rejected() {
        let err = resolve_api_key(Some("  ".into()), |_| Some("from-env".into())).unwrap_err();
        assert!(matches!(err, RagieError::ConfigError(_)));
    }

    #[test]
    fn debug_output_is_redacted() {
        let key = resolve_api_key(Some("sk-secret-value".into()), |_| None).unwrap();
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("sk-secret-value"));
    }
}
