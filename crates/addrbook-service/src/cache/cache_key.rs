//! Namespaced cache keys.

use std::fmt;

/// Separator between namespace and encoded key in the storage key.
const SEPARATOR: char = ':';

/// A partition namespace plus an entity-specific encoded identifier.
///
/// Two keys are equal iff both parts are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    namespace: String,
    encoded_key: String,
}

impl CacheKey {
    #[must_use]
    pub fn new(namespace: impl Into<String>, encoded_key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            encoded_key: encoded_key.into(),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn encoded_key(&self) -> &str {
        &self.encoded_key
    }

    /// Fully-qualified key used by shared backends: `{namespace}:{encoded_key}`.
    #[must_use]
    pub fn storage_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.namespace, SEPARATOR, self.encoded_key)
    }
}
