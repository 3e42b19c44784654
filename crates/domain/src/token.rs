//! Token guard — the request-level shared-secret check.

use crate::error::AuthError;

/// Compares a caller-supplied token against the secret configured at
/// process start.
///
/// The guard must pass before any control operation touches the service
/// manager. An unset (or empty) secret means no caller token can ever
/// match, so every request is rejected. That is the safe default.
#[derive(Debug, Clone)]
pub struct TokenGuard {
    expected: Option<String>,
}

impl TokenGuard {
    /// Create a guard for the given expected token.
    ///
    /// An empty expected token behaves exactly like an unset one: it can
    /// never be matched, not even by an empty supplied token.
    #[must_use]
    pub fn new(expected: Option<String>) -> Self {
        Self {
            expected: expected.filter(|token| !token.is_empty()),
        }
    }

    /// Whether a secret is configured at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.expected.is_some()
    }

    /// Check a caller-supplied token.
    ///
    /// Passes only when a secret is configured, a token was supplied, and
    /// the two are byte-for-byte equal.
    ///
    /// # Errors
    ///
    /// Returns the matching [`AuthError`] variant on any mismatch or
    /// absence; callers treat all of them as the same rejection.
    pub fn authorize(&self, supplied: Option<&str>) -> Result<(), AuthError> {
        let Some(expected) = self.expected.as_deref() else {
            return Err(AuthError::NotConfigured);
        };
        let Some(supplied) = supplied else {
            return Err(AuthError::MissingToken);
        };
        if supplied.as_bytes() == expected.as_bytes() {
            Ok(())
        } else {
            Err(AuthError::TokenMismatch)
        }
    }
}
