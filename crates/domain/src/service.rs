//! Service identity and run-state types.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

/// Characters that must never appear in a unit name handed to the service
/// manager. The name is always passed as a single argv element, so this is
/// an invariant of the name itself, not an escaping concern.
const FORBIDDEN_CHARACTERS: &[char] = &[
    '&', '|', ';', '$', '`', '"', '\'', '<', '>', '(', ')', '\\',
];

/// Validated name of the controlled service (e.g. `the.service`).
///
/// Immutable for the process lifetime: constructed once at startup and
/// injected everywhere it is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Validate and wrap a service name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyServiceName`] for an empty name, or
    /// [`ValidationError::ForbiddenCharacter`] when the name contains
    /// whitespace or a shell metacharacter.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyServiceName);
        }
        if let Some(found) = name
            .chars()
            .find(|c| c.is_whitespace() || FORBIDDEN_CHARACTERS.contains(c))
        {
            return Err(ValidationError::ForbiddenCharacter(found));
        }
        Ok(Self(name))
    }

    /// The name as a string slice, suitable as a command argument.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Run state as reported by the service manager, surrounding whitespace
/// trimmed, otherwise verbatim (`active`, `inactive`, `failed`, or any
/// manager-specific text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServiceState(String);

impl ServiceState {
    /// Build a state from raw command output, trimming surrounding
    /// whitespace.
    #[must_use]
    pub fn from_output(raw: &str) -> Self {
        Self(raw.trim().to_owned())
    }

    /// The reported state text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle acknowledgement reported by the start and stop operations.
///
/// These are fire-and-forget: the acknowledgement says the control command
/// was issued, not that the service reached the corresponding state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Starting,
    Stopping,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Starting => f.write_str("starting"),
            Self::Stopping => f.write_str("stopping"),
        }
    }
}
