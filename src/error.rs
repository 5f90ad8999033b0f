//! Client-facing error taxonomy.
//!
//! DESIGN
//! ======
//! Remote failures stay opaque message strings passed through verbatim; the
//! only classification the UI ever performs is the authorization substring
//! check used by the update flow.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Errors surfaced to page views and the post store.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A write was attempted without an active identity.
    #[error("User not authenticated")]
    Unauthenticated,
    /// Any backend-reported failure: constraint violation, authorization
    /// denial, network failure. All opaque to the client.
    #[error("{0}")]
    Remote(String),
    /// Client-side validation failure (password confirmation only).
    #[error("{0}")]
    Validation(String),
}

impl Error {
    /// Message text as shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// True when a backend message indicates an authorization denial.
///
/// Row-level-security violations come back as free-form text, so this is a
/// case-insensitive substring check, nothing smarter.
pub fn is_access_denied(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("forbidden") || lower.contains("unauthorized")
}
