//! # Pattern Save Flow
//!
//! The save dialog walks a small state machine:
//!
//! ```text
//! Idle → Editing (dialog open) → Submitting → Succeeded
//!                      │              │
//!                      └── rejected ──┴──→ Idle (+ error banner)
//! ```
//!
//! Validation runs at submit time, first failure wins:
//! authentication, then emptiness, then naming.

use std::fmt;

use crate::core::pattern;

/// Where the save flow currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Nothing going on.
    #[default]
    Idle,
    /// The save dialog is open and the user is naming the pattern.
    Editing,
    /// The API call is in flight. Further submits are ignored until it
    /// resolves.
    Submitting,
    /// The server accepted the pattern; the success banner is showing.
    Succeeded,
}

/// Why a submission was blocked or rejected.
///
/// The first three are detected locally and block the API call entirely.
/// `Rejected` passes the server's message through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    NotAuthenticated,
    EmptyPattern,
    MissingName,
    Rejected(String),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::NotAuthenticated => {
                write!(f, "You must be logged in to save a pattern to your collection.")
            }
            SubmissionError::EmptyPattern => write!(f, "Pattern cannot be empty."),
            SubmissionError::MissingName => {
                write!(f, "Please provide a name for your pattern.")
            }
            SubmissionError::Rejected(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Checks a submission before it goes to the API. Short-circuits on the
/// first failing check.
pub fn validate(
    username: Option<&str>,
    name: &str,
    body: &str,
) -> Result<(), SubmissionError> {
    if username.is_none() {
        return Err(SubmissionError::NotAuthenticated);
    }
    if pattern::is_lifeless(body) {
        return Err(SubmissionError::EmptyPattern);
    }
    if name.is_empty() {
        return Err(SubmissionError::MissingName);
    }
    Ok(())
}
