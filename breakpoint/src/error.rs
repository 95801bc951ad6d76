use thiserror::Error;

/// Failures of the platform viewport facilities.
///
/// These never reach consumers of [`crate::MobileSignal`]: the observer logs
/// them and falls back to `false` or to a static value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("no display surface to measure")]
    Unavailable,

    #[error("viewport reported a non-numeric width: {0}")]
    InvalidWidth(String),

    #[error("could not watch media query {query}: {reason}")]
    MediaQuery { query: String, reason: String },
}
