//! Page fetch error types.

use thiserror::Error;

/// Why a listing page could not be fetched.
///
/// This is the only failure that stops a listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with something other than `200 OK`.
    #[error("Failed to retrieve '{url}': HTTP {status}")]
    Status { url: String, status: u16 },

    /// No response was received.
    #[error("Failed to retrieve '{url}': {message}")]
    Transport { url: String, message: String },
}

impl FetchError {
    /// The URL that failed.
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. } | Self::Transport { url, .. } => url,
        }
    }
}
