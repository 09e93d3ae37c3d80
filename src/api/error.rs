//! Error taxonomy for the API client.

use thiserror::Error;

/// Errors surfaced by [`BitcoinDeClient`](super::BitcoinDeClient).
///
/// Application-level error codes the exchange returns inside JSON bodies
/// (invalid signature, insufficient credits, order not found, ...) are not
/// classified here; they pass through to the caller as opaque JSON. See
/// [`codes`](super::codes) for the numeric constants.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Method name does not resolve against the registry.
    #[error("unknown API method \"{0}\"")]
    UnknownMethod(String),

    /// A mandatory parameter is absent, or an id parameter is absent/empty.
    #[error("value for mandatory parameter \"{name}\" is missing")]
    MissingParameter { name: &'static str },

    /// Non-empty response body failed to parse as JSON.
    #[error("malformed JSON response")]
    MalformedResponse(#[from] serde_json::Error),

    /// Network or TLS failure, passed through from the HTTP layer unwrapped.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
