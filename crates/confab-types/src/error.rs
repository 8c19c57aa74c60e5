use thiserror::Error;

/// Errors raised at construction time: missing or invalid credentials.
///
/// These are fatal. A session manager is never handed out half-built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable '{0}' is not set")]
    MissingApiKey(&'static str),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors from the remote completion provider.
///
/// The provider is the only failure source in a session. Sub-causes are
/// kept distinct so callers can tell transient failures (rate limits,
/// transport errors) from fatal ones (bad credentials) without string
/// matching.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Deserialization(String),

    #[error("provider error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
}

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Errors from the persistence adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),
}
