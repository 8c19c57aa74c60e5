//! CompletionClient trait definition.
//!
//! This is the seam between the session manager and whatever remote
//! service actually generates replies. Uses native async fn in traits
//! (RPITIT, Rust 2024 edition); implementations live in confab-infra
//! (e.g. `OpenAiClient`), and tests substitute in-memory fakes.

use confab_types::completion::{CompletionRequest, CompletionResponse};
use confab_types::error::CompletionError;

/// Trait for remote completion backends.
pub trait CompletionClient: Send + Sync {
    /// Human-readable client name (e.g. "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full generated turn.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, CompletionError>> + Send;
}
