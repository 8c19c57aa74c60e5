//! ConversationArchive trait definition.
//!
//! Optional durable storage for transcripts and per-user preferences,
//! keyed by an external user identifier. The session manager never
//! calls this itself; the application layer decides what to persist.

use confab_types::error::StoreError;

/// Durable keyed store for conversations, messages, and preferences.
///
/// Implemented by `SqliteArchive` in confab-infra.
pub trait ConversationArchive: Send + Sync {
    /// Record the start of a conversation, returning its row id.
    fn save_conversation(
        &self,
        user_id: &str,
        message: &str,
    ) -> impl std::future::Future<Output = Result<i64, StoreError>> + Send;

    /// Append one turn to a stored conversation.
    fn save_turn(
        &self,
        conversation_id: i64,
        content: &str,
        sender: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Upsert a user preference.
    fn set_preference(
        &self,
        user_id: &str,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Look up a user preference. `None` means unset.
    fn get_preference(
        &self,
        user_id: &str,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>> + Send;
}
