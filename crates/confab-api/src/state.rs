//! Application state for the HTTP server.
//!
//! One shared session lives behind a `tokio::sync::Mutex` held across
//! the full `send` call, so concurrent requests cannot interleave
//! transcript appends. The archive rides along inside the same lock;
//! its writes are serialized with the session they describe.

use std::sync::Arc;

use secrecy::SecretString;

use confab_core::session::Session;
use confab_infra::openai::OpenAiClient;
use confab_infra::sqlite::archive::SqliteArchive;
use confab_types::session::SamplingConfig;
use confab_types::settings::Settings;

/// Session plus its optional durable archive.
pub struct ChatState {
    pub session: Session<OpenAiClient>,
    pub archive: Option<SqliteArchive>,
    /// Archive row id for the current conversation; allocated lazily on
    /// the first persisted message.
    pub conversation_id: Option<i64>,
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<tokio::sync::Mutex<ChatState>>,
}

impl AppState {
    /// Build state from settings and a credential.
    pub fn new(settings: &Settings, api_key: SecretString, archive: Option<SqliteArchive>) -> Self {
        let client = OpenAiClient::new(api_key);
        let session = Session::with_config(
            client,
            SamplingConfig {
                temperature: settings.chat.temperature,
                max_output_tokens: settings.chat.max_output_tokens,
                model: settings.chat.model.clone(),
            },
        );

        Self {
            chat: Arc::new(tokio::sync::Mutex::new(ChatState {
                session,
                archive,
                conversation_id: None,
            })),
        }
    }
}
