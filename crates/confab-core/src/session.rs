//! Session manager: transcript bookkeeping, scratch memory, and
//! orchestration of remote completion calls.
//!
//! A [`Session`] owns all mutable conversation state. The transcript
//! grows without bound (no eviction) until explicitly cleared, but only
//! the most recent [`HISTORY_WINDOW`] turns are sent upstream per call.
//! The persona instruction is injected as a `system` turn at request
//! build time and is never stored in the transcript.

use std::collections::HashMap;

use tracing::{debug, instrument};

use confab_types::completion::{CompletionRequest, Role, Turn};
use confab_types::error::SessionError;
use confab_types::session::{MemoryEntry, SamplingConfig, SessionStats};

use crate::client::CompletionClient;
use crate::persona::Persona;

/// Number of transcript turns included in each outbound request.
///
/// Older turns are silently dropped from the request but retained in the
/// transcript.
pub const HISTORY_WINDOW: usize = 10;

/// Persona instruction applied when none is configured.
pub const DEFAULT_PERSONA: &str = "You are a helpful assistant.";

/// Fixed instruction appended when summarizing a conversation.
const SUMMARY_PROMPT: &str = "Summarize the conversation above in 2-3 sentences.";

/// Returned by [`Session::summarize`] when there is nothing to summarize.
pub const EMPTY_SUMMARY: &str = "No conversation to summarize yet.";

/// Temperature used for summarization calls, regardless of the session's
/// configured temperature.
const SUMMARY_TEMPERATURE: f64 = 0.5;

/// Output cap for summarization calls.
const SUMMARY_MAX_TOKENS: u32 = 500;

/// A single conversation session bound to a completion client.
///
/// Not safe for concurrent use: callers that share a session across
/// tasks must wrap it in a mutex held across the full `send` call so
/// that two sends cannot interleave transcript appends. Distinct
/// sessions share no state.
pub struct Session<C: CompletionClient> {
    client: C,
    persona_instruction: String,
    config: SamplingConfig,
    transcript: Vec<Turn>,
    memory: HashMap<String, MemoryEntry>,
}

impl<C: CompletionClient> Session<C> {
    /// Create a session with the default persona and sampling config.
    pub fn new(client: C) -> Self {
        Self {
            client,
            persona_instruction: DEFAULT_PERSONA.to_string(),
            config: SamplingConfig::default(),
            transcript: Vec::new(),
            memory: HashMap::new(),
        }
    }

    /// Create a session pre-configured with a persona preset.
    ///
    /// The returned session is fresh and independent: empty transcript,
    /// empty memory.
    pub fn with_persona(client: C, persona: Persona) -> Self {
        let mut session = Self::new(client);
        session.persona_instruction = persona.instruction().to_string();
        session.config.temperature = persona.temperature();
        session
    }

    /// Create a session with an explicit sampling config.
    pub fn with_config(client: C, config: SamplingConfig) -> Self {
        let mut session = Self::new(client);
        session.config = SamplingConfig {
            temperature: SamplingConfig::clamp_temperature(config.temperature),
            ..config
        };
        session
    }

    // --- Configuration ---

    /// Replace the standing persona instruction.
    pub fn set_persona(&mut self, instruction: impl Into<String>) {
        self.persona_instruction = instruction.into();
    }

    /// Set the sampling temperature, clamped into `[0, 2]`.
    pub fn set_temperature(&mut self, temperature: f64) {
        self.config.temperature = SamplingConfig::clamp_temperature(temperature);
    }

    /// Set the cap on generated output length.
    pub fn set_max_output_tokens(&mut self, max_output_tokens: u32) {
        self.config.max_output_tokens = max_output_tokens;
    }

    /// Switch the model used for subsequent calls.
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.config.model = model.into();
    }

    pub fn persona_instruction(&self) -> &str {
        &self.persona_instruction
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    // --- Memory ---

    /// Store a value in scratch memory, stamped with the current time.
    ///
    /// Keys are unique; writing an existing key overwrites it.
    pub fn remember(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.memory.insert(key.into(), MemoryEntry::new(value));
    }

    /// Look up a remembered value. `None` means the key was never stored
    /// (or has been forgotten); this is not an error.
    pub fn recall(&self, key: &str) -> Option<&serde_json::Value> {
        self.memory.get(key).map(|entry| &entry.value)
    }

    /// Drop everything in scratch memory.
    pub fn forget_all(&mut self) {
        self.memory.clear();
    }

    // --- Transcript ---

    /// Read access to the full conversation history.
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Empty the transcript.
    pub fn clear_history(&mut self) {
        self.transcript.clear();
    }

    /// Counts over the transcript.
    pub fn stats(&self) -> SessionStats {
        let user_count = self
            .transcript
            .iter()
            .filter(|t| t.role == Role::User)
            .count();
        let assistant_count = self
            .transcript
            .iter()
            .filter(|t| t.role == Role::Assistant)
            .count();
        SessionStats {
            total: self.transcript.len(),
            user_count,
            assistant_count,
        }
    }

    // --- Remote calls ---

    /// Send a user message and return the assistant's reply.
    ///
    /// On success exactly two turns are appended to the transcript (the
    /// user turn, then the assistant turn). On failure only the user
    /// turn is appended and remains: retrying `send` with the same text
    /// will duplicate it in the transcript. That asymmetry is inherited
    /// behavior and deliberate — callers that need exactly-once appends
    /// must clear or inspect the transcript themselves.
    #[instrument(skip(self, user_text), fields(client = self.client.name(), model = %self.config.model))]
    pub async fn send(&mut self, user_text: impl Into<String>) -> Result<String, SessionError> {
        self.transcript.push(Turn::user(user_text));

        // Window as a slice view over the transcript, not a copy.
        let start = self.transcript.len().saturating_sub(HISTORY_WINDOW);
        let window = &self.transcript[start..];

        let mut messages = Vec::with_capacity(window.len() + 1);
        messages.push(Turn::system(self.persona_instruction.clone()));
        messages.extend_from_slice(window);

        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: Some(self.config.temperature),
            max_tokens: self.config.max_output_tokens,
        };

        let response = self.client.complete(&request).await?;
        debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "completion received"
        );

        self.transcript.push(Turn::assistant(response.content.clone()));
        Ok(response.content)
    }

    /// Summarize the conversation so far in a few sentences.
    ///
    /// Sends the entire transcript (not the bounded window) plus a fixed
    /// instruction turn, at a low fixed temperature and a small output
    /// cap. The transcript itself is not mutated. With fewer than two
    /// turns this returns [`EMPTY_SUMMARY`] without touching the remote
    /// service.
    #[instrument(skip(self), fields(client = self.client.name(), turns = self.transcript.len()))]
    pub async fn summarize(&self) -> Result<String, SessionError> {
        if self.transcript.len() < 2 {
            return Ok(EMPTY_SUMMARY.to_string());
        }

        let mut messages = Vec::with_capacity(self.transcript.len() + 2);
        messages.push(Turn::system(self.persona_instruction.clone()));
        messages.extend_from_slice(&self.transcript);
        messages.push(Turn::user(SUMMARY_PROMPT));

        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: Some(SUMMARY_TEMPERATURE),
            max_tokens: SUMMARY_MAX_TOKENS,
        };

        let response = self.client.complete(&request).await?;
        Ok(response.content)
    }
}
