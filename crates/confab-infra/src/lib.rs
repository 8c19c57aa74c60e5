//! Infrastructure implementations for confab.
//!
//! Concrete backends for the traits defined in confab-core: the
//! OpenAI-compatible HTTP completion client and the SQLite conversation
//! archive, plus environment credential loading and settings parsing.

pub mod credential;
pub mod openai;
pub mod settings;
pub mod sqlite;
