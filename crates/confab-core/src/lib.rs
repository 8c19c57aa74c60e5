//! Business logic for confab: the session manager, persona presets, and
//! the traits that infrastructure implements.
//!
//! This crate never depends on confab-infra. Concrete HTTP and SQLite
//! implementations plug in through [`client::CompletionClient`] and
//! [`archive::ConversationArchive`].

pub mod archive;
pub mod client;
pub mod persona;
pub mod session;
