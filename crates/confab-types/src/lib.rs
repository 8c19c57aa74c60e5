//! Shared domain types for confab.
//!
//! This crate has no I/O and no infrastructure dependencies. Everything
//! here is plain data: conversation turns, completion request/response
//! shapes, session configuration, settings, and error enums.

pub mod completion;
pub mod error;
pub mod session;
pub mod settings;
