//! SQLite-backed persistence.

pub mod archive;
pub mod pool;
