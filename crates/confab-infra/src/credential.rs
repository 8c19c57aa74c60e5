//! API credential loading from the environment.
//!
//! The key is read once at construction time and handed to each client
//! explicitly — there is no process-wide credential — so sessions with
//! different keys can coexist and tests can inject fakes.

use secrecy::SecretString;

use confab_types::error::ConfigError;

/// Environment variable holding the completion provider API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Read the provider API key from the environment.
///
/// A missing or non-Unicode variable is a fatal initialization error:
/// no client is constructed without a credential.
pub fn api_key_from_env() -> Result<SecretString, ConfigError> {
    match std::env::var(API_KEY_VAR) {
        Ok(val) if !val.is_empty() => Ok(SecretString::from(val)),
        Ok(_) => Err(ConfigError::MissingApiKey(API_KEY_VAR)),
        Err(_) => Err(ConfigError::MissingApiKey(API_KEY_VAR)),
    }
}
