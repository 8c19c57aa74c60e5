//! Application settings deserialized from `config.toml`.

use serde::{Deserialize, Serialize};

use crate::session::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// Top-level settings for the `confab` binary.
///
/// Loaded from `{data_dir}/config.toml`; every field has a default so a
/// missing or partial file still yields a usable configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub chat: ChatSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Socket address the server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

/// Default sampling parameters for new sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSettings {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_output_tokens() -> u32 {
    DEFAULT_MAX_OUTPUT_TOKENS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.server.bind, "127.0.0.1:5000");
        assert_eq!(settings.chat.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_settings_partial_toml() {
        let settings: Settings = toml::from_str(
            r#"
[chat]
model = "gpt-4o"
"#,
        )
        .unwrap();
        assert_eq!(settings.chat.model, "gpt-4o");
        // Unspecified fields fall back to defaults
        assert_eq!(settings.chat.max_output_tokens, 2000);
        assert_eq!(settings.server.bind, "127.0.0.1:5000");
    }

    #[test]
    fn test_settings_empty_toml() {
        let settings: Settings = toml::from_str("").unwrap();
        assert!((settings.chat.temperature - 0.7).abs() < f64::EPSILON);
    }
}
