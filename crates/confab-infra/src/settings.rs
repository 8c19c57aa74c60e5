//! Settings loader.
//!
//! Reads `config.toml` from the data directory and deserializes it into
//! [`Settings`]. Falls back to defaults when the file is missing or
//! malformed — a bad config file never prevents startup.

use std::path::{Path, PathBuf};

use confab_types::settings::Settings;

/// Resolve the data directory: `CONFAB_DATA_DIR` if set, else `~/.confab`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CONFAB_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".confab")
}

/// Default SQLite database URL under the data directory.
pub fn default_database_url(data_dir: &Path) -> String {
    format!("sqlite://{}/confab.db?mode=rwc", data_dir.display())
}

/// Load settings from `{data_dir}/config.toml`.
pub async fn load_settings(data_dir: &Path) -> Settings {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config.toml at {}, using defaults", config_path.display());
            return Settings::default();
        }
        Err(err) => {
            tracing::warn!("failed to read {}: {err}, using defaults", config_path.display());
            return Settings::default();
        }
    };

    match toml::from_str::<Settings>(&content) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(
                "failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_settings_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let settings = load_settings(tmp.path()).await;
        assert_eq!(settings.server.bind, "127.0.0.1:5000");
    }

    #[tokio::test]
    async fn load_settings_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
[server]
bind = "0.0.0.0:8080"

[chat]
model = "gpt-4o"
temperature = 0.2
"#,
        )
        .await
        .unwrap();

        let settings = load_settings(tmp.path()).await;
        assert_eq!(settings.server.bind, "0.0.0.0:8080");
        assert_eq!(settings.chat.model, "gpt-4o");
        assert!((settings.chat.temperature - 0.2).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn load_settings_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let settings = load_settings(tmp.path()).await;
        assert_eq!(settings.chat.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_default_database_url() {
        let url = default_database_url(Path::new("/tmp/confab"));
        assert_eq!(url, "sqlite:///tmp/confab/confab.db?mode=rwc");
    }
}
