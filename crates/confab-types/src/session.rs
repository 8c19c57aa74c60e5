//! Session-level data shapes: sampling configuration, memory entries,
//! and transcript statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default model identifier used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Default cap on generated output length.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2000;

/// Parameters controlling the randomness and length of generated output.
///
/// `temperature` is always clamped into `[0, 2]` on write; an
/// out-of-range value is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub model: String,
}

impl SamplingConfig {
    /// Clamp a raw temperature into the valid `[0, 2]` range.
    pub fn clamp_temperature(raw: f64) -> f64 {
        raw.clamp(0.0, 2.0)
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// A single value in the session's scratch key-value memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub value: serde_json::Value,
    pub recorded_at: DateTime<Utc>,
}

impl MemoryEntry {
    pub fn new(value: serde_json::Value) -> Self {
        Self {
            value,
            recorded_at: Utc::now(),
        }
    }
}

/// Counts over a session transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total: usize,
    pub user_count: usize,
    pub assistant_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_config_defaults() {
        let config = SamplingConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.max_output_tokens, 2000);
    }

    #[test]
    fn test_clamp_temperature() {
        assert_eq!(SamplingConfig::clamp_temperature(-1.0), 0.0);
        assert_eq!(SamplingConfig::clamp_temperature(0.0), 0.0);
        assert_eq!(SamplingConfig::clamp_temperature(1.3), 1.3);
        assert_eq!(SamplingConfig::clamp_temperature(2.0), 2.0);
        assert_eq!(SamplingConfig::clamp_temperature(9.5), 2.0);
    }

    #[test]
    fn test_memory_entry_carries_timestamp() {
        let entry = MemoryEntry::new(serde_json::json!("Flask web app"));
        assert_eq!(entry.value, serde_json::json!("Flask web app"));
        assert!(entry.recorded_at <= Utc::now());
    }
}
