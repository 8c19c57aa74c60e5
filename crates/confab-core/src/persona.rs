//! Preset personas for common use cases.
//!
//! A persona is a fixed system instruction plus a temperature. Presets
//! carry no other state; building a session from one always yields a
//! fresh, independent session.

use std::fmt;
use std::str::FromStr;

use confab_types::session::DEFAULT_TEMPERATURE;

/// Pre-configured persona presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    CodingAssistant,
    ContentWriter,
    DataAnalyst,
    CreativeWriter,
}

impl Persona {
    /// All available presets, for CLI listings.
    pub const ALL: [Persona; 4] = [
        Persona::CodingAssistant,
        Persona::ContentWriter,
        Persona::DataAnalyst,
        Persona::CreativeWriter,
    ];

    /// The standing system instruction for this preset.
    pub fn instruction(self) -> &'static str {
        match self {
            Persona::CodingAssistant => {
                "You are an expert programming assistant. Help with coding \
                 questions, debugging, and best practices."
            }
            Persona::ContentWriter => {
                "You are a professional content writer. Create engaging, \
                 well-structured, and original content."
            }
            Persona::DataAnalyst => {
                "You are an expert data analyst. Help with data analysis, \
                 visualization, and insights."
            }
            Persona::CreativeWriter => {
                "You are a creative fiction writer. Create engaging stories \
                 and imaginative content."
            }
        }
    }

    /// Sampling temperature for this preset.
    ///
    /// Creative writing runs hotter; everything else uses the default.
    pub fn temperature(self) -> f64 {
        match self {
            Persona::CreativeWriter => 1.0,
            _ => DEFAULT_TEMPERATURE,
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Persona::CodingAssistant => write!(f, "coding"),
            Persona::ContentWriter => write!(f, "writing"),
            Persona::DataAnalyst => write!(f, "analysis"),
            Persona::CreativeWriter => write!(f, "creative"),
        }
    }
}

impl FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coding" => Ok(Persona::CodingAssistant),
            "writing" => Ok(Persona::ContentWriter),
            "analysis" => Ok(Persona::DataAnalyst),
            "creative" => Ok(Persona::CreativeWriter),
            other => Err(format!(
                "unknown persona '{other}' (expected coding, writing, analysis, or creative)"
            )),
        }
    }
}
