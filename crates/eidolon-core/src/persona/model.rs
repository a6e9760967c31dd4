//! Persona configuration domain model.
//!
//! A persona is a named, configured identity (tone, biography, boundaries,
//! canned answers) that conversational responses are generated "as". The
//! records here mirror the persona configuration file one-to-one: required
//! sections are required by serde, list-valued leaves default to empty.

use crate::error::{PersonaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Communication style and tone of a persona.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PersonaStyle {
    /// General tone of responses
    pub tone: String,
    /// Formality level (casual, neutral, formal)
    pub register: String,
    /// Short stylistic quirks to sprinkle in
    #[serde(default)]
    pub quirks: Vec<String>,
}

/// Safe topics and refusal strategy of a persona.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaBoundaries {
    /// Topics the persona is comfortable discussing
    #[serde(default)]
    pub safe_topics: Vec<String>,
    /// Topics to steer away from
    #[serde(default)]
    pub avoid_topics: Vec<String>,
    /// Stock refusal lines for avoided topics
    #[serde(default)]
    pub refusals: Vec<String>,
}

/// Core biographical and professional information.
///
/// Field order matters for serialization: `projects` renders as a TOML
/// table and must come after the plain values.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PersonaMemory {
    /// Brief personal/professional biography
    pub bio: String,
    /// Concise professional summary
    pub elevator_pitch: String,
    /// Key accomplishments
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Certifications and qualifications
    #[serde(default)]
    pub certs: Vec<String>,
    /// Project name to description mapping
    #[serde(default)]
    pub projects: BTreeMap<String, String>,
}

/// An author-curated question/answer pair the persona prefers over
/// generated text when the incoming question resembles it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PinnedQa {
    pub q: String,
    pub a: String,
}

/// Pinned Q&A pairs, kept in declaration order.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaQa {
    #[serde(default)]
    pub pinned: Vec<PinnedQa>,
}

/// Complete persona configuration.
///
/// Loaded from a per-persona TOML file and validated eagerly; instances are
/// never mutated after load (a reload produces a fresh value that replaces
/// the cached one).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PersonaConfig {
    /// Unique persona identifier (also the configuration file stem)
    pub id: String,
    /// Human-readable name for the persona
    pub display_name: String,
    /// TTS voice identifier for speech synthesis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts_voice: Option<String>,
    /// Communication style configuration
    pub style: PersonaStyle,
    /// Content boundaries
    pub boundaries: PersonaBoundaries,
    /// Biographical and professional information
    pub memory: PersonaMemory,
    /// Pinned Q&A responses
    pub qa: PersonaQa,
}

impl PersonaConfig {
    /// Validates invariants serde cannot express.
    ///
    /// Structural completeness (present sections, field types) is already
    /// enforced during deserialization; this rejects semantically empty
    /// identifiers so a broken file fails at load time, not mid-response.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(PersonaError::config("persona id must not be empty"));
        }
        if self.display_name.trim().is_empty() {
            return Err(PersonaError::config(format!(
                "persona '{}' has an empty display_name",
                self.id
            )));
        }
        Ok(())
    }
}
