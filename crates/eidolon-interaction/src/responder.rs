//! Persona response generation.
//!
//! The responder ties the store, prompt assembly, and pinned Q&A matching
//! together. It fronts a conversational surface, so it fails soft: every
//! path produces a response, and errors come back as apology-shaped
//! answers rather than propagating to the caller.

use crate::prompt::build_system_prompt;
use crate::qa::find_matching_pinned_qa;
use eidolon_core::persona::{PersonaConfig, PersonaStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Assembled prompts echoed back for debugging are truncated to this many
/// characters.
const PROMPT_PREVIEW_CHARS: usize = 200;

/// The response shape handed to the transport layer, serialized as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PersonaResponse {
    pub answer: String,
    pub persona_id: String,
    pub persona_name: String,
    pub tts_voice: Option<String>,
    pub matched_qa: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt_preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Service generating conversational responses as a configured persona.
pub struct PersonaResponder {
    store: Arc<dyn PersonaStore>,
}

impl PersonaResponder {
    pub fn new(store: Arc<dyn PersonaStore>) -> Self {
        Self { store }
    }

    /// Generates a response as the given persona.
    ///
    /// Never fails. An unknown persona id yields an answer listing the
    /// currently available ids; any other store error yields an apology
    /// carrying the error text for diagnostics. The `context` argument is
    /// part of the transport contract but does not currently influence
    /// generation.
    pub fn respond(&self, persona_id: &str, user_input: &str, _context: &str) -> PersonaResponse {
        match self.store.load(persona_id) {
            Ok(persona) => self.respond_as(&persona, user_input),
            Err(err) if err.is_not_found() => {
                tracing::error!("persona not found: {}", persona_id);
                let available = self.store.list_available();
                PersonaResponse {
                    answer: format!(
                        "Sorry, I couldn't find the persona '{}'. Available personas: {}",
                        persona_id,
                        available.join(", ")
                    ),
                    persona_id: persona_id.to_string(),
                    persona_name: "Unknown".to_string(),
                    tts_voice: None,
                    matched_qa: false,
                    system_prompt_preview: None,
                    error: Some("persona not found".to_string()),
                }
            }
            Err(err) => {
                tracing::error!("error generating persona response: {}", err);
                PersonaResponse {
                    answer: format!("I'm having trouble processing that request. Error: {err}"),
                    persona_id: persona_id.to_string(),
                    persona_name: "Error".to_string(),
                    tts_voice: None,
                    matched_qa: false,
                    system_prompt_preview: None,
                    error: Some(err.to_string()),
                }
            }
        }
    }

    fn respond_as(&self, persona: &PersonaConfig, user_input: &str) -> PersonaResponse {
        let system_prompt = build_system_prompt(persona, None);
        let matched = find_matching_pinned_qa(persona, user_input);

        let answer = match matched {
            // The pinned answer is author-curated; return it verbatim.
            Some(pinned) => pinned.a.clone(),
            None => contextual_response(persona, user_input),
        };

        PersonaResponse {
            answer,
            persona_id: persona.id.clone(),
            persona_name: persona.display_name.clone(),
            tts_voice: persona.tts_voice.clone(),
            matched_qa: matched.is_some(),
            system_prompt_preview: Some(truncate_preview(&system_prompt)),
            error: None,
        }
    }
}

fn truncate_preview(prompt: &str) -> String {
    if prompt.chars().count() > PROMPT_PREVIEW_CHARS {
        let head: String = prompt.chars().take(PROMPT_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        prompt.to_string()
    }
}

fn first_sentence(text: &str) -> &str {
    text.split('.').next().unwrap_or(text)
}

/// Templated fallback when no pinned pair matches: scan project names,
/// then certifications, then the generic about-you buckets, and finally
/// fall back to the elevator pitch with the leading project names.
fn contextual_response(persona: &PersonaConfig, user_input: &str) -> String {
    let user_lower = user_input.to_lowercase();

    for (name, description) in &persona.memory.projects {
        if user_lower.contains(&name.to_lowercase()) {
            return format!(
                "Great question about {name}! {description}. I built this because I believe in {}.",
                first_sentence(&persona.memory.elevator_pitch).to_lowercase()
            );
        }
    }

    if persona
        .memory
        .certs
        .iter()
        .any(|cert| user_lower.contains(&cert.to_lowercase()))
    {
        return format!(
            "Yes, I'm certified in {}. These certifications are crucial for the work I do in {}.",
            persona.memory.certs.join(", "),
            first_sentence(&persona.memory.bio).to_lowercase()
        );
    }

    if ["who", "about", "tell me", "background"]
        .iter()
        .any(|word| user_lower.contains(word))
    {
        let highlights: Vec<&str> = persona
            .memory
            .highlights
            .iter()
            .take(2)
            .map(String::as_str)
            .collect();
        return format!(
            "{} Some highlights of my work include: {}.",
            persona.memory.elevator_pitch,
            highlights.join("; ")
        );
    }

    let project_names: Vec<&str> = persona
        .memory
        .projects
        .keys()
        .take(2)
        .map(String::as_str)
        .collect();
    format!(
        "That's an interesting question! {}. I'd be happy to discuss how this relates to my work with {}.",
        first_sentence(&persona.memory.bio),
        project_names.join(", ")
    )
}
