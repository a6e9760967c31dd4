//! Prompt assembly and response generation for the Eidolon persona engine.

pub mod prompt;
pub mod qa;
pub mod responder;

pub use crate::prompt::{bio_prompt_variants, build_profile_prompt, build_system_prompt};
pub use crate::qa::find_matching_pinned_qa;
pub use crate::responder::{PersonaResponder, PersonaResponse};
