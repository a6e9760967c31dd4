//! Persona domain module.
//!
//! Contains the persona configuration models, the store interface, and the
//! built-in preset configurations.
//!
//! # Module Structure
//!
//! - `model`: configuration records (`PersonaConfig` and its sections)
//! - `store`: storage trait for persona lookup and persistence
//! - `preset`: built-in demo personas

mod model;
mod preset;
mod store;

// Re-export public API
pub use model::{
    PersonaBoundaries, PersonaConfig, PersonaMemory, PersonaQa, PersonaStyle, PinnedQa,
};
pub use preset::get_default_presets;
pub use store::PersonaStore;
