//! Storage implementations for the Eidolon persona engine.

pub mod cache;
pub mod toml_persona_store;

pub use crate::cache::PersonaCache;
pub use crate::toml_persona_store::TomlPersonaStore;
