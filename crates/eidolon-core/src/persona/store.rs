//! Persona store trait.
//!
//! Defines the interface for persona configuration lookup and persistence.

use super::model::PersonaConfig;
use crate::error::Result;
use std::sync::Arc;

/// An abstract store for persona configurations.
///
/// This trait defines the contract for loading and persisting personas,
/// decoupling prompt assembly and response generation from the specific
/// storage mechanism (e.g., TOML files, database, remote API).
///
/// Loaded configurations are immutable value objects handed out as
/// `Arc<PersonaConfig>`; implementations are expected to cache them and may
/// let concurrent loads race (last write wins), since loads are cheap and
/// idempotent.
pub trait PersonaStore: Send + Sync {
    /// Retrieves the persona with the given id, reading it from storage on
    /// first access and from the cache afterwards.
    ///
    /// # Returns
    ///
    /// - `Ok(Arc<PersonaConfig>)`: the validated configuration
    /// - `Err(PersonaError::NotFound)`: no such persona exists
    /// - `Err(_)`: the configuration exists but is malformed or invalid;
    ///   nothing is cached in that case
    fn load(&self, persona_id: &str) -> Result<Arc<PersonaConfig>>;

    /// Lists the ids of all personas currently available in storage,
    /// sorted. An empty storage location yields an empty list.
    fn list_available(&self) -> Vec<String>;

    /// Reloads a persona from storage, bypassing and replacing any cached
    /// entry.
    fn reload(&self, persona_id: &str) -> Result<Arc<PersonaConfig>>;

    /// Drops every cached persona. Subsequent loads re-read storage.
    fn clear_cache(&self);

    /// Persists a persona configuration, replacing any existing one with
    /// the same id. The cached entry for that id is evicted so the next
    /// load observes the written state.
    fn save(&self, persona: &PersonaConfig) -> Result<()>;
}
