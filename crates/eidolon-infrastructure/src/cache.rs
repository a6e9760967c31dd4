//! Shared persona cache.

use eidolon_core::persona::PersonaConfig;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Concurrency-safe cache of loaded persona configurations.
///
/// Owned by the application's composition root and injected into stores,
/// so cache lifetime and invalidation stay explicit and testable. Cached
/// values are immutable (`Arc<PersonaConfig>`); concurrent populations of
/// the same key may race, and the last write wins, which is acceptable
/// because loads are cheap and idempotent.
#[derive(Debug, Clone, Default)]
pub struct PersonaCache {
    entries: Arc<RwLock<HashMap<String, Arc<PersonaConfig>>>>,
}

impl PersonaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached persona for `persona_id`, if any.
    pub fn get(&self, persona_id: &str) -> Option<Arc<PersonaConfig>> {
        self.entries.read().unwrap().get(persona_id).cloned()
    }

    /// Inserts or replaces the cached persona for `persona_id`.
    pub fn insert(&self, persona_id: &str, persona: Arc<PersonaConfig>) {
        self.entries
            .write()
            .unwrap()
            .insert(persona_id.to_string(), persona);
    }

    /// Removes the cached persona for `persona_id`, if present.
    pub fn evict(&self, persona_id: &str) {
        self.entries.write().unwrap().remove(persona_id);
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }

    /// Number of cached personas.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eidolon_core::persona::get_default_presets;

    #[test]
    fn test_insert_get_evict() {
        let cache = PersonaCache::new();
        let persona = Arc::new(get_default_presets().remove(0));

        assert!(cache.get(&persona.id).is_none());

        cache.insert(&persona.id, persona.clone());
        let cached = cache.get(&persona.id).expect("cached entry");
        assert_eq!(cached.display_name, persona.display_name);
        assert_eq!(cache.len(), 1);

        cache.evict(&persona.id);
        assert!(cache.get(&persona.id).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = PersonaCache::new();
        let clone = cache.clone();
        let persona = Arc::new(get_default_presets().remove(0));

        cache.insert(&persona.id, persona.clone());
        assert!(clone.get(&persona.id).is_some());

        clone.clear();
        assert!(cache.is_empty());
    }
}
