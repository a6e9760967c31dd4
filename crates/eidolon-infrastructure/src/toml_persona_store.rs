//! TOML-backed PersonaStore implementation.
//!
//! Directory structure:
//! ```text
//! base_dir/
//! ├── <persona-id-1>.toml
//! ├── <persona-id-2>.toml
//! └── <persona-id-3>.toml
//! ```
//!
//! Responsibilities:
//! - Load/save persona configuration files, one persona per file
//! - Validate eagerly on load; never cache a partial result
//! - Keep validated configurations in the injected [`PersonaCache`]
//!
//! Does NOT:
//! - Decide which persona answers a request (that is the responder's job)
//! - Watch the directory for changes (callers use `reload`/`clear_cache`)

use crate::cache::PersonaCache;
use eidolon_core::error::{PersonaError, Result};
use eidolon_core::persona::{PersonaConfig, PersonaStore, get_default_presets};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// A [`PersonaStore`] that keeps each persona in a TOML file under a base
/// directory, with a read-through cache.
pub struct TomlPersonaStore {
    base_dir: PathBuf,
    cache: PersonaCache,
}

impl TomlPersonaStore {
    /// Creates a store rooted at the default persona directory
    /// (`~/.config/eidolon/personas`).
    pub fn new(cache: PersonaCache) -> Result<Self> {
        let base_dir = Self::default_persona_dir()?;
        Ok(Self::with_dir(base_dir, cache))
    }

    /// Creates a store rooted at a custom directory (for testing).
    pub fn with_dir(base_dir: impl Into<PathBuf>, cache: PersonaCache) -> Self {
        Self {
            base_dir: base_dir.into(),
            cache,
        }
    }

    /// Gets the default persona directory (~/.config/eidolon/personas)
    fn default_persona_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("eidolon").join("personas"))
            .ok_or_else(|| PersonaError::config("cannot find config directory"))
    }

    fn persona_path(&self, persona_id: &str) -> PathBuf {
        self.base_dir.join(format!("{persona_id}.toml"))
    }

    /// Reads and validates a persona file, without touching the cache.
    fn read_persona(&self, persona_id: &str) -> Result<PersonaConfig> {
        let path = self.persona_path(persona_id);
        if !path.exists() {
            return Err(PersonaError::not_found("persona", persona_id));
        }

        let raw = fs::read_to_string(&path)?;
        let persona: PersonaConfig = toml::from_str(&raw)?;
        persona.validate()?;
        if persona.id != persona_id {
            return Err(PersonaError::config(format!(
                "persona file '{}' declares id '{}'",
                path.display(),
                persona.id
            )));
        }

        Ok(persona)
    }

    /// Warms the cache for commonly used personas. Failures are logged and
    /// skipped; a missing id is not an error at startup.
    pub fn preload(&self, persona_ids: &[&str]) {
        for persona_id in persona_ids {
            match self.load(persona_id) {
                Ok(_) => tracing::info!("pre-loaded persona: {}", persona_id),
                Err(e) => tracing::warn!("failed to pre-load persona '{}': {}", persona_id, e),
            }
        }
    }

    /// Writes every built-in preset whose file does not exist yet.
    ///
    /// Idempotent; an operator-edited preset file is never overwritten.
    pub fn install_presets(&self) -> Result<()> {
        for preset in get_default_presets() {
            if self.persona_path(&preset.id).exists() {
                tracing::debug!("preset persona '{}' already installed", preset.id);
                continue;
            }
            self.save(&preset)?;
            tracing::info!("installed preset persona: {}", preset.id);
        }
        Ok(())
    }
}

impl PersonaStore for TomlPersonaStore {
    fn load(&self, persona_id: &str) -> Result<Arc<PersonaConfig>> {
        if let Some(cached) = self.cache.get(persona_id) {
            tracing::debug!("returning cached persona: {}", persona_id);
            return Ok(cached);
        }

        let persona = Arc::new(self.read_persona(persona_id)?);
        self.cache.insert(persona_id, persona.clone());
        tracing::info!("loaded persona: {}", persona_id);
        Ok(persona)
    }

    fn list_available(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.base_dir) {
            Ok(entries) => entries,
            Err(_) => {
                tracing::warn!(
                    "persona directory does not exist: {}",
                    self.base_dir.display()
                );
                return Vec::new();
            }
        };

        let mut persona_ids: Vec<String> = entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
                    return None;
                }
                Some(path.file_stem()?.to_str()?.to_string())
            })
            .collect();
        persona_ids.sort();
        persona_ids
    }

    fn reload(&self, persona_id: &str) -> Result<Arc<PersonaConfig>> {
        self.cache.evict(persona_id);
        tracing::info!("evicted cached persona: {}", persona_id);
        self.load(persona_id)
    }

    fn clear_cache(&self) {
        self.cache.clear();
        tracing::info!("cleared persona cache");
    }

    fn save(&self, persona: &PersonaConfig) -> Result<()> {
        persona.validate()?;
        fs::create_dir_all(&self.base_dir)?;

        let raw = toml::to_string_pretty(persona)?;
        fs::write(self.persona_path(&persona.id), raw)?;

        // The next load must observe the written state, not a stale entry.
        self.cache.evict(&persona.id);
        tracing::info!("saved persona: {}", persona.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> TomlPersonaStore {
        TomlPersonaStore::with_dir(temp_dir.path(), PersonaCache::new())
    }

    fn sample_persona() -> PersonaConfig {
        get_default_presets().remove(0)
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let persona = sample_persona();

        store.save(&persona).expect("Should save persona");
        let loaded = store.load(&persona.id).expect("Should load persona");

        assert_eq!(*loaded, persona);
    }

    #[test]
    fn test_load_unknown_persona_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let err = store.load("ghost").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(temp_dir.path().join("broken.toml"), "id = [unclosed").unwrap();

        let err = store.load("broken").unwrap_err();
        assert!(err.is_serialization());
        // A failed load must not poison the cache.
        assert!(store.load("broken").is_err());
    }

    #[test]
    fn test_incomplete_file_fails_validation() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        // Parses as TOML but misses required persona sections.
        fs::write(
            temp_dir.path().join("thin.toml"),
            "id = \"thin\"\ndisplay_name = \"Thin\"\n",
        )
        .unwrap();

        let err = store.load("thin").unwrap_err();
        assert!(err.is_serialization() || err.is_config());
    }

    #[test]
    fn test_id_mismatch_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let mut persona = sample_persona();
        persona.id = "somebody-else".to_string();
        let raw = toml::to_string_pretty(&persona).unwrap();
        fs::write(temp_dir.path().join("alias.toml"), raw).unwrap();

        let err = store.load("alias").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_load_serves_cached_value_until_reload() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let mut persona = sample_persona();
        store.save(&persona).unwrap();

        let first = store.load(&persona.id).unwrap();

        // Rewrite the file behind the store's back.
        persona.display_name = "Renamed".to_string();
        let raw = toml::to_string_pretty(&persona).unwrap();
        fs::write(temp_dir.path().join(format!("{}.toml", persona.id)), raw).unwrap();

        // Cached value still served...
        let cached = store.load(&persona.id).unwrap();
        assert_eq!(cached.display_name, first.display_name);

        // ...until an explicit reload replaces it.
        let reloaded = store.reload(&persona.id).unwrap();
        assert_eq!(reloaded.display_name, "Renamed");
    }

    #[test]
    fn test_clear_cache_forces_reread() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let mut persona = sample_persona();
        store.save(&persona).unwrap();
        store.load(&persona.id).unwrap();

        persona.display_name = "Fresh".to_string();
        let raw = toml::to_string_pretty(&persona).unwrap();
        fs::write(temp_dir.path().join(format!("{}.toml", persona.id)), raw).unwrap();

        store.clear_cache();
        assert_eq!(store.load(&persona.id).unwrap().display_name, "Fresh");
    }

    #[test]
    fn test_list_available_is_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        for id in ["zeta", "alpha", "mid"] {
            let mut persona = sample_persona();
            persona.id = id.to_string();
            store.save(&persona).unwrap();
        }
        // Non-TOML files are ignored.
        fs::write(temp_dir.path().join("notes.txt"), "not a persona").unwrap();

        assert_eq!(store.list_available(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_list_available_missing_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = TomlPersonaStore::with_dir(
            temp_dir.path().join("does-not-exist"),
            PersonaCache::new(),
        );
        assert!(store.list_available().is_empty());
    }

    #[test]
    fn test_install_presets_is_idempotent_and_preserves_edits() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.install_presets().unwrap();
        let installed = store.list_available();
        assert!(!installed.is_empty());

        // Edit one preset on disk, then install again.
        let first_id = installed[0].clone();
        let mut edited = store.load(&first_id).unwrap().as_ref().clone();
        edited.display_name = "Edited By Operator".to_string();
        store.save(&edited).unwrap();

        store.install_presets().unwrap();
        assert_eq!(
            store.reload(&first_id).unwrap().display_name,
            "Edited By Operator"
        );
    }

    #[test]
    fn test_preload_is_best_effort() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let persona = sample_persona();
        store.save(&persona).unwrap();

        // One real id, one missing id: must not panic or error.
        store.preload(&[persona.id.as_str(), "missing"]);
        assert!(store.cache.get(&persona.id).is_some());
        assert!(store.cache.get("missing").is_none());
    }

    #[test]
    fn test_save_rejects_invalid_persona() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let mut persona = sample_persona();
        persona.id = String::new();

        assert!(store.save(&persona).is_err());
        assert!(store.list_available().is_empty());
    }
}
