//! Structured biographical facts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Structured facts mechanically extracted from free-text autobiographical
/// input.
///
/// Every field defaults to an empty collection (or empty string for
/// `profession`); extraction never fails, it simply leaves unmatched
/// categories empty. Set-valued fields are deduplicated.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BiographicalInsights {
    /// Names the person is called by friends and family, title-cased
    #[serde(default)]
    pub nicknames: BTreeSet<String>,
    /// Family members as `"<relation>: <Name>"` (children as `"child: <Name>"`)
    #[serde(default)]
    pub family_members: BTreeSet<String>,
    /// Single job title, possibly empty
    #[serde(default)]
    pub profession: String,
    /// Title-cased place names
    #[serde(default)]
    pub locations: BTreeSet<String>,
    /// Adjectives drawn from a fixed vocabulary
    #[serde(default)]
    pub personality_descriptors: BTreeSet<String>,
    /// Title-cased hobby and interest phrases
    #[serde(default)]
    pub hobbies_interests: BTreeSet<String>,
    /// Free-text fragments captured by numeric/date/event patterns,
    /// original casing preserved
    #[serde(default)]
    pub important_facts: BTreeSet<String>,
}

impl BiographicalInsights {
    /// True when no category captured anything.
    pub fn is_empty(&self) -> bool {
        self.nicknames.is_empty()
            && self.family_members.is_empty()
            && self.profession.is_empty()
            && self.locations.is_empty()
            && self.personality_descriptors.is_empty()
            && self.hobbies_interests.is_empty()
            && self.important_facts.is_empty()
    }
}
