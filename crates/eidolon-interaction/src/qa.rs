//! Pinned Q&A matching.

use eidolon_core::persona::{PersonaConfig, PinnedQa};

/// Finds the pinned Q&A pair the user input most plausibly refers to.
///
/// The test is keyword overlap: a pair matches when any whitespace token of
/// its question longer than three characters appears as a substring of the
/// lower-cased input. Pairs are checked in declaration order and the first
/// match wins, so this is first-match, not best-match.
///
/// Known limitation, kept on purpose: a short or generic pinned question
/// (one containing "work", say) can match largely unrelated input. Demo
/// scenarios depend on the current behavior, so tightening the criteria is
/// a product decision, not a code cleanup.
pub fn find_matching_pinned_qa<'a>(
    persona: &'a PersonaConfig,
    user_input: &str,
) -> Option<&'a PinnedQa> {
    let user_input_lower = user_input.to_lowercase();

    persona.qa.pinned.iter().find(|pair| {
        pair.q
            .to_lowercase()
            .split_whitespace()
            .any(|word| word.chars().count() > 3 && user_input_lower.contains(word))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eidolon_core::persona::{
        PersonaBoundaries, PersonaMemory, PersonaQa, PersonaStyle, PinnedQa,
    };
    use std::collections::BTreeMap;

    fn persona_with_pinned(pinned: Vec<PinnedQa>) -> PersonaConfig {
        PersonaConfig {
            id: "pinned-test".to_string(),
            display_name: "Pinned Test".to_string(),
            style: PersonaStyle {
                tone: "Flat".to_string(),
                register: "neutral".to_string(),
                quirks: Vec::new(),
            },
            boundaries: PersonaBoundaries::default(),
            memory: PersonaMemory {
                bio: "Bio.".to_string(),
                elevator_pitch: "Pitch.".to_string(),
                highlights: Vec::new(),
                projects: BTreeMap::new(),
                certs: Vec::new(),
            },
            qa: PersonaQa { pinned },
            tts_voice: None,
        }
    }

    fn pair(q: &str, a: &str) -> PinnedQa {
        PinnedQa {
            q: q.to_string(),
            a: a.to_string(),
        }
    }

    #[test]
    fn test_keyword_overlap_matches() {
        let persona = persona_with_pinned(vec![pair(
            "What is the Anchor project?",
            "Anchor is the project.",
        )]);
        let matched = find_matching_pinned_qa(&persona, "tell me about anchor").unwrap();
        assert_eq!(matched.a, "Anchor is the project.");
    }

    #[test]
    fn test_first_declared_pair_wins_on_double_match() {
        let persona = persona_with_pinned(vec![
            pair("Where do you work these days?", "First answer."),
            pair("What kind of work do you do?", "Second answer."),
        ]);
        // "work" satisfies both pairs; declaration order decides.
        let matched = find_matching_pinned_qa(&persona, "how is work going").unwrap();
        assert_eq!(matched.a, "First answer.");
    }

    #[test]
    fn test_no_match_returns_none() {
        let persona = persona_with_pinned(vec![pair("What is Anchor?", "Anchor answer.")]);
        assert!(find_matching_pinned_qa(&persona, "how are you today").is_none());
    }

    #[test]
    fn test_short_words_are_ignored() {
        // Every token is <= 3 characters (or punctuation-extended past an
        // exact match), so nothing can trigger.
        let persona = persona_with_pinned(vec![pair("Is it ok?", "Short answer.")]);
        assert!(find_matching_pinned_qa(&persona, "is it ok").is_none());
    }

    #[test]
    fn test_generic_words_match_broadly() {
        // The permissive overlap rule: "work" in a pinned question matches
        // any input that merely mentions working.
        let persona = persona_with_pinned(vec![pair("What do you do for work", "I do.")]);
        assert!(find_matching_pinned_qa(&persona, "I was working late yesterday").is_some());
    }

    #[test]
    fn test_empty_pinned_list_never_matches() {
        let persona = persona_with_pinned(Vec::new());
        assert!(find_matching_pinned_qa(&persona, "anything at all").is_none());
    }
}
