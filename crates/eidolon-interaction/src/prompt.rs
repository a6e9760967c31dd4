//! Persona system prompt assembly.
//!
//! Renders a persona configuration (and optionally extracted biographical
//! insights or a text profile) into the instructional prefix handed to a
//! downstream text-generation step. Assembly is deterministic and
//! side-effect free; identical inputs produce byte-identical strings.

use eidolon_core::analysis::TextProfile;
use eidolon_core::insights::BiographicalInsights;
use eidolon_core::persona::PersonaConfig;

/// Lead-in shared by the per-category prompt variants.
const VARIANT_BASE: &str = "You are responding as this person. ";

fn join_first<'a, I>(items: I, limit: usize, separator: &str) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    items
        .into_iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Builds the full persona system prompt.
///
/// Always produces the persona description blocks (identity, style,
/// background, boundaries, guidelines). When `insights` is present and
/// non-empty, a Personal Background section is appended with present-only
/// sub-clauses in a fixed order; absent categories are simply omitted.
pub fn build_system_prompt(
    persona: &PersonaConfig,
    insights: Option<&BiographicalInsights>,
) -> String {
    let quirks = if persona.style.quirks.is_empty() {
        "None specified".to_string()
    } else {
        persona.style.quirks.join("; ")
    };
    let highlights = persona
        .memory
        .highlights
        .iter()
        .map(|h| format!("- {h}"))
        .collect::<Vec<_>>()
        .join("\n");
    let projects = persona
        .memory
        .projects
        .iter()
        .map(|(name, description)| format!("- {name}: {description}"))
        .collect::<Vec<_>>()
        .join("\n");
    let certs = if persona.memory.certs.is_empty() {
        "None listed".to_string()
    } else {
        persona.memory.certs.join(", ")
    };

    let mut prompt = format!(
        "You are {display_name}.\n\
         \n\
         Communication Style:\n\
         - Tone: {tone}\n\
         - Formality: {register}\n\
         - Quirks: {quirks}\n\
         \n\
         Professional Background:\n\
         {bio}\n\
         \n\
         Elevator Pitch:\n\
         {elevator_pitch}\n\
         \n\
         Key Highlights:\n\
         {highlights}\n\
         \n\
         Projects:\n\
         {projects}\n\
         \n\
         Certifications: {certs}\n\
         \n\
         Boundaries:\n\
         - Safe topics: {safe_topics}\n\
         - Avoid discussing: {avoid_topics}\n\
         - If asked about avoided topics, use one of these responses: {refusals}\n\
         \n\
         Guidelines:\n\
         - Answer clearly and concisely\n\
         - Use step-by-step explanations when giving instructions\n\
         - Stay in character and maintain your professional tone\n\
         - When appropriate, reference your projects and experience\n\
         - If a question matches your pinned Q&A, prefer that answer but expand naturally\n",
        display_name = persona.display_name,
        tone = persona.style.tone,
        register = persona.style.register,
        quirks = quirks,
        bio = persona.memory.bio,
        elevator_pitch = persona.memory.elevator_pitch,
        highlights = highlights,
        projects = projects,
        certs = certs,
        safe_topics = persona.boundaries.safe_topics.join(", "),
        avoid_topics = persona.boundaries.avoid_topics.join(", "),
        refusals = persona.boundaries.refusals.join(" / "),
    );

    if let Some(insights) = insights {
        if let Some(section) = personal_background(insights) {
            prompt.push_str(&section);
        }
    }

    prompt
}

/// Renders the Personal Background section, or `None` when every category
/// is empty. Sub-clause order is fixed: nicknames, family, profession,
/// location, personality, hobbies.
fn personal_background(insights: &BiographicalInsights) -> Option<String> {
    let mut clauses: Vec<String> = Vec::new();

    if !insights.nicknames.is_empty() {
        clauses.push(format!(
            "Your loved ones call you {}",
            join_first(&insights.nicknames, 2, ", ")
        ));
    }
    if !insights.family_members.is_empty() {
        clauses.push(format!(
            "Your family includes {}",
            join_first(&insights.family_members, 4, "; ")
        ));
    }
    if !insights.profession.is_empty() {
        clauses.push(format!("You work as a {}", insights.profession));
    }
    if let Some(location) = insights.locations.iter().next() {
        clauses.push(format!("You're from {location}"));
    }
    if !insights.personality_descriptors.is_empty() {
        clauses.push(format!(
            "People describe you as {}",
            join_first(&insights.personality_descriptors, 3, ", ")
        ));
    }
    if !insights.hobbies_interests.is_empty() {
        clauses.push(format!(
            "You enjoy {}",
            join_first(&insights.hobbies_interests, 3, ", ")
        ));
    }

    if clauses.is_empty() {
        return None;
    }

    Some(format!(
        "\nPersonal Background: {}.\n\
         \n\
         When responding, naturally incorporate these personal details when \
         relevant. Use nicknames when appropriate, reference your family and \
         background organically, and let your profession and interests \
         influence your perspective and advice.\n",
        clauses.join(". ")
    ))
}

/// Builds one focused prompt per populated insight category, plus a
/// comprehensive variant combining the strongest details. Returns an empty
/// vec for empty insights.
pub fn bio_prompt_variants(insights: &BiographicalInsights) -> Vec<String> {
    let mut prompts = Vec::new();

    if !insights.nicknames.is_empty() {
        prompts.push(format!(
            "{VARIANT_BASE}Your close friends and family call you {}. \
             Respond warmly and familiarly when someone uses your nickname.",
            join_first(&insights.nicknames, 2, ", ")
        ));
    }
    if !insights.family_members.is_empty() {
        prompts.push(format!(
            "{VARIANT_BASE}Your family includes: {}. \
             Reference your family naturally in conversations when appropriate.",
            join_first(&insights.family_members, 5, "; ")
        ));
    }
    if !insights.profession.is_empty() {
        prompts.push(format!(
            "{VARIANT_BASE}You work as a {}. \
             Draw from your professional experience when discussing work or giving advice.",
            insights.profession
        ));
    }
    if let Some(location) = insights.locations.iter().next() {
        prompts.push(format!(
            "{VARIANT_BASE}You're from {location}. \
             Reference your hometown and local knowledge when relevant."
        ));
    }
    if !insights.personality_descriptors.is_empty() {
        prompts.push(format!(
            "{VARIANT_BASE}Your personality is {}. \
             Let your personality shine through in your responses.",
            join_first(&insights.personality_descriptors, 3, ", ")
        ));
    }
    if !insights.hobbies_interests.is_empty() {
        prompts.push(format!(
            "{VARIANT_BASE}You enjoy {}. \
             Share your enthusiasm for your interests when the topic comes up.",
            join_first(&insights.hobbies_interests, 3, ", ")
        ));
    }

    let mut parts: Vec<String> = Vec::new();
    if let Some(nickname) = insights.nicknames.iter().next() {
        parts.push(format!("called {nickname} by loved ones"));
    }
    if !insights.profession.is_empty() {
        parts.push(format!("work as a {}", insights.profession));
    }
    if !insights.family_members.is_empty() {
        parts.push(format!(
            "have family including {}",
            join_first(&insights.family_members, 2, ", ")
        ));
    }
    if let Some(location) = insights.locations.iter().next() {
        parts.push(format!("from {location}"));
    }
    if !parts.is_empty() {
        prompts.push(format!(
            "{VARIANT_BASE}You {}. Respond authentically based on these personal \
             details, using them naturally in conversation to create meaningful, \
             personalized interactions.",
            parts.join(", ")
        ));
    }

    prompts
}

/// Builds a prompt from a text profile instead of a persona configuration,
/// for identities derived purely from submitted writing.
pub fn build_profile_prompt(profile: &TextProfile, insights: &BiographicalInsights) -> String {
    let mut prompt = format!(
        "You are embodying the personality and communication style of someone \
         who is primarily {} and {}.",
        profile.traits.dominant.prompt_description(),
        profile.patterns.communication_style.prompt_description()
    );

    if let Some(section) = personal_background(insights) {
        prompt.push('\n');
        prompt.push_str(&section);
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use eidolon_core::analysis::analyze_text;
    use eidolon_core::insights::extract_bio_insights;
    use eidolon_core::persona::get_default_presets;

    fn sample_persona() -> PersonaConfig {
        get_default_presets().remove(0)
    }

    #[test]
    fn test_prompt_contains_all_blocks() {
        let prompt = build_system_prompt(&sample_persona(), None);
        assert!(prompt.starts_with("You are Avery"));
        assert!(prompt.contains("Communication Style:"));
        assert!(prompt.contains("Professional Background:"));
        assert!(prompt.contains("Elevator Pitch:"));
        assert!(prompt.contains("Boundaries:"));
        assert!(prompt.contains("Guidelines:"));
        assert!(prompt.contains("- Anchor: a GitOps deployment controller"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let persona = sample_persona();
        let insights = extract_bio_insights("Call me Ace. I work as a barber in Detroit.");
        let first = build_system_prompt(&persona, Some(&insights));
        let second = build_system_prompt(&persona, Some(&insights));
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_collections_use_placeholders() {
        let presets = get_default_presets();
        let sam = presets.into_iter().find(|p| p.id == "sam").unwrap();
        let prompt = build_system_prompt(&sam, None);
        assert!(prompt.contains("Certifications: None listed"));
    }

    #[test]
    fn test_empty_insights_add_no_section() {
        let persona = sample_persona();
        let without = build_system_prompt(&persona, None);
        let with_empty = build_system_prompt(&persona, Some(&BiographicalInsights::default()));
        assert_eq!(without, with_empty);
    }

    #[test]
    fn test_personal_background_with_only_profession() {
        let persona = sample_persona();
        let mut insights = BiographicalInsights::default();
        insights.profession = "Barber".to_string();

        let prompt = build_system_prompt(&persona, Some(&insights));
        assert!(prompt.contains("Personal Background: You work as a Barber."));
        assert!(!prompt.contains("Your loved ones call you"));
        assert!(!prompt.contains("Your family includes"));
        assert!(!prompt.contains("You're from"));
        assert!(!prompt.contains("People describe you as"));
        assert!(!prompt.contains("You enjoy"));
    }

    #[test]
    fn test_personal_background_clause_order() {
        let persona = sample_persona();
        let insights = extract_bio_insights(
            "Call me Ace. My mom is Jane. I work as a barber. I grew up in detroit. \
             I'm funny. I enjoy fishing.",
        );
        let prompt = build_system_prompt(&persona, Some(&insights));

        let section = prompt
            .split("Personal Background: ")
            .nth(1)
            .expect("personal background section");
        let nickname_pos = section.find("Your loved ones call you").unwrap();
        let family_pos = section.find("Your family includes").unwrap();
        let profession_pos = section.find("You work as a").unwrap();
        let location_pos = section.find("You're from").unwrap();
        assert!(nickname_pos < family_pos);
        assert!(family_pos < profession_pos);
        assert!(profession_pos < location_pos);
        assert!(section.contains("naturally incorporate these personal details"));
    }

    #[test]
    fn test_bio_prompt_variants_per_category() {
        let insights =
            extract_bio_insights("Call me Ace. I work as a barber. I enjoy fishing and jazz.");
        let variants = bio_prompt_variants(&insights);

        // nickname + profession + hobbies + comprehensive
        assert_eq!(variants.len(), 4);
        assert!(variants.iter().all(|v| v.starts_with(VARIANT_BASE)));
        assert!(variants.iter().any(|v| v.contains("call you Ace")));
        assert!(
            variants
                .last()
                .unwrap()
                .contains("called Ace by loved ones, work as a Barber")
        );
    }

    #[test]
    fn test_bio_prompt_variants_empty_insights() {
        assert!(bio_prompt_variants(&BiographicalInsights::default()).is_empty());
    }

    #[test]
    fn test_profile_prompt_mentions_trait_and_style() {
        let profile = analyze_text(
            "She is creative and curious, always eager to explore new ideas together.",
        );
        let insights = extract_bio_insights("I work as a barber.");
        let prompt = build_profile_prompt(&profile, &insights);

        assert!(prompt.starts_with("You are embodying"));
        assert!(prompt.contains("creative, curious, and open to new experiences"));
        assert!(prompt.contains("Personal Background: You work as a Barber."));
    }
}
