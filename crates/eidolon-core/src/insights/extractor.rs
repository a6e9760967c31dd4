//! Biographical insight extraction.
//!
//! Parses free-form autobiographical text into a [`BiographicalInsights`]
//! record via layered keyword and pattern rules. The rules match
//! lower-cased English phrasing and are approximate; a non-match is
//! absence, never an error.
//!
//! Each fact category is an ordered table of [`FactRule`]s. Union
//! categories (nicknames, family, locations, hobbies, facts) fold every
//! match of every rule into the result set. Profession is first-match:
//! the first rule that matches at all supplies the single value and the
//! rest of the table is skipped.

use super::model::BiographicalInsights;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeSet;

/// A single extraction rule: a pattern over the input text and a transform
/// from its captures to zero or more fact strings.
struct FactRule {
    pattern: Regex,
    transform: fn(&Captures) -> Vec<String>,
}

impl FactRule {
    fn new(pattern: &str, transform: fn(&Captures) -> Vec<String>) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("extraction pattern must compile"),
            transform,
        }
    }
}

/// Folds every match of every rule into `out`.
fn apply_union(rules: &[FactRule], text: &str, out: &mut BTreeSet<String>) {
    for rule in rules {
        for caps in rule.pattern.captures_iter(text) {
            for value in (rule.transform)(&caps) {
                if !value.is_empty() {
                    out.insert(value);
                }
            }
        }
    }
}

/// Returns the first rule's first non-empty value, in table order.
fn apply_first_match(rules: &[FactRule], text: &str) -> String {
    for rule in rules {
        if let Some(caps) = rule.pattern.captures(text) {
            if let Some(value) = (rule.transform)(&caps).into_iter().find(|v| !v.is_empty()) {
                return value;
            }
        }
    }
    String::new()
}

/// Title-cases a phrase: the first letter of every alphabetic run is
/// upper-cased, the rest lower-cased. Non-alphabetic characters pass
/// through and restart a run.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alphabetic = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}

/// Splits a captured name/hobby list on commas, ampersands, and the word
/// "and", yielding trimmed, title-cased, non-empty fragments.
static LIST_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,&]|\band\b").expect("list separator pattern must compile"));

fn split_list(raw: &str) -> Vec<String> {
    LIST_SEPARATOR
        .split(raw)
        .map(|part| title_case(part.trim()))
        .filter(|part| !part.is_empty())
        .collect()
}

fn titled_group(caps: &Captures) -> Vec<String> {
    vec![title_case(&caps[1])]
}

fn relation_and_name(caps: &Captures) -> Vec<String> {
    vec![format!("{}: {}", &caps[1], title_case(&caps[2]))]
}

fn child_list(caps: &Captures) -> Vec<String> {
    split_list(&caps[1])
        .into_iter()
        .map(|name| format!("child: {name}"))
        .collect()
}

/// Places shorter than 3 characters are noise ("in a", stray articles).
fn place_name(caps: &Captures) -> Vec<String> {
    let trimmed = caps[1].trim();
    if trimmed.chars().count() > 2 {
        vec![title_case(trimmed)]
    } else {
        Vec::new()
    }
}

fn hobby_list(caps: &Captures) -> Vec<String> {
    split_list(&caps[1])
        .into_iter()
        .filter(|hobby| hobby.chars().count() > 2)
        .collect()
}

/// Facts keep the original casing of what the author wrote.
fn verbatim_group(caps: &Captures) -> Vec<String> {
    vec![caps[1].to_string()]
}

static NICKNAME_RULES: Lazy<Vec<FactRule>> = Lazy::new(|| {
    vec![
        FactRule::new(r"call me ([a-z]+)", titled_group),
        FactRule::new(r"nickname is ([a-z]+)", titled_group),
        FactRule::new(r"known as ([a-z]+)", titled_group),
        FactRule::new(r"goes by ([a-z]+)", titled_group),
        FactRule::new(r"called ([a-z]+)", titled_group),
    ]
});

const RELATIONS: &str = "mom|mother|dad|father|brother|sister|son|daughter|wife|husband|partner";

static FAMILY_RULES: Lazy<Vec<FactRule>> = Lazy::new(|| {
    vec![
        FactRule::new(
            &format!(r"(?:my|his|her|their)\s+({RELATIONS})\s+(?:is|was|named?)\s+([a-z]+)"),
            relation_and_name,
        ),
        FactRule::new(
            &format!(r"({RELATIONS})(?:'s)?\s+name\s+is\s+([a-z]+)"),
            relation_and_name,
        ),
        FactRule::new(
            r"(?:kids?|children)\s+(?:are|named?|called?)\s+([a-z\s,&]+)",
            child_list,
        ),
    ]
});

static PROFESSION_RULES: Lazy<Vec<FactRule>> = Lazy::new(|| {
    vec![
        FactRule::new(
            r"(?:work|job|profession|career|occupation)\s+(?:as|is)\s+(?:an?\s+)?([a-z]+)",
            titled_group,
        ),
        FactRule::new(
            r"(?:is|was)\s+(?:an?\s+)?([a-z]+)\s+(?:by|for)\s+profession",
            titled_group,
        ),
        FactRule::new(
            r"\b(barber|teacher|doctor|nurse|engineer|lawyer|chef|mechanic|artist|musician|writer|programmer|manager|director|sales|marketing|retail|construction|plumber|electrician|accountant|dentist|veterinarian)\b",
            titled_group,
        ),
    ]
});

static LOCATION_RULES: Lazy<Vec<FactRule>> = Lazy::new(|| {
    vec![
        FactRule::new(
            r"(?:from|lives?|lived|grew up|born)\s+(?:in\s+)?([a-z\s]+)(?:,|\.|$)",
            place_name,
        ),
        FactRule::new(r"(?:city|town|state|country)\s+(?:is|was)\s+([a-z\s]+)", place_name),
    ]
});

static HOBBY_RULES: Lazy<Vec<FactRule>> = Lazy::new(|| {
    vec![
        FactRule::new(
            r"(?:hobby|hobbies|likes?|loves?|enjoys?|interests?)\s+(?:are|is|include|including)?\s*([a-z\s,&]+)",
            hobby_list,
        ),
        FactRule::new(r"(?:plays?|playing)\s+([a-z\s]+)", hobby_list),
        FactRule::new(
            r"(?:watches?|watching|reads?|reading|listens? to|listening to)\s+([a-z\s]+)",
            hobby_list,
        ),
    ]
});

static FACT_RULES: Lazy<Vec<FactRule>> = Lazy::new(|| {
    vec![
        FactRule::new(r"(\d+)\s+(?:years? old|kids?|children)", verbatim_group),
        FactRule::new(
            r"(?:born|started|married|graduated)\s+(?:in\s+)?(\d{4})",
            verbatim_group,
        ),
        FactRule::new(r"(has\s+\d+\s+[a-zA-Z]+)", verbatim_group),
        FactRule::new(r"(moved\s+to\s+[a-zA-Z\s]+)", verbatim_group),
        FactRule::new(r"(studied\s+[a-zA-Z\s]+)", verbatim_group),
    ]
});

/// Adjectives recognized as personality descriptors when they appear
/// anywhere in the lower-cased text.
const PERSONALITY_VOCABULARY: &[&str] = &[
    "funny",
    "kind",
    "caring",
    "loving",
    "smart",
    "creative",
    "artistic",
    "musical",
    "athletic",
    "outgoing",
    "shy",
    "quiet",
    "loud",
    "energetic",
    "calm",
    "patient",
    "stubborn",
    "generous",
    "helpful",
    "organized",
    "messy",
    "punctual",
    "late",
    "optimistic",
    "pessimistic",
    "cheerful",
    "serious",
    "playful",
    "responsible",
];

/// Extracts structured biographical facts from free text.
///
/// Pure and infallible: empty or unparsable input yields an all-empty
/// record. Matching runs over a lower-cased copy of the text, except the
/// important-fact patterns, which run against the original so captured
/// fragments keep the author's casing.
pub fn extract_bio_insights(bio_text: &str) -> BiographicalInsights {
    let mut insights = BiographicalInsights::default();
    if bio_text.trim().is_empty() {
        return insights;
    }

    let lower = bio_text.to_lowercase();

    apply_union(&NICKNAME_RULES, &lower, &mut insights.nicknames);
    apply_union(&FAMILY_RULES, &lower, &mut insights.family_members);
    insights.profession = apply_first_match(&PROFESSION_RULES, &lower);
    apply_union(&LOCATION_RULES, &lower, &mut insights.locations);

    for word in PERSONALITY_VOCABULARY {
        if lower.contains(word) {
            insights.personality_descriptors.insert(title_case(word));
        }
    }

    apply_union(&HOBBY_RULES, &lower, &mut insights.hobbies_interests);
    apply_union(&FACT_RULES, bio_text, &mut insights.important_facts);

    tracing::debug!(
        nicknames = insights.nicknames.len(),
        family = insights.family_members.len(),
        locations = insights.locations.len(),
        hobbies = insights.hobbies_interests.len(),
        facts = insights.important_facts.len(),
        has_profession = !insights.profession.is_empty(),
        "extracted bio insights"
    );

    insights
}
