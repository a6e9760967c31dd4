//! Conversation-pattern and personality profiling.
//!
//! Keyword heuristics over segmented text. Like the insight extractor,
//! these are approximate pattern counts, not linguistic analysis; they feed
//! the profile-flavored prompt assembly.

use super::text::{clean_text, split_sentences};
use serde::{Deserialize, Serialize};

/// Sentences analyzed for personality traits (the head of the text is
/// representative enough and keeps the scan bounded).
const TRAIT_SAMPLE_SENTENCES: usize = 50;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SentenceLength {
    Short,
    Medium,
    Long,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Enthusiasm {
    High,
    Normal,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationStyle {
    EnergeticBrief,
    ThoughtfulDetailed,
    Enthusiastic,
    Inquisitive,
    Balanced,
}

impl CommunicationStyle {
    /// Phrase used when describing this style inside a prompt.
    pub fn prompt_description(&self) -> &'static str {
        match self {
            Self::EnergeticBrief => "speaks in short, enthusiastic bursts",
            Self::ThoughtfulDetailed => "provides comprehensive, well-considered responses",
            Self::Enthusiastic => "expresses excitement and positivity frequently",
            Self::Inquisitive => "asks thoughtful questions and shows genuine curiosity",
            Self::Balanced => "maintains a steady, measured communication approach",
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WritingStyle {
    Formal,
    Casual,
    Emotional,
    Analytical,
    Neutral,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityTrait {
    Extraversion,
    Agreeableness,
    Conscientiousness,
    Neuroticism,
    Openness,
}

impl PersonalityTrait {
    /// Phrase used when describing this trait inside a prompt.
    pub fn prompt_description(&self) -> &'static str {
        match self {
            Self::Extraversion => "outgoing, social, and energetic",
            Self::Agreeableness => "kind, cooperative, and empathetic",
            Self::Conscientiousness => "organized, responsible, and detail-oriented",
            Self::Neuroticism => "emotionally sensitive and expressive",
            Self::Openness => "creative, curious, and open to new experiences",
        }
    }
}

/// Sentence-level rhythm and punctuation profile.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ConversationPatterns {
    pub avg_sentence_length: f64,
    pub length_category: SentenceLength,
    pub exclamation_frequency: f64,
    pub question_frequency: f64,
    pub enthusiasm: Enthusiasm,
    pub communication_style: CommunicationStyle,
}

/// Writing-style keyword counts with the dominant register.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StyleIndicators {
    pub formal: usize,
    pub casual: usize,
    pub emotional: usize,
    pub analytical: usize,
    pub dominant: WritingStyle,
}

/// Keyword-based Big Five scores, normalized to 0.0..=1.0.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TraitScores {
    pub extraversion: f64,
    pub agreeableness: f64,
    pub conscientiousness: f64,
    pub neuroticism: f64,
    pub openness: f64,
    pub dominant: PersonalityTrait,
    pub description: String,
}

/// Combined profile of a body of text.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TextProfile {
    pub patterns: ConversationPatterns,
    pub style: StyleIndicators,
    pub traits: TraitScores,
}

/// Derives rhythm and punctuation patterns from segmented sentences.
pub fn conversation_patterns(sentences: &[String]) -> ConversationPatterns {
    let avg_sentence_length = if sentences.is_empty() {
        0.0
    } else {
        let total_words: usize = sentences
            .iter()
            .map(|s| s.split_whitespace().count())
            .sum();
        total_words as f64 / sentences.len() as f64
    };

    let length_category = if avg_sentence_length < 10.0 {
        SentenceLength::Short
    } else if avg_sentence_length < 20.0 {
        SentenceLength::Medium
    } else {
        SentenceLength::Long
    };

    let combined = sentences.join(" ");
    let exclamations = combined.matches('!').count();
    let questions = combined.matches('?').count();
    let sentence_count = sentences.len();

    let enthusiasm = if exclamations as f64 > sentence_count as f64 * 0.1 {
        Enthusiasm::High
    } else {
        Enthusiasm::Normal
    };

    let communication_style = if avg_sentence_length < 8.0 && exclamations > questions {
        CommunicationStyle::EnergeticBrief
    } else if avg_sentence_length > 15.0 && questions > exclamations {
        CommunicationStyle::ThoughtfulDetailed
    } else if exclamations > 5 {
        CommunicationStyle::Enthusiastic
    } else if questions > 5 {
        CommunicationStyle::Inquisitive
    } else {
        CommunicationStyle::Balanced
    };

    ConversationPatterns {
        avg_sentence_length,
        length_category,
        exclamation_frequency: frequency(exclamations, sentence_count),
        question_frequency: frequency(questions, sentence_count),
        enthusiasm,
        communication_style,
    }
}

fn frequency(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

const FORMAL_MARKERS: &[&str] = &[
    "therefore",
    "however",
    "furthermore",
    "consequently",
    "nevertheless",
];
const CASUAL_MARKERS: &[&str] = &["yeah", "ok", "cool", "awesome", "totally", "like", "um"];
const EMOTIONAL_MARKERS: &[&str] = &[
    "feel", "heart", "love", "hate", "amazing", "terrible", "wonderful",
];
const ANALYTICAL_MARKERS: &[&str] = &[
    "think", "consider", "analyze", "reason", "logic", "because", "since",
];

fn marker_count(text: &str, markers: &[&str]) -> usize {
    markers.iter().filter(|marker| text.contains(*marker)).count()
}

/// Counts writing-style markers and picks the dominant register.
/// All-zero counts yield `Neutral`; ties go to the earlier-listed style.
pub fn style_indicators(sentences: &[String]) -> StyleIndicators {
    let combined = sentences.join(" ").to_lowercase();

    let formal = marker_count(&combined, FORMAL_MARKERS);
    let casual = marker_count(&combined, CASUAL_MARKERS);
    let emotional = marker_count(&combined, EMOTIONAL_MARKERS);
    let analytical = marker_count(&combined, ANALYTICAL_MARKERS);

    let ranked = [
        (WritingStyle::Formal, formal),
        (WritingStyle::Casual, casual),
        (WritingStyle::Emotional, emotional),
        (WritingStyle::Analytical, analytical),
    ];
    let mut dominant = WritingStyle::Neutral;
    let mut best = 0;
    for (style, score) in ranked {
        if score > best {
            best = score;
            dominant = style;
        }
    }

    StyleIndicators {
        formal,
        casual,
        emotional,
        analytical,
        dominant,
    }
}

const EXTRAVERSION_MARKERS: &[&str] = &[
    "party", "social", "outgoing", "talkative", "energetic", "people", "friends",
];
const AGREEABLENESS_MARKERS: &[&str] = &[
    "kind",
    "helpful",
    "caring",
    "empathy",
    "understanding",
    "support",
    "love",
];
const CONSCIENTIOUSNESS_MARKERS: &[&str] = &[
    "organized",
    "responsible",
    "reliable",
    "planned",
    "careful",
    "detail",
];
const NEUROTICISM_MARKERS: &[&str] = &[
    "worry",
    "stress",
    "anxious",
    "nervous",
    "upset",
    "emotional",
    "sensitive",
];
const OPENNESS_MARKERS: &[&str] = &[
    "creative",
    "curious",
    "imagination",
    "artistic",
    "innovative",
    "explore",
    "new",
];

fn trait_score(text: &str, markers: &[&str]) -> f64 {
    (marker_count(text, markers) as f64 / markers.len() as f64).min(1.0)
}

/// Scores Big Five indicators over the leading sample of sentences.
/// Ties for the dominant trait go to the earlier-listed trait.
pub fn trait_scores(sentences: &[String]) -> TraitScores {
    let sample: Vec<&str> = sentences
        .iter()
        .take(TRAIT_SAMPLE_SENTENCES)
        .map(String::as_str)
        .collect();
    let combined = sample.join(" ").to_lowercase();

    let extraversion = trait_score(&combined, EXTRAVERSION_MARKERS);
    let agreeableness = trait_score(&combined, AGREEABLENESS_MARKERS);
    let conscientiousness = trait_score(&combined, CONSCIENTIOUSNESS_MARKERS);
    let neuroticism = trait_score(&combined, NEUROTICISM_MARKERS);
    let openness = trait_score(&combined, OPENNESS_MARKERS);

    let ranked = [
        (PersonalityTrait::Extraversion, extraversion),
        (PersonalityTrait::Agreeableness, agreeableness),
        (PersonalityTrait::Conscientiousness, conscientiousness),
        (PersonalityTrait::Neuroticism, neuroticism),
        (PersonalityTrait::Openness, openness),
    ];
    let mut dominant = ranked[0].0;
    let mut score = ranked[0].1;
    for (candidate, candidate_score) in ranked {
        if candidate_score > score {
            score = candidate_score;
            dominant = candidate;
        }
    }

    TraitScores {
        extraversion,
        agreeableness,
        conscientiousness,
        neuroticism,
        openness,
        dominant,
        description: describe_trait(dominant, score),
    }
}

fn describe_trait(dominant: PersonalityTrait, score: f64) -> String {
    let strong = score > 0.6;
    match dominant {
        PersonalityTrait::Extraversion => format!(
            "Shows {} social energy and outgoing nature",
            if strong { "high" } else { "moderate" }
        ),
        PersonalityTrait::Agreeableness => format!(
            "Demonstrates {} kindness and cooperation",
            if strong { "strong" } else { "moderate" }
        ),
        PersonalityTrait::Conscientiousness => format!(
            "Displays {} organization and responsibility",
            if strong { "high" } else { "moderate" }
        ),
        PersonalityTrait::Neuroticism => format!(
            "Shows {} emotional sensitivity",
            if strong { "elevated" } else { "normal" }
        ),
        PersonalityTrait::Openness => format!(
            "Exhibits {} creativity and curiosity",
            if strong { "high" } else { "moderate" }
        ),
    }
}

/// Cleans, segments, and profiles a body of text in one pass.
pub fn analyze_text(text: &str) -> TextProfile {
    let cleaned = clean_text(text);
    let sentences = split_sentences(&cleaned);

    tracing::debug!(sentences = sentences.len(), "analyzing text profile");

    TextProfile {
        patterns: conversation_patterns(&sentences),
        style: style_indicators(&sentences),
        traits: trait_scores(&sentences),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_energetic_brief_classification() {
        let patterns = conversation_patterns(&sentences(&[
            "We won the game!",
            "Best day ever!",
            "Total blast out there!",
        ]));
        assert_eq!(patterns.length_category, SentenceLength::Short);
        assert_eq!(
            patterns.communication_style,
            CommunicationStyle::EnergeticBrief
        );
        assert_eq!(patterns.enthusiasm, Enthusiasm::High);
    }

    #[test]
    fn test_thoughtful_detailed_classification() {
        let patterns = conversation_patterns(&sentences(&[
            "Have you ever wondered why the garden behind the old school kept growing so well every single year?",
            "Would it not be worth asking what the soil, the light, and the students each contributed to that result?",
        ]));
        assert_eq!(
            patterns.communication_style,
            CommunicationStyle::ThoughtfulDetailed
        );
        assert_eq!(patterns.enthusiasm, Enthusiasm::Normal);
    }

    #[test]
    fn test_balanced_when_no_signal() {
        let patterns = conversation_patterns(&sentences(&[
            "The report covers three quarters of data in moderate depth.",
        ]));
        assert_eq!(patterns.communication_style, CommunicationStyle::Balanced);
    }

    #[test]
    fn test_empty_sentences_yield_zeroes() {
        let patterns = conversation_patterns(&[]);
        assert_eq!(patterns.avg_sentence_length, 0.0);
        assert_eq!(patterns.exclamation_frequency, 0.0);
        assert_eq!(patterns.length_category, SentenceLength::Short);
    }

    #[test]
    fn test_style_indicators_analytical() {
        let style = style_indicators(&sentences(&[
            "I think the reason it failed is the logic of the rollout, because nothing was measured.",
        ]));
        assert_eq!(style.dominant, WritingStyle::Analytical);
        assert!(style.analytical >= 3);
    }

    #[test]
    fn test_style_indicators_neutral_when_empty() {
        let style = style_indicators(&sentences(&["Plain words only here."]));
        assert_eq!(style.dominant, WritingStyle::Neutral);
    }

    #[test]
    fn test_trait_scores_openness_dominant() {
        let traits = trait_scores(&sentences(&[
            "She is creative and curious, always eager to explore.",
        ]));
        assert_eq!(traits.dominant, PersonalityTrait::Openness);
        assert!(traits.openness > 0.0);
        assert_eq!(
            traits.description,
            "Exhibits moderate creativity and curiosity"
        );
    }

    #[test]
    fn test_trait_scores_are_normalized() {
        let traits = trait_scores(&sentences(&[
            "party social outgoing talkative energetic people friends party again",
        ]));
        assert!(traits.extraversion <= 1.0);
        assert_eq!(traits.dominant, PersonalityTrait::Extraversion);
    }

    #[test]
    fn test_analyze_text_end_to_end() {
        let profile =
            analyze_text("I love helping people learn!! We explore new ideas together every day.");
        assert!(profile.traits.agreeableness > 0.0);
        assert!(profile.patterns.avg_sentence_length > 0.0);
    }
}
