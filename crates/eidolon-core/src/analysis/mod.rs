//! Text analysis module.
//!
//! Cleans and segments raw text, then profiles its conversational rhythm,
//! writing style, and keyword-based personality traits.
//!
//! # Module Structure
//!
//! - `text`: cleanup and sentence segmentation
//! - `profile`: pattern/style/trait profiling over segmented sentences

mod profile;
mod text;

pub use profile::{
    CommunicationStyle, ConversationPatterns, Enthusiasm, PersonalityTrait, SentenceLength,
    StyleIndicators, TextProfile, TraitScores, WritingStyle, analyze_text,
    conversation_patterns, style_indicators, trait_scores,
};
pub use text::{clean_text, split_sentences};
