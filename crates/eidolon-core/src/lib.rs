//! Core domain crate for the Eidolon persona engine.
//!
//! Holds the persona configuration model and store interface, the
//! biographical insight extractor, and the text analysis heuristics. All
//! logic here is pure and synchronous; storage implementations live in
//! `eidolon-infrastructure`, prompt assembly and response generation in
//! `eidolon-interaction`.

pub mod analysis;
pub mod error;
pub mod insights;
pub mod persona;

// Re-export common error type
pub use error::PersonaError;
