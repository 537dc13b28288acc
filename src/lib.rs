//! Confidence-gated translation.
//!
//! Detects the language of the input with a remote language model, translates
//! only when detection is confident enough, and otherwise returns a fixed
//! fallback. Exposed over HTTP (`POST /api/translate`) and in-process.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use application::orchestrator::{Orchestrator, DEFAULT_CONFIDENCE_THRESHOLD};
pub use domain::error::TranslateError;
pub use domain::model::{DetectionResult, Fallback, Outcome, TranslationResult};
pub use domain::traits::{KeyValueStore, LanguageModel};
pub use interfaces::api::{get_translation, TranslateReply};
