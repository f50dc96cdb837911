//! Service layer.
//!
//! Services sit between the HTTP handlers and the repositories. The phrase
//! service never returns an error: store failures come back as envelopes.

pub mod language_service;
pub mod phrase_service;

pub use language_service::LanguageService;
pub use phrase_service::PhraseService;
