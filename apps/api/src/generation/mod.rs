// Post Generation Engine
// Implements: profile normalization, prompt building, reply recovery, batch
// orchestration and feedback-driven revision.
// All model calls go through llm_client::TextGenerator.

pub mod generator;
pub mod handlers;
pub mod language;
pub mod profile;
pub mod prompt_builder;
pub mod prompts;
pub mod recovery;
pub mod store;
pub mod style;
