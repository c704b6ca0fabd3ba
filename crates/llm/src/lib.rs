//! # Text Generation
//!
//! Prompt templating plus a small, substitutable text-generation seam:
//!
//! - [`PromptTemplate`] — `{name}` placeholder templates with `{{`/`}}`
//!   escapes.
//! - [`TextGenerator`] — the one-method provider contract, with a provided
//!   [`generate`](TextGenerator::generate) that renders a template and
//!   rejects empty completions.
//! - [`OpenAiGenerator`] — chat-completions backend over `reqwest`.
//! - [`ScriptedGenerator`] — deterministic in-memory backend for tests:
//!   sequential or pattern-matched replies, failure injection, call
//!   recording.

mod generator;
mod openai;
mod scripted;
mod template;

pub use generator::{GenerationError, TextGenerator};
pub use openai::OpenAiGenerator;
pub use scripted::ScriptedGenerator;
pub use template::PromptTemplate;
