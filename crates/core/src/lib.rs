//! cmdargs core library.
//!
//! Turns the text that follows a chat command's name into typed, queryable
//! arguments. The main entry point is [`parse_arguments`]; the returned
//! [`Arguments`] hands out [`Argument`] tokens with scalar and mention views,
//! and [`Arguments::as_codeblock`] finds fenced code blocks.
//!
//! Everything here is pure and synchronous, so it can be called from any
//! number of concurrent command handlers.

#![warn(missing_docs)]

/// A single token and its typed views.
pub mod argument;
/// Tokenizer and the [`Arguments`] collection.
pub mod arguments;
/// Fenced code block extraction.
pub mod codeblock;
/// JSON serialization helpers.
pub mod dump;
/// Typed scalar coercion failures.
pub mod error;
/// User, role and channel mention extraction.
pub mod mention;
/// Boolean and integer coercion.
pub mod scalar;

// ── Convenience re-exports ──────────────────────────────────────────────────

pub use argument::Argument;
pub use arguments::{Arguments, parse_arguments};
pub use codeblock::{Codeblock, extract_codeblock};
pub use dump::to_pretty_json;
pub use error::ParseFailure;
pub use mention::{MentionKind, find_mention_id};

// Language registry (re-exported from the languages crate)
pub use cmdargs_languages::{
    LANGUAGES, LanguageRegistry, RegistryBuilder, RegistryConfig, RegistryError,
    is_known_language,
};
