//! Code-fence language registry for cmdargs.
//!
//! A [`LanguageRegistry`] is the set of tags accepted on the opening line of
//! a triple-backtick fence. The built-in registry ([`LanguageRegistry::builtin`])
//! covers the identifiers in [`LANGUAGES`] and is shared process-wide.
//! Integrators who accept additional tags build their own registry with
//! [`LanguageRegistry::builder`] or load one from JSON with
//! [`LanguageRegistry::from_json_str`].

#![warn(missing_docs)]

/// Built-in language identifier data.
pub mod builtin;

pub use builtin::LANGUAGES;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors that can occur when building or loading a language registry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// JSON deserialization failed.
    #[error("invalid registry JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A language name can never match a fence tag.
    #[error("invalid language {name:?}: {reason}")]
    InvalidLanguage {
        /// The rejected language name.
        name: String,
        /// A human-readable explanation of why the name was rejected.
        reason: String,
    },
}

/// The built-in registry, built on first use.
static BUILTIN: LazyLock<LanguageRegistry> = LazyLock::new(|| {
    let registry = LanguageRegistry {
        names: LANGUAGES.iter().map(|name| Cow::Borrowed(*name)).collect(),
    };
    tracing::debug!(languages = registry.len(), "built-in language registry initialized");
    registry
});

/// An immutable set of recognized code-fence language identifiers.
///
/// Lookups are exact and case-sensitive: `"go"` is recognized, `"Go"` is not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageRegistry {
    names: HashSet<Cow<'static, str>>,
}

impl LanguageRegistry {
    /// The shared built-in registry containing every entry of [`LANGUAGES`].
    pub fn builtin() -> &'static LanguageRegistry {
        &BUILTIN
    }

    /// Start building a custom registry. The builder starts empty; call
    /// [`RegistryBuilder::with_builtin`] to extend the built-in set.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Load a registry from a JSON [`RegistryConfig`] document.
    ///
    /// ```json
    /// { "include_builtin": true, "languages": ["gdscript", "hcl"] }
    /// ```
    pub fn from_json_str(s: &str) -> Result<Self, RegistryError> {
        let config: RegistryConfig = serde_json::from_str(s)?;
        Self::from_config(&config)
    }

    /// Build a registry from an already-deserialized [`RegistryConfig`].
    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let mut builder = Self::builder();
        if config.include_builtin {
            builder = builder.with_builtin();
        }
        builder.languages(config.languages.iter().cloned()).build()
    }

    /// Whether `tag` is a recognized language identifier.
    pub fn contains(&self, tag: &str) -> bool {
        self.names.contains(tag)
    }

    /// Number of recognized identifiers.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry recognizes nothing at all.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All identifiers in bytewise sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let mut names: Vec<&str> = self.names.iter().map(|name| name.as_ref()).collect();
        names.sort_unstable();
        names.into_iter()
    }
}

/// Whether `tag` is recognized by the built-in registry.
pub fn is_known_language(tag: &str) -> bool {
    LanguageRegistry::builtin().contains(tag)
}

/// Builder for a custom [`LanguageRegistry`].
///
/// Names are validated in [`RegistryBuilder::build`]; the first invalid name
/// aborts the build.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    include_builtin: bool,
    extra: Vec<String>,
}

impl RegistryBuilder {
    /// Include every built-in identifier.
    pub fn with_builtin(mut self) -> Self {
        self.include_builtin = true;
        self
    }

    /// Add one identifier.
    pub fn language(mut self, name: impl Into<String>) -> Self {
        self.extra.push(name.into());
        self
    }

    /// Add several identifiers.
    pub fn languages<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra.extend(names.into_iter().map(Into::into));
        self
    }

    /// Validate the added identifiers and produce the registry.
    pub fn build(self) -> Result<LanguageRegistry, RegistryError> {
        let mut names: HashSet<Cow<'static, str>> = if self.include_builtin {
            LanguageRegistry::builtin().names.clone()
        } else {
            HashSet::new()
        };
        for name in self.extra {
            validate_language(&name)?;
            names.insert(Cow::Owned(name));
        }
        tracing::debug!(
            languages = names.len(),
            include_builtin = self.include_builtin,
            "language registry built"
        );
        Ok(LanguageRegistry { names })
    }
}

/// Reject names that could never be captured as a fence tag.
fn validate_language(name: &str) -> Result<(), RegistryError> {
    let reason = if name.is_empty() {
        "must not be empty"
    } else if name.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else if name.contains('`') {
        "must not contain backticks"
    } else if name.chars().any(char::is_uppercase) {
        "must be lowercase"
    } else {
        return Ok(());
    };
    Err(RegistryError::InvalidLanguage {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

/// Serialized form of a registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Start from the built-in identifiers (default `true`).
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
    /// Additional identifiers to recognize.
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            languages: Vec::new(),
        }
    }
}

fn default_include_builtin() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_matches_language_list() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.len(), LANGUAGES.len());
        for name in LANGUAGES {
            assert!(registry.contains(name), "missing {name}");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(is_known_language("go"));
        assert!(is_known_language("c++"));
        assert!(!is_known_language("Go"));
        assert!(!is_known_language("GO"));
        assert!(!is_known_language(""));
        assert!(!is_known_language("zzz"));
    }

    #[test]
    fn builder_without_builtin_starts_empty() {
        let registry = LanguageRegistry::builder().language("gdscript").build().unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("gdscript"));
        assert!(!registry.contains("go"));
    }

    #[test]
    fn builder_extends_builtin() {
        let registry = LanguageRegistry::builder()
            .with_builtin()
            .languages(["gdscript", "hcl", "go"])
            .build()
            .unwrap();
        assert_eq!(registry.len(), LANGUAGES.len() + 2);
        assert!(registry.contains("hcl"));
        assert!(registry.contains("rust"));
    }

    #[test]
    fn builder_rejects_unmatchable_names() {
        for (name, reason) in [
            ("", "empty"),
            ("two words", "whitespace"),
            ("a`b", "backticks"),
            ("Rust", "lowercase"),
        ] {
            let err = LanguageRegistry::builder().language(name).build().unwrap_err();
            assert!(
                err.to_string().contains(reason),
                "error for {name:?} should mention {reason}: {err}"
            );
        }
    }

    #[test]
    fn iter_is_sorted() {
        let registry = LanguageRegistry::builder()
            .languages(["zsh", "ada", "c"])
            .build()
            .unwrap();
        let names: Vec<&str> = registry.iter().collect();
        assert_eq!(names, vec!["ada", "c", "zsh"]);
    }

    #[test]
    fn load_config_defaults_to_builtin() {
        let registry = LanguageRegistry::from_json_str(r#"{ "languages": ["hcl"] }"#).unwrap();
        assert!(registry.contains("hcl"));
        assert!(registry.contains("python"));
    }

    #[test]
    fn load_config_without_builtin() {
        let json = r#"{ "include_builtin": false, "languages": ["hcl"] }"#;
        let registry = LanguageRegistry::from_json_str(json).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("python"));
    }

    #[test]
    fn load_config_rejects_unknown_fields() {
        let err = LanguageRegistry::from_json_str(r#"{ "langs": [] }"#).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidJson(_)));
    }

    #[test]
    fn load_config_rejects_invalid_language() {
        let err = LanguageRegistry::from_json_str(r#"{ "languages": ["C Sharp"] }"#).unwrap_err();
        match err {
            RegistryError::InvalidLanguage { name, .. } => assert_eq!(name, "C Sharp"),
            other => panic!("expected InvalidLanguage, got {other:?}"),
        }
    }

    #[test]
    fn default_config_is_builtin() {
        let registry = LanguageRegistry::from_config(&RegistryConfig::default()).unwrap();
        assert_eq!(&registry, LanguageRegistry::builtin());
    }
}
