//! Fenced code block extraction.
//!
//! A block is a triple-backtick fence that opens the text or follows a
//! newline, an optional tag line, and content up to the closing fence:
//!
//! ````text
//! ```go
//! fmt.Println(1)
//! ```
//! ````
//!
//! The tag becomes the block's language only when the registry recognizes
//! it. Otherwise the tag line is folded back into the content so no user
//! text is lost.

use std::fmt;
use std::sync::LazyLock;

use cmdargs_languages::LanguageRegistry;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Group 1 is the optional tag (no whitespace or backticks), group 2 the
/// lazily matched content.
static CODEBLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:\A|\n)```(?:([^\s`]*)\n)?(.+?)```").expect("codeblock pattern is valid")
});

/// A fenced code block found in argument text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Codeblock {
    /// Recognized language tag, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Text between the fences, with an unrecognized tag line folded back in.
    pub content: String,
}

impl Codeblock {
    /// The language tag, or `""` when none was recognized.
    pub fn language_or_empty(&self) -> &str {
        self.language.as_deref().unwrap_or("")
    }
}

/// Renders the block back as a fence, e.g. for echoing it in a reply.
impl fmt::Display for Codeblock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.language {
            Some(language) => write!(f, "```{language}\n{}```", self.content),
            None => write!(f, "```\n{}```", self.content),
        }
    }
}

/// Find the first fenced code block in `text`, classifying its tag against
/// `registry`.
///
/// Returns `None` when `text` contains no fence; that is an expected outcome,
/// not an error.
pub fn extract_codeblock(text: &str, registry: &LanguageRegistry) -> Option<Codeblock> {
    let caps = CODEBLOCK.captures(text)?;
    let tag = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());

    if !tag.is_empty() && registry.contains(tag) {
        tracing::trace!(language = tag, "codeblock language recognized");
        return Some(Codeblock {
            language: Some(tag.to_string()),
            content: body.to_string(),
        });
    }

    let content = if tag.is_empty() {
        body.to_string()
    } else {
        tracing::trace!(tag, "codeblock tag not recognized, folding into content");
        format!("{tag}\n{body}")
    };
    Some(Codeblock {
        language: None,
        content,
    })
}
