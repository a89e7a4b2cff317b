//! Argument tokenizer.
//!
//! The router hands over whatever follows the command name. A single leading
//! newline is dropped, then the text is split on every `' '`. Runs of spaces
//! produce empty tokens and tabs or newlines are never separators, so
//! `"a  b"` has three tokens.

use std::convert::Infallible;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use cmdargs_languages::LanguageRegistry;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::argument::Argument;
use crate::codeblock::{Codeblock, extract_codeblock};

/// The tokenized argument text of one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    /// Input after leading-newline normalization.
    raw: String,
    /// Byte range of each token within `raw`.
    tokens: Vec<Range<usize>>,
}

/// Tokenize the text following a command name.
pub fn parse_arguments(raw: &str) -> Arguments {
    let raw = raw.strip_prefix('\n').unwrap_or(raw);
    let tokens = split_tokens(raw);
    tracing::trace!(tokens = tokens.len(), bytes = raw.len(), "arguments parsed");
    Arguments {
        raw: raw.to_string(),
        tokens,
    }
}

/// Split on each `' '` byte. Empty input has no tokens at all.
///
/// `' '` is ASCII, so every boundary is a valid UTF-8 char boundary.
fn split_tokens(raw: &str) -> Vec<Range<usize>> {
    if raw.is_empty() {
        return Vec::new();
    }
    let mut tokens = Vec::new();
    let mut start = 0usize;
    for (i, b) in raw.bytes().enumerate() {
        if b == b' ' {
            tokens.push(start..i);
            start = i + 1;
        }
    }
    tokens.push(start..raw.len());
    tokens
}

impl Arguments {
    /// Same as [`parse_arguments`].
    pub fn parse(raw: &str) -> Self {
        parse_arguments(raw)
    }

    /// The normalized input text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Number of tokens.
    pub fn amount(&self) -> usize {
        self.tokens.len()
    }

    /// Whether there are no tokens (the input was empty).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The `n`-th token (0-indexed), or `None` past the end.
    pub fn get(&self, n: usize) -> Option<Argument<'_>> {
        self.tokens
            .get(n)
            .map(|range| Argument::new(&self.raw[range.clone()]))
    }

    /// All tokens in input order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            raw: &self.raw,
            ranges: self.tokens.iter(),
        }
    }

    /// The whole normalized text as one unsplit argument.
    pub fn as_single(&self) -> Argument<'_> {
        Argument::new(&self.raw)
    }

    /// The first fenced code block, with its tag checked against the
    /// built-in language registry.
    pub fn as_codeblock(&self) -> Option<Codeblock> {
        self.as_codeblock_with(LanguageRegistry::builtin())
    }

    /// The first fenced code block, with its tag checked against `registry`.
    pub fn as_codeblock_with(&self, registry: &LanguageRegistry) -> Option<Codeblock> {
        extract_codeblock(&self.raw, registry)
    }
}

/// Iterator over the tokens of an [`Arguments`], see [`Arguments::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    raw: &'a str,
    ranges: std::slice::Iter<'a, Range<usize>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Argument<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ranges
            .next()
            .map(|range| Argument::new(&self.raw[range.clone()]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ranges.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ranges
            .next_back()
            .map(|range| Argument::new(&self.raw[range.clone()]))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Arguments {
    type Item = Argument<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&str> for Arguments {
    fn from(raw: &str) -> Self {
        parse_arguments(raw)
    }
}

impl From<String> for Arguments {
    fn from(raw: String) -> Self {
        parse_arguments(&raw)
    }
}

impl FromStr for Arguments {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_arguments(s))
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Arguments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tokens: Vec<Argument<'_>> = self.iter().collect();
        let mut state = serializer.serialize_struct("Arguments", 2)?;
        state.serialize_field("raw", &self.raw)?;
        state.serialize_field("tokens", &tokens)?;
        state.end()
    }
}
