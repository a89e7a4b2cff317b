//! User, role and channel mention extraction.
//!
//! Mentions are angle-bracket references such as `<@123>`, `<@!123>`,
//! `<@&42>` and `<#7>`. Matching is unanchored: a token that merely contains
//! a mention still yields its ID, and only the first mention counts.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static USER_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@!?([0-9]+)>").expect("user mention pattern is valid"));

static ROLE_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@&([0-9]+)>").expect("role mention pattern is valid"));

static CHANNEL_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<#([0-9]+)>").expect("channel mention pattern is valid"));

/// The entity a mention refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionKind {
    /// `<@ID>` or the nickname form `<@!ID>`.
    User,
    /// `<@&ID>`.
    Role,
    /// `<#ID>`.
    Channel,
}

impl MentionKind {
    fn pattern(self) -> &'static Regex {
        match self {
            MentionKind::User => &*USER_MENTION,
            MentionKind::Role => &*ROLE_MENTION,
            MentionKind::Channel => &*CHANNEL_MENTION,
        }
    }
}

impl std::fmt::Display for MentionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MentionKind::User => write!(f, "user"),
            MentionKind::Role => write!(f, "role"),
            MentionKind::Channel => write!(f, "channel"),
        }
    }
}

/// Find the first mention of `kind` in `text` and return its digit run.
///
/// The ID is not checked against any real entity.
pub fn find_mention_id(kind: MentionKind, text: &str) -> Option<&str> {
    kind.pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
