//! A single argument token and its typed views.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::ParseFailure;
use crate::mention::{MentionKind, find_mention_id};
use crate::scalar;

/// One argument token, borrowed from its parent [`Arguments`](crate::Arguments).
///
/// Nothing is cached: every accessor recomputes from [`Argument::raw`], so
/// repeated calls always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argument<'a> {
    raw: &'a str,
}

impl<'a> Argument<'a> {
    /// Wrap a piece of argument text.
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The token text exactly as it appeared in the input.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Whether the token is empty (produced by consecutive spaces).
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Parse as a boolean (`true`/`false`, `t`/`f`, `1`/`0`, any case).
    pub fn as_bool(&self) -> Result<bool, ParseFailure> {
        scalar::parse_bool(self.raw)
    }

    /// Parse as a decimal `i32`.
    pub fn as_int(&self) -> Result<i32, ParseFailure> {
        scalar::parse_i32(self.raw)
    }

    /// Parse as a decimal `i64`.
    pub fn as_int64(&self) -> Result<i64, ParseFailure> {
        scalar::parse_i64(self.raw)
    }

    /// ID of the first mention of `kind` anywhere in the token.
    pub fn mention_id(&self, kind: MentionKind) -> Option<&'a str> {
        find_mention_id(kind, self.raw)
    }

    /// ID of the first user mention (`<@ID>` or `<@!ID>`).
    pub fn as_user_mention_id(&self) -> Option<&'a str> {
        self.mention_id(MentionKind::User)
    }

    /// ID of the first role mention (`<@&ID>`).
    pub fn as_role_mention_id(&self) -> Option<&'a str> {
        self.mention_id(MentionKind::Role)
    }

    /// ID of the first channel mention (`<#ID>`).
    pub fn as_channel_mention_id(&self) -> Option<&'a str> {
        self.mention_id(MentionKind::Channel)
    }
}

impl fmt::Display for Argument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

impl AsRef<str> for Argument<'_> {
    fn as_ref(&self) -> &str {
        self.raw
    }
}

impl Serialize for Argument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_views() {
        assert_eq!(Argument::new("42").as_int(), Ok(42));
        assert_eq!(Argument::new("42").as_int64(), Ok(42));
        assert_eq!(Argument::new("T").as_bool(), Ok(true));
        assert!(matches!(
            Argument::new("abc").as_int(),
            Err(ParseFailure::InvalidInteger { .. })
        ));
        assert!(matches!(
            Argument::new("maybe").as_bool(),
            Err(ParseFailure::InvalidBoolean { .. })
        ));
    }

    #[test]
    fn mention_views() {
        let arg = Argument::new("<@!99>");
        assert_eq!(arg.as_user_mention_id(), Some("99"));
        assert_eq!(arg.as_role_mention_id(), None);
        assert_eq!(arg.as_channel_mention_id(), None);
        assert_eq!(arg.mention_id(MentionKind::User), Some("99"));
    }

    #[test]
    fn mention_id_borrows_from_input() {
        let text = String::from("<#123>");
        let id = Argument::new(&text).as_channel_mention_id().unwrap();
        assert!(std::ptr::eq(id.as_ptr(), text[2..].as_ptr()));
    }

    #[test]
    fn display_and_serialize_raw() {
        let arg = Argument::new("hello");
        assert_eq!(arg.to_string(), "hello");
        assert_eq!(serde_json::to_string(&arg).unwrap(), r#""hello""#);
    }

    #[test]
    fn repeated_calls_agree() {
        let arg = Argument::new("<@5>");
        assert_eq!(arg.as_user_mention_id(), arg.as_user_mention_id());
        assert_eq!(arg.as_int(), arg.as_int());
    }
}
