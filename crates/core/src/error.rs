//! Typed failures for scalar coercion.

/// A token could not be coerced to the requested scalar type.
///
/// These represent ordinary user-input mistakes. Command handlers are
/// expected to match on the variant and reply accordingly.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    /// The text is not a recognized boolean literal.
    #[error("invalid boolean: {input:?}")]
    InvalidBoolean {
        /// The text that failed to parse.
        input: String,
    },

    /// The text is empty or is not a decimal integer.
    #[error("invalid integer: {input:?}")]
    InvalidInteger {
        /// The text that failed to parse.
        input: String,
    },

    /// The text is a well-formed integer that does not fit the target width.
    #[error("integer out of range for {target}: {input:?}")]
    OutOfRange {
        /// The text that failed to parse.
        input: String,
        /// Name of the requested integer type (`"i32"` or `"i64"`).
        target: &'static str,
    },
}

impl ParseFailure {
    /// The offending input text.
    pub fn input(&self) -> &str {
        match self {
            ParseFailure::InvalidBoolean { input }
            | ParseFailure::InvalidInteger { input }
            | ParseFailure::OutOfRange { input, .. } => input,
        }
    }

    /// Returns `true` for failures raised by integer coercion.
    pub fn is_integer_failure(&self) -> bool {
        matches!(
            self,
            ParseFailure::InvalidInteger { .. } | ParseFailure::OutOfRange { .. }
        )
    }
}
