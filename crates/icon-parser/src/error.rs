//! Parse error types.

use thiserror::Error;

/// An error that occurred while parsing one icon source.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(kind: ParseErrorKind) -> Self {
        Self { kind }
    }
}

/// The kind of parse error.
///
/// All variants are malformed-source conditions: the caller skips the
/// file and continues with the rest of the batch.
#[derive(Debug, Clone, Error)]
pub enum ParseErrorKind {
    /// The source contains no `<svg>` opening tag.
    #[error("malformed source: no <svg> opening tag found")]
    MissingRoot,

    /// The `<svg>` opening tag has no matching `</svg>`.
    #[error("malformed source: missing </svg> closing tag")]
    UnclosedRoot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ParseError::new(ParseErrorKind::MissingRoot);
        assert_eq!(
            error.to_string(),
            "malformed source: no <svg> opening tag found"
        );
    }
}
