//! Error types for the directive crates.
//!
//! ```text
//! ContractError - malformed parameter declarations (programming errors)
//! SplitError    - argument-list source the splitter cannot separate
//! ```
//!
//! Missing arguments and unmatched named arguments are not errors; the
//! associator resolves them to fillers or ignores them.

use thiserror::Error;

use crate::Span;

// ============================================================================
// Contract Errors
// ============================================================================

/// A parameter declaration violates the descriptor-list contract.
///
/// These are raised when a handler's [`Parameters`](crate::Parameters) are
/// built, never during an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// Two descriptors in one list share a name.
    #[error("duplicate parameter '{name}' at positions {first} and {second}")]
    DuplicateParameter {
        name: String,
        first: usize,
        second: usize,
    },

    /// A descriptor has an empty name.
    #[error("parameter at position {position} has an empty name")]
    EmptyName { position: usize },

    /// A descriptor name is not a valid identifier.
    #[error("parameter name '{name}' is not a valid identifier")]
    InvalidName { name: String },
}

// ============================================================================
// Split Errors
// ============================================================================

/// Errors raised while splitting an argument list into sub-expressions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// A quoted string was not terminated.
    #[error("unterminated string at {span}")]
    UnterminatedString { span: Span },

    /// An opening bracket was never closed.
    #[error("unclosed '{open}' at {span}")]
    UnclosedBracket { open: char, span: Span },

    /// A closing bracket did not match the innermost open bracket.
    #[error("mismatched '{found}' at {span}, expected '{expected}'")]
    MismatchedBracket {
        found: char,
        expected: char,
        span: Span,
    },

    /// A closing bracket appeared with nothing open.
    #[error("unexpected '{found}' at {span}")]
    UnexpectedClose { found: char, span: Span },

    /// Two separators with no expression between them.
    #[error("empty argument at {span}")]
    EmptyArgument { span: Span },

    /// A positional argument followed a named one.
    #[error("positional argument at {span} follows a named argument")]
    PositionalAfterNamed { span: Span },
}

impl SplitError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            SplitError::UnterminatedString { span } => *span,
            SplitError::UnclosedBracket { span, .. } => *span,
            SplitError::MismatchedBracket { span, .. } => *span,
            SplitError::UnexpectedClose { span, .. } => *span,
            SplitError::EmptyArgument { span } => *span,
            SplitError::PositionalAfterNamed { span } => *span,
        }
    }
}
