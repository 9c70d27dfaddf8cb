//! Errors surfaced by the directive registry.

use thiserror::Error;

use directives_core::{ContractError, SplitError};

pub type Result<T> = std::result::Result<T, DirectiveError>;

/// Top-level error for registration and dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    /// No directive is registered under this name.
    #[error("unknown directive '@{0}'")]
    UnknownDirective(String),

    /// A directive name that the host could never call.
    #[error("invalid directive name '{0}'")]
    InvalidName(String),

    /// The directive's argument list could not be split.
    #[error("directive '@{directive}': {source}")]
    Split {
        directive: String,
        #[source]
        source: SplitError,
    },

    /// A parameter declaration broke the descriptor contract.
    #[error(transparent)]
    Contract(#[from] ContractError),
}

impl DirectiveError {
    pub(crate) fn split(directive: &str, source: SplitError) -> Self {
        DirectiveError::Split {
            directive: directive.to_string(),
            source,
        }
    }
}
