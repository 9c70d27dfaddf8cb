use crate::SplitError;

/// One sub-expression extracted from a raw argument list.
///
/// `name` is set when the caller wrote `name => value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgument {
    pub value: String,
    pub name: Option<String>,
}

impl ParsedArgument {
    /// A positional argument.
    pub fn positional(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: None,
        }
    }

    /// A named argument.
    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: Some(name.into()),
        }
    }

    #[inline]
    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }
}

/// Turns a raw argument-list source string into ordered sub-expressions.
///
/// Implementations must balance nested brackets and quotes, recognise
/// `identifier => expr` as a named argument, never reorder entries, and
/// return an empty list for empty or whitespace-only input.
pub trait Splitter {
    fn split(&self, source: &str) -> Result<Vec<ParsedArgument>, SplitError>;
}

impl<F> Splitter for F
where
    F: Fn(&str) -> Result<Vec<ParsedArgument>, SplitError>,
{
    fn split(&self, source: &str) -> Result<Vec<ParsedArgument>, SplitError> {
        (self)(source)
    }
}
