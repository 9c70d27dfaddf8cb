//! Type-erased directive handlers.
//!
//! Handlers receive their arguments explicitly: a [`ParamsContext`] for
//! `params` directives, the [`NamedBindings`] for `make` and `compile`
//! directives. Nothing is bound to an implicit receiver.

use std::fmt;
use std::sync::Arc;

use directives_compiler::NamedBindings;

/// What a `params` handler sees: the raw expression plus the positional
/// binding of its arguments.
#[derive(Debug, Clone, Copy)]
pub struct ParamsContext<'a> {
    expression: &'a str,
    parameters: &'a [String],
}

impl<'a> ParamsContext<'a> {
    pub(crate) fn new(expression: &'a str, parameters: &'a [String]) -> Self {
        Self {
            expression,
            parameters,
        }
    }

    /// The argument list exactly as written at the call site.
    pub fn expression(&self) -> &'a str {
        self.expression
    }

    /// Bound argument expressions in order.
    pub fn parameters(&self) -> &'a [String] {
        self.parameters
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.parameters.get(index).map(String::as_str)
    }
}

/// How a directive's arguments are bound and its result post-processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveMode {
    /// Raw expression plus positional parameters.
    Params,
    /// Named, defaulted invocation; the result is emitted as-is.
    Make,
    /// Named, defaulted invocation; the result is a template that gets
    /// its placeholders substituted.
    Compile,
}

impl fmt::Display for DirectiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveMode::Params => f.write_str("params"),
            DirectiveMode::Make => f.write_str("make"),
            DirectiveMode::Compile => f.write_str("compile"),
        }
    }
}

type ParamsFn = dyn Fn(&ParamsContext<'_>) -> String + Send + Sync;
type BoundFn = dyn Fn(&NamedBindings) -> String + Send + Sync;

/// A stored handler together with its mode.
///
/// Cloning shares the underlying callable.
#[derive(Clone)]
pub(crate) enum Handler {
    Params(Arc<ParamsFn>),
    Make(Arc<BoundFn>),
    Compile(Arc<BoundFn>),
}

impl Handler {
    pub(crate) fn mode(&self) -> DirectiveMode {
        match self {
            Handler::Params(_) => DirectiveMode::Params,
            Handler::Make(_) => DirectiveMode::Make,
            Handler::Compile(_) => DirectiveMode::Compile,
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler").field(&self.mode()).finish()
    }
}
