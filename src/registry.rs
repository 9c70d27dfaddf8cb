//! DirectiveRegistry - named directives and their dispatch.
//!
//! Each directive is stored with its [`Parameters`] and a type-erased
//! handler. [`DirectiveRegistry::invoke`] runs one call site through the
//! pipeline:
//!
//! ```text
//! expression -> Splitter -> associate -> handler -> (compile) template substitution
//! ```
//!
//! # Thread Safety
//!
//! Registration takes `&mut self`; invocation takes `&self` and builds all
//! per-call state locally. Handlers are `Send + Sync`, so a populated
//! registry can be shared behind an `Arc`.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use directives_compiler::{NamedBindings, bind_named, bind_positional, compile};
use directives_core::{Parameters, Splitter, Syntax, is_identifier};
use directives_parser::ArgumentSplitter;

use crate::error::{DirectiveError, Result};
use crate::handler::{DirectiveMode, Handler, ParamsContext};

/// A registered directive.
#[derive(Debug, Clone)]
pub struct Directive {
    name: String,
    parameters: Parameters,
    handler: Handler,
}

impl Directive {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn mode(&self) -> DirectiveMode {
        self.handler.mode()
    }
}

/// Directive storage and dispatch.
#[derive(Debug)]
pub struct DirectiveRegistry<S = ArgumentSplitter> {
    directives: FxHashMap<String, Directive>,
    splitter: S,
    syntax: Syntax,
}

impl Default for DirectiveRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveRegistry {
    /// Create an empty registry using the reference [`ArgumentSplitter`].
    pub fn new() -> Self {
        Self::with_splitter(ArgumentSplitter::new())
    }
}

impl<S: Splitter> DirectiveRegistry<S> {
    /// Create an empty registry with a custom splitter.
    pub fn with_splitter(splitter: S) -> Self {
        Self {
            directives: FxHashMap::default(),
            splitter,
            syntax: Syntax::default(),
        }
    }

    /// Replace the placeholder/coalesce syntax.
    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a directive whose handler gets the raw expression and the
    /// positional binding of its arguments.
    pub fn params<F>(&mut self, name: &str, parameters: Parameters, handler: F) -> Result<()>
    where
        F: Fn(&ParamsContext<'_>) -> String + Send + Sync + 'static,
    {
        self.insert(name, parameters, Handler::Params(Arc::new(handler)))
    }

    /// Register a directive whose handler gets one defaulted expression per
    /// declared parameter and returns the output directly.
    pub fn make<F>(&mut self, name: &str, parameters: Parameters, handler: F) -> Result<()>
    where
        F: Fn(&NamedBindings) -> String + Send + Sync + 'static,
    {
        self.insert(name, parameters, Handler::Make(Arc::new(handler)))
    }

    /// Register a directive whose handler returns a code template; bound
    /// placeholders in it are substituted before output.
    pub fn compile<F>(&mut self, name: &str, parameters: Parameters, handler: F) -> Result<()>
    where
        F: Fn(&NamedBindings) -> String + Send + Sync + 'static,
    {
        self.insert(name, parameters, Handler::Compile(Arc::new(handler)))
    }

    fn insert(&mut self, name: &str, parameters: Parameters, handler: Handler) -> Result<()> {
        if !is_identifier(name) {
            return Err(DirectiveError::InvalidName(name.to_string()));
        }

        let mode = handler.mode();
        let directive = Directive {
            name: name.to_string(),
            parameters,
            handler,
        };

        if self.directives.insert(name.to_string(), directive).is_some() {
            debug!(directive = name, %mode, "replaced directive");
        } else {
            debug!(directive = name, %mode, "registered directive");
        }
        Ok(())
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    pub fn get(&self, name: &str) -> Option<&Directive> {
        self.directives.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.directives.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Directive> {
        self.directives.remove(name)
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.directives.keys().map(String::as_str)
    }

    // ==========================================================================
    // Dispatch
    // ==========================================================================

    /// Run the directive `name` for one call site with argument list
    /// `expression` (the text between the parentheses).
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn invoke(&self, name: &str, expression: &str) -> Result<String> {
        let directive = self
            .directives
            .get(name)
            .ok_or_else(|| DirectiveError::UnknownDirective(name.to_string()))?;

        let parsed = self
            .splitter
            .split(expression)
            .map_err(|source| DirectiveError::split(name, source))?;

        trace!(
            directive = name,
            mode = %directive.mode(),
            arguments = parsed.len(),
            "invoking directive"
        );

        let output = match &directive.handler {
            Handler::Params(handler) => {
                let parameters = bind_positional(&directive.parameters, &parsed, &self.syntax);
                handler(&ParamsContext::new(expression, &parameters))
            }
            Handler::Make(handler) => {
                let bound = bind_named(&directive.parameters, &parsed, &self.syntax);
                handler(&bound)
            }
            Handler::Compile(handler) => {
                let bound = bind_named(&directive.parameters, &parsed, &self.syntax);
                let template = handler(&bound);
                compile(&template, &bound, &self.syntax)
            }
        };

        Ok(output)
    }
}
