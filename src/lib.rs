//! Custom template directives with bound, defaulted arguments.
//!
//! A directive is registered with an explicit [`Parameters`] list and a
//! handler. At each call site the raw argument list is split, bound to the
//! parameters (by position, by `name => value`, or by default) and handed
//! to the handler. `compile` directives additionally get their returned
//! code template rewritten: `$name` placeholders become the bound
//! expressions, while `\$name` stays as the literal `$name`.
//!
//! # Example
//!
//! ```
//! use directives::{DirectiveRegistry, ParameterDescriptor, Parameters};
//!
//! let mut registry = DirectiveRegistry::new();
//! registry
//!     .compile(
//!         "each",
//!         Parameters::new([ParameterDescriptor::required("items")]).unwrap(),
//!         |_| "foreach ($items as $item) { echo $item; }".to_string(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(
//!     registry.invoke("each", "range(1, 3)").unwrap(),
//!     "foreach (range(1, 3) as $item) { echo $item; }"
//! );
//! ```
//!
//! The building blocks live in their own crates and are re-exported here:
//! [`directives_core`] (data model), [`directives_parser`] (argument
//! splitting) and [`directives_compiler`] (binding and substitution).

mod error;
mod expand;
mod handler;
mod registry;

pub use error::{DirectiveError, Result};
pub use handler::{DirectiveMode, ParamsContext};
pub use registry::{Directive, DirectiveRegistry};

pub use directives_compiler::{
    BindMode, BoundArguments, NamedBindings, SubstitutionContext, associate, bind_named,
    bind_positional, compile,
};
pub use directives_core::{
    ContractError, DefaultValue, ParameterDescriptor, Parameters, ParsedArgument, Span,
    SplitError, Splitter, Syntax,
};
pub use directives_parser::{ArgumentSplitter, split};
