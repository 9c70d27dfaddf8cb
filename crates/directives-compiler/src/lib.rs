//! Argument binding and template substitution for directives.
//!
//! Two pure, synchronous passes run for every directive invocation:
//!
//! 1. [`associate`] binds the splitter's [`ParsedArgument`]s to a handler's
//!    declared [`Parameters`], by position or by name, with defaults.
//! 2. [`compile`] rewrites the handler's returned code template, replacing
//!    `$name` placeholders with the bound expressions while leaving
//!    escaped `\$name` occurrences as literal text.
//!
//! # Example
//!
//! ```
//! use directives_compiler::{bind_named, compile};
//! use directives_core::{ParameterDescriptor, Parameters, ParsedArgument, Syntax};
//!
//! let syntax = Syntax::default();
//! let params = Parameters::new([
//!     ParameterDescriptor::required("name"),
//!     ParameterDescriptor::optional("default", "1234"),
//! ])
//! .unwrap();
//!
//! let bound = bind_named(&params, &[ParsedArgument::positional("$varName")], &syntax);
//! assert_eq!(bound.get("name"), Some("$varName"));
//! assert_eq!(bound.get("default"), Some("((null) ?? ('1234'))"));
//!
//! let code = compile("echo $name; echo \\$name;", &bound, &syntax);
//! assert_eq!(code, "echo $varName; echo $name;");
//! ```
//!
//! [`ParsedArgument`]: directives_core::ParsedArgument
//! [`Parameters`]: directives_core::Parameters

mod associate;
mod bound;
mod template;

pub use associate::{BindMode, associate, bind_named, bind_positional};
pub use bound::{BoundArguments, NamedBindings};
pub use template::{SubstitutionContext, compile};
