//! Core types shared by the directive crates.
//!
//! This crate holds the data model that the splitter, the argument
//! associator and the template compiler exchange:
//!
//! - [`ParsedArgument`] and the [`Splitter`] seam
//! - [`ParameterDescriptor`], the validated [`Parameters`] list and [`DefaultValue`]
//! - [`Syntax`], the placeholder/escape/coalesce configuration
//! - [`NameHash`], deterministic name hashing used for escape keys
//! - Error types for each phase

mod argument;
mod default_value;
pub mod error;
mod ident;
mod name_hash;
mod param;
mod span;
mod syntax;

pub use argument::{ParsedArgument, Splitter};
pub use default_value::DefaultValue;
pub use error::{ContractError, SplitError};
pub use ident::{identifier_len, is_ident_continue, is_ident_start, is_identifier};
pub use name_hash::NameHash;
pub use param::{ParameterDescriptor, Parameters};
pub use span::Span;
pub use syntax::Syntax;
