//! Reference splitter for directive argument lists.
//!
//! [`ArgumentSplitter`] turns the raw text between a directive's parentheses
//! into ordered [`ParsedArgument`](directives_core::ParsedArgument)s:
//!
//! - top-level commas separate arguments
//! - brackets and quoted strings nest and are kept verbatim
//! - `name => value` at the top level is a named argument
//!
//! # Example
//!
//! ```
//! use directives_core::{ParsedArgument, Splitter};
//! use directives_parser::ArgumentSplitter;
//!
//! let args = ArgumentSplitter::new()
//!     .split("$items, limit => min(3, $max)")
//!     .unwrap();
//!
//! assert_eq!(args, vec![
//!     ParsedArgument::positional("$items"),
//!     ParsedArgument::named("limit", "min(3, $max)"),
//! ]);
//! ```

mod cursor;
mod splitter;

pub use splitter::{ArgumentSplitter, matching_close, split};
