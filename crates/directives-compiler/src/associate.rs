//! Binding parsed arguments to declared parameters.
//!
//! # Matching rules
//!
//! Let `k` be the index of the first named argument.
//!
//! - Arguments before `k` bind by position to `declared[0..k]`.
//! - Each `declared[i]` with `i >= k` takes the value of the first named
//!   argument carrying its name. Later duplicates and names with no matching
//!   parameter are ignored. Arguments from `k` onward never bind by position.
//! - A parameter nobody supplied gets the null literal. In positional mode a
//!   parameter at `i >= k` gets its default source text instead, since no
//!   later step wraps it.
//!
//! In named mode each parameter with a default is then wrapped as
//! `((raw) ?? (default))`, so a present-but-null argument still falls back.

use directives_core::{ParsedArgument, Parameters, Syntax};
use tracing::trace;

use crate::{BoundArguments, NamedBindings};

/// Which shape of [`BoundArguments`] to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindMode {
    /// One defaulted expression per declared parameter, keyed by name.
    #[default]
    Named,
    /// The caller's raw argument list, without defaulting wrappers.
    Positional,
}

/// Bind `parsed` to `declared` in the requested mode.
pub fn associate(
    declared: &Parameters,
    parsed: &[ParsedArgument],
    mode: BindMode,
    syntax: &Syntax,
) -> BoundArguments {
    match mode {
        BindMode::Named => BoundArguments::Named(bind_named(declared, parsed, syntax)),
        BindMode::Positional => {
            BoundArguments::Positional(bind_positional(declared, parsed, syntax))
        }
    }
}

/// Name-keyed binding: every declared parameter gets a final expression.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn bind_named(
    declared: &Parameters,
    parsed: &[ParsedArgument],
    syntax: &Syntax,
) -> NamedBindings {
    if declared.is_empty() {
        return NamedBindings::new();
    }

    let values = raw_values(declared, parsed, BindMode::Named, syntax);

    declared
        .iter()
        .enumerate()
        .map(|(i, param)| {
            let raw = values
                .get(i)
                .map(String::as_str)
                .unwrap_or(&syntax.null_literal);

            let expression = match param.default_value() {
                Some(default) => syntax.coalesce_expr(raw, &default.to_source()),
                None => raw.to_string(),
            };

            (param.name(), expression)
        })
        .collect()
}

/// Positional binding: the caller's expressions, in order.
///
/// The result can be longer than `declared` when extra positional arguments
/// were supplied.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn bind_positional(
    declared: &Parameters,
    parsed: &[ParsedArgument],
    syntax: &Syntax,
) -> Vec<String> {
    if declared.is_empty() {
        return Vec::new();
    }

    raw_values(declared, parsed, BindMode::Positional, syntax)
}

fn raw_values(
    declared: &Parameters,
    parsed: &[ParsedArgument],
    mode: BindMode,
    syntax: &Syntax,
) -> Vec<String> {
    let Some(named_start) = parsed.iter().position(ParsedArgument::is_named) else {
        return parsed.iter().map(|arg| arg.value.clone()).collect();
    };

    let (positional, named) = parsed.split_at(named_start);
    let mut values: Vec<String> = positional.iter().map(|arg| arg.value.clone()).collect();

    for param in declared.iter().skip(named_start) {
        let matched = named
            .iter()
            .find(|arg| arg.name.as_deref() == Some(param.name()));

        let value = match (matched, mode) {
            (Some(arg), _) => arg.value.clone(),
            (None, BindMode::Positional) => param
                .default_expression()
                .unwrap_or_else(|| syntax.null_literal.clone()),
            (None, BindMode::Named) => syntax.null_literal.clone(),
        };
        values.push(value);
    }

    for arg in named {
        let name = arg.name.as_deref().unwrap_or_default();
        if !declared.names().skip(named_start).any(|n| n == name) {
            trace!(argument = name, "ignoring unmatched named argument");
        }
    }

    values
}
