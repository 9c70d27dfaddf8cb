//! Placeholder substitution in handler-returned code templates.
//!
//! Substitution runs in three phases so escapes always win:
//!
//! 1. every escaped placeholder of every bound name is swapped for an
//!    escape key (see [`NameHash::escape_key`]);
//! 2. one left-to-right pass replaces unescaped placeholders with their
//!    expressions, never re-scanning inserted text;
//! 3. escape keys are restored to the literal placeholder text.
//!
//! A placeholder only matches a whole identifier: with `value` bound,
//! `$values` is left alone.

use std::borrow::Cow;

use directives_core::{NameHash, Syntax, identifier_len, is_ident_continue};
use rustc_hash::FxHashMap;

use crate::NamedBindings;

/// Name to expression lookup for a single compile call.
///
/// Consumed by [`SubstitutionContext::compile`]; build a fresh one per
/// invocation.
#[derive(Debug)]
pub struct SubstitutionContext<'a> {
    syntax: &'a Syntax,
    bindings: FxHashMap<&'a str, &'a str>,
}

impl<'a> SubstitutionContext<'a> {
    pub fn new(syntax: &'a Syntax) -> Self {
        Self {
            syntax,
            bindings: FxHashMap::default(),
        }
    }

    /// Context holding every binding in `bindings`.
    pub fn from_bindings(bindings: &'a NamedBindings, syntax: &'a Syntax) -> Self {
        let mut ctx = Self::new(syntax);
        for (name, expression) in bindings.iter() {
            ctx.bind(name, expression);
        }
        ctx
    }

    /// Bind `name` to `expression`. The first binding for a name is kept.
    pub fn bind(&mut self, name: &'a str, expression: &'a str) {
        self.bindings.entry(name).or_insert(expression);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Substitute bound placeholders in `template`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile(self, template: &str) -> String {
        if self.bindings.is_empty() {
            return template.to_string();
        }

        // Phase 1: hide escaped placeholders behind escape keys.
        let mut escaped: Vec<(String, String)> = Vec::new();
        let mut code = Cow::Borrowed(template);

        for &name in self.bindings.keys() {
            let token = self.syntax.escaped_placeholder(name);
            if !code.contains(token.as_str()) {
                continue;
            }

            let key = self.unique_key(name, &escaped);
            let replaced = match replace_token(&code, &token, &key) {
                Cow::Owned(replaced) => replaced,
                Cow::Borrowed(_) => continue,
            };
            code = Cow::Owned(replaced);
            escaped.push((key, self.syntax.placeholder(name)));
        }

        // Phase 2: single substitution pass.
        let mut output = self.substitute(&code);

        // Phase 3: restore escaped placeholders.
        for (key, literal) in &escaped {
            output = output.replace(key.as_str(), literal);
        }

        output
    }

    fn substitute(&self, code: &str) -> String {
        let sigil = self.syntax.sigil;
        let mut output = String::with_capacity(code.len() * 2);
        let mut rest = code;

        while let Some(at) = rest.find(sigil) {
            let (before, from_sigil) = rest.split_at(at);
            output.push_str(before);

            let after_sigil = &from_sigil[sigil.len_utf8()..];
            let ident_len = identifier_len(after_sigil);
            let ident = &after_sigil[..ident_len];

            match self.bindings.get(ident) {
                Some(expression) if ident_len > 0 => output.push_str(expression),
                _ => {
                    output.push(sigil);
                    output.push_str(ident);
                }
            }

            rest = &after_sigil[ident_len..];
        }

        output.push_str(rest);
        output
    }

    /// Escape key for `name`, rehashed if two names ever collide.
    fn unique_key(&self, name: &str, taken: &[(String, String)]) -> String {
        let mut hash = NameHash::from_name(name);
        loop {
            let key = hash.escape_key();
            if !taken.iter().any(|(k, _)| *k == key) {
                return key;
            }
            hash = NameHash(hash.0.wrapping_add(1));
        }
    }
}

/// Substitute every bound `$name` in `template` with its expression.
pub fn compile(template: &str, bindings: &NamedBindings, syntax: &Syntax) -> String {
    SubstitutionContext::from_bindings(bindings, syntax).compile(template)
}

/// Replace whole-identifier occurrences of `token`. Borrows when nothing matched.
fn replace_token<'t>(text: &'t str, token: &str, replacement: &str) -> Cow<'t, str> {
    let mut output = String::new();
    let mut last = 0;
    let mut replaced = false;

    for (at, _) in text.match_indices(token) {
        let end = at + token.len();
        if text[end..].chars().next().is_some_and(is_ident_continue) {
            continue;
        }
        output.push_str(&text[last..at]);
        output.push_str(replacement);
        last = end;
        replaced = true;
    }

    if !replaced {
        return Cow::Borrowed(text);
    }

    output.push_str(&text[last..]);
    Cow::Owned(output)
}
