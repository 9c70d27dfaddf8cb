//! Expansion of `@name(args)` call sites in host template source.
//!
//! This is the thin host pass that finds directive call sites and replaces
//! each with its output. Only registered directives are touched:
//!
//! - `@name(...)` and `@name` (no argument list) invoke the directive;
//!   spaces or tabs may separate the name from `(`
//! - `@@name` is an escaped call site and becomes the literal `@name`
//! - an `@` preceded by an identifier character (`user@example`) is text

use directives_core::{Splitter, identifier_len, is_ident_continue};
use directives_parser::matching_close;

use crate::error::{DirectiveError, Result};
use crate::registry::DirectiveRegistry;

impl<S: Splitter> DirectiveRegistry<S> {
    /// Replace every registered directive call site in `source`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn expand(&self, source: &str) -> Result<String> {
        let mut output = String::with_capacity(source.len());
        let mut pos = 0;

        while let Some(offset) = source[pos..].find('@') {
            let at = pos + offset;
            output.push_str(&source[pos..at]);

            let after = &source[at + 1..];
            let glued = source[..at]
                .chars()
                .next_back()
                .is_some_and(is_ident_continue);

            if glued {
                output.push('@');
                pos = at + 1;
                continue;
            }

            if let Some(escaped) = after.strip_prefix('@') {
                let len = identifier_len(escaped);
                output.push('@');
                output.push_str(&escaped[..len]);
                pos = at + 2 + len;
                continue;
            }

            let name = &after[..identifier_len(after)];
            let mut end = at + 1 + name.len();

            if name.is_empty() || !self.contains(name) {
                output.push('@');
                output.push_str(name);
                pos = end;
                continue;
            }

            let tail = &source[end..];
            let gap = tail.len() - tail.trim_start_matches([' ', '\t']).len();
            let group = &tail[gap..];

            let mut expression = "";
            if group.starts_with('(') {
                let close =
                    matching_close(group).map_err(|err| DirectiveError::split(name, err))?;
                expression = &group[1..close - 1];
                end += gap + close;
            }

            output.push_str(&self.invoke(name, expression)?);
            pos = end;
        }

        output.push_str(&source[pos..]);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use directives_core::{ParameterDescriptor, Parameters};

    use crate::DirectiveRegistry;

    fn registry() -> DirectiveRegistry {
        let mut registry = DirectiveRegistry::new();
        registry
            .make(
                "upper",
                Parameters::new([ParameterDescriptor::required("value")]).unwrap(),
                |args| format!("<?php echo strtoupper({}); ?>", args.get("value").unwrap_or_default()),
            )
            .unwrap();
        registry
            .make("now", Parameters::empty(), |_| "<?php echo time(); ?>".to_string())
            .unwrap();
        registry
    }

    #[test]
    fn expands_registered_call_sites() {
        let out = registry()
            .expand("<p>@upper($name)</p> <p>@upper ('a, b')</p>")
            .unwrap();
        assert_eq!(
            out,
            "<p><?php echo strtoupper($name); ?></p> <p><?php echo strtoupper('a, b'); ?></p>"
        );
    }

    #[test]
    fn call_site_without_arguments() {
        assert_eq!(registry().expand("at @now.").unwrap(), "at <?php echo time(); ?>.");
    }

    #[test]
    fn leaves_other_text_alone() {
        let source = "mail user@upper.com, @unknown($x), @ alone, @@upper($x)";
        assert_eq!(
            registry().expand(source).unwrap(),
            "mail user@upper.com, @unknown($x), @ alone, @upper($x)"
        );
    }

    #[test]
    fn nested_parentheses_in_arguments() {
        let out = registry()
            .expand("@upper(implode(')', [$a, ')']))!")
            .unwrap();
        assert_eq!(out, "<?php echo strtoupper(implode(')', [$a, ')'])); ?>!");
    }

    #[test]
    fn unclosed_argument_list_is_an_error() {
        assert!(registry().expand("@upper($a").is_err());
    }
}
