//! Host-language syntax used when binding and substituting.

/// Placeholder, escape and coalescing syntax.
///
/// The defaults match PHP-flavoured templates: `$name` placeholders,
/// `\$name` escapes, `null` as the absent value and `??` for coalescing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    /// Character that introduces a placeholder.
    pub sigil: char,
    /// Text that, written before a placeholder, makes it literal.
    pub escape: String,
    /// Expression standing in for a missing argument.
    pub null_literal: String,
    /// Short-circuit coalescing operator.
    pub coalesce: String,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            sigil: '$',
            escape: "\\".to_string(),
            null_literal: "null".to_string(),
            coalesce: "??".to_string(),
        }
    }
}

impl Syntax {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sigil(mut self, sigil: char) -> Self {
        self.sigil = sigil;
        self
    }

    pub fn with_escape(mut self, escape: impl Into<String>) -> Self {
        self.escape = escape.into();
        self
    }

    pub fn with_null_literal(mut self, null_literal: impl Into<String>) -> Self {
        self.null_literal = null_literal.into();
        self
    }

    pub fn with_coalesce(mut self, coalesce: impl Into<String>) -> Self {
        self.coalesce = coalesce.into();
        self
    }

    /// `$name`
    pub fn placeholder(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 1);
        out.push(self.sigil);
        out.push_str(name);
        out
    }

    /// `\$name`
    pub fn escaped_placeholder(&self, name: &str) -> String {
        let mut out = String::with_capacity(self.escape.len() + name.len() + 1);
        out.push_str(&self.escape);
        out.push(self.sigil);
        out.push_str(name);
        out
    }

    /// `((raw) ?? (fallback))`
    pub fn coalesce_expr(&self, raw: &str, fallback: &str) -> String {
        format!("(({}) {} ({}))", raw, self.coalesce, fallback)
    }
}
