//! Results of argument association.

/// Name-keyed bound expressions, one per declared parameter, in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedBindings {
    entries: Vec<(String, String)>,
}

impl NamedBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding. Names are expected to be unique; lookups return
    /// the first entry for a name.
    pub fn push(&mut self, name: impl Into<String>, expression: impl Into<String>) {
        self.entries.push((name.into(), expression.into()));
    }

    /// Bound expression for a parameter name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, expr)| expr.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, expression)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, e)| (n.as_str(), e.as_str()))
    }

    /// Bound expressions in declaration order.
    pub fn expressions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, e)| e.as_str())
    }
}

impl<N, E> FromIterator<(N, E)> for NamedBindings
where
    N: Into<String>,
    E: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, E)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(n, e)| (n.into(), e.into()))
                .collect(),
        }
    }
}

/// Bound arguments for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundArguments {
    /// Every declared parameter with its final, defaulted expression.
    Named(NamedBindings),
    /// The caller's raw expressions, with named matches and inlined defaults
    /// appended after the positional ones.
    Positional(Vec<String>),
}

impl BoundArguments {
    pub fn len(&self) -> usize {
        match self {
            BoundArguments::Named(bindings) => bindings.len(),
            BoundArguments::Positional(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_named(&self) -> Option<&NamedBindings> {
        match self {
            BoundArguments::Named(bindings) => Some(bindings),
            BoundArguments::Positional(_) => None,
        }
    }

    pub fn as_positional(&self) -> Option<&[String]> {
        match self {
            BoundArguments::Named(_) => None,
            BoundArguments::Positional(values) => Some(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_bindings_keep_declaration_order() {
        let bindings: NamedBindings = [("b", "2"), ("a", "1")].into_iter().collect();

        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.get("a"), Some("1"));
        assert_eq!(bindings.get("c"), None);
        assert_eq!(bindings.expressions().collect::<Vec<_>>(), vec!["2", "1"]);
    }

    #[test]
    fn bound_arguments_accessors() {
        let named = BoundArguments::Named(NamedBindings::new());
        assert!(named.is_empty());
        assert!(named.as_named().is_some());
        assert!(named.as_positional().is_none());

        let positional = BoundArguments::Positional(vec!["'a'".to_string()]);
        assert_eq!(positional.len(), 1);
        assert_eq!(positional.as_positional(), Some(&["'a'".to_string()][..]));
    }
}
