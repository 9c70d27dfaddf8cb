//! Owned default values for declared parameters.
//!
//! A handler declares the default of an optional parameter as a
//! [`DefaultValue`]. The associator never evaluates it: it only needs the
//! host-language source text, which `Display` produces in export form.
//!
//! # Example
//!
//! ```
//! use directives_core::DefaultValue;
//!
//! assert_eq!(DefaultValue::string("1234").to_string(), "'1234'");
//! assert_eq!(DefaultValue::list(vec![]).to_string(), "array (\n)");
//! assert_eq!(DefaultValue::constant("PHP_EOL").to_string(), "PHP_EOL");
//! ```

use std::fmt::{self, Write};

/// Default value of a declared parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    // === Scalars ===
    /// `NULL`
    Null,

    /// `true` / `false`
    Bool(bool),

    /// Integer literal.
    Int(i64),

    /// Floating-point literal. Integral values keep a `.0` suffix.
    Float(f64),

    /// String literal, exported single-quoted.
    String(String),

    // === Compound ===
    /// Sequential array; keys are the element positions.
    List(Vec<DefaultValue>),

    /// Keyed array in insertion order.
    Map(Vec<(DefaultValue, DefaultValue)>),

    // === Symbolic ===
    /// Reference to a named constant, e.g. `PHP_EOL` or `Config::LIMIT`.
    Constant(String),

    /// Source text inserted verbatim.
    Raw(String),
}

impl DefaultValue {
    #[inline]
    pub fn null() -> Self {
        DefaultValue::Null
    }

    #[inline]
    pub fn bool(value: bool) -> Self {
        DefaultValue::Bool(value)
    }

    #[inline]
    pub fn int(value: i64) -> Self {
        DefaultValue::Int(value)
    }

    #[inline]
    pub fn float(value: f64) -> Self {
        DefaultValue::Float(value)
    }

    #[inline]
    pub fn string(value: impl Into<String>) -> Self {
        DefaultValue::String(value.into())
    }

    #[inline]
    pub fn list(items: Vec<DefaultValue>) -> Self {
        DefaultValue::List(items)
    }

    #[inline]
    pub fn map(entries: Vec<(DefaultValue, DefaultValue)>) -> Self {
        DefaultValue::Map(entries)
    }

    #[inline]
    pub fn constant(name: impl Into<String>) -> Self {
        DefaultValue::Constant(name.into())
    }

    #[inline]
    pub fn raw(source: impl Into<String>) -> Self {
        DefaultValue::Raw(source.into())
    }

    /// Render the value as host-language source text.
    pub fn to_source(&self) -> String {
        self.to_string()
    }

    fn write_export(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        match self {
            DefaultValue::Null => f.write_str("NULL"),
            DefaultValue::Bool(v) => write!(f, "{}", v),
            DefaultValue::Int(v) => write!(f, "{}", v),
            DefaultValue::Float(v) => write_float(f, *v),
            DefaultValue::String(v) => write_quoted(f, v),
            DefaultValue::List(items) => {
                let entries = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| (KeyRef::Index(i), item));
                write_array(f, entries, indent)
            }
            DefaultValue::Map(entries) => {
                let entries = entries.iter().map(|(k, v)| (KeyRef::Value(k), v));
                write_array(f, entries, indent)
            }
            DefaultValue::Constant(name) => f.write_str(name),
            DefaultValue::Raw(source) => f.write_str(source),
        }
    }

    fn is_array(&self) -> bool {
        matches!(self, DefaultValue::List(_) | DefaultValue::Map(_))
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_export(f, 0)
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::String(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        DefaultValue::String(value)
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Int(value)
    }
}

impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        DefaultValue::Int(value.into())
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Bool(value)
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        DefaultValue::Float(value)
    }
}

enum KeyRef<'a> {
    Index(usize),
    Value(&'a DefaultValue),
}

fn write_array<'a>(
    f: &mut fmt::Formatter<'_>,
    entries: impl Iterator<Item = (KeyRef<'a>, &'a DefaultValue)>,
    indent: usize,
) -> fmt::Result {
    let pad = " ".repeat(indent);
    f.write_str("array (\n")?;
    for (key, value) in entries {
        write!(f, "{}  ", pad)?;
        match key {
            KeyRef::Index(i) => write!(f, "{}", i)?,
            KeyRef::Value(k) => k.write_export(f, indent + 2)?,
        }
        if value.is_array() {
            write!(f, " => \n{}  ", pad)?;
        } else {
            f.write_str(" => ")?;
        }
        value.write_export(f, indent + 2)?;
        f.write_str(",\n")?;
    }
    write!(f, "{})", pad)
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('\'')?;
    for ch in value.chars() {
        if ch == '\'' || ch == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(ch)?;
    }
    f.write_char('\'')
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NAN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "INF" } else { "-INF" })
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        write!(f, "{:.1}", value)
    } else {
        write!(f, "{}", value)
    }
}
