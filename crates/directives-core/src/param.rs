//! Declared parameters of a directive handler.

use std::ops::Index;

use crate::{ContractError, DefaultValue, is_identifier};

/// Static metadata about one declared parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    name: String,
    default: Option<DefaultValue>,
}

impl ParameterDescriptor {
    /// A parameter without a default.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// A parameter that falls back to `default` when the caller omits it.
    pub fn optional(name: impl Into<String>, default: impl Into<DefaultValue>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    #[inline]
    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    /// The default rendered as source text, if there is one.
    pub fn default_expression(&self) -> Option<String> {
        self.default.as_ref().map(DefaultValue::to_source)
    }
}

/// An ordered parameter list with unique, well-formed names.
///
/// Construction is the only place the descriptor contract is checked, so
/// everything downstream can treat a `Parameters` value as valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    params: Vec<ParameterDescriptor>,
}

impl Parameters {
    /// Validate and wrap a descriptor list.
    pub fn new(
        params: impl IntoIterator<Item = ParameterDescriptor>,
    ) -> Result<Self, ContractError> {
        let params: Vec<_> = params.into_iter().collect();

        for (position, param) in params.iter().enumerate() {
            if param.name.is_empty() {
                return Err(ContractError::EmptyName { position });
            }
            if !is_identifier(&param.name) {
                return Err(ContractError::InvalidName {
                    name: param.name.clone(),
                });
            }
            if let Some(first) = params[..position].iter().position(|p| p.name == param.name) {
                return Err(ContractError::DuplicateParameter {
                    name: param.name.clone(),
                    first,
                    second: position,
                });
            }
        }

        Ok(Self { params })
    }

    /// A handler that declares no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ParameterDescriptor> {
        self.params.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParameterDescriptor> {
        self.params.iter()
    }

    pub fn as_slice(&self) -> &[ParameterDescriptor] {
        &self.params
    }

    /// Parameter names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(ParameterDescriptor::name)
    }
}

impl Index<usize> for Parameters {
    type Output = ParameterDescriptor;

    fn index(&self, index: usize) -> &Self::Output {
        &self.params[index]
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a ParameterDescriptor;
    type IntoIter = std::slice::Iter<'a, ParameterDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
