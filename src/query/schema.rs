//! Typed filter declarations for a view.
//!
//! A [`ParameterSchema`] is built once per view and never mutated afterwards.
//! It knows which filter fields exist, how their raw text is coerced, and in
//! which order they appear in outgoing requests.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{CensoError, Result};

/// Primitive type of a filter field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Boolean,
    Integer,
    Text,
}

impl ParameterKind {
    /// Human-readable description of the accepted input
    pub fn expected(self) -> &'static str {
        match self {
            ParameterKind::Boolean => "'true' or 'false'",
            ParameterKind::Integer => "a whole number",
            ParameterKind::Text => "text",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterKind::Boolean => write!(f, "boolean"),
            ParameterKind::Integer => write!(f, "integer"),
            ParameterKind::Text => write!(f, "text"),
        }
    }
}

/// Whether a filter must be filled in before a query can be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Required,
    Optional,
    /// Member of a selector group: exactly one member must be set
    Choice,
}

/// Declaration of a single filter field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    pub name: String,
    pub kind: ParameterKind,
    pub label: String,
    pub presence: Presence,
}

impl ParameterDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: ParameterKind,
        label: impl Into<String>,
        presence: Presence,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            label: label.into(),
            presence,
        }
    }

    pub fn required(name: impl Into<String>, kind: ParameterKind, label: impl Into<String>) -> Self {
        Self::new(name, kind, label, Presence::Required)
    }

    pub fn optional(name: impl Into<String>, kind: ParameterKind, label: impl Into<String>) -> Self {
        Self::new(name, kind, label, Presence::Optional)
    }

    pub fn choice(name: impl Into<String>, kind: ParameterKind, label: impl Into<String>) -> Self {
        Self::new(name, kind, label, Presence::Choice)
    }
}

/// A filter value after coercion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Boolean(bool),
    Integer(i64),
    Text(String),
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Boolean(b) => write!(f, "{b}"),
            ParameterValue::Integer(n) => write!(f, "{n}"),
            ParameterValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Ordered, immutable set of filter declarations
#[derive(Debug, Clone)]
pub struct ParameterSchema {
    descriptors: Vec<ParameterDescriptor>,
}

impl ParameterSchema {
    /// Build a schema, rejecting duplicate names
    pub fn new(descriptors: Vec<ParameterDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for descriptor in &descriptors {
            if !seen.insert(descriptor.name.as_str()) {
                return Err(CensoError::DuplicateParameter(descriptor.name.clone()));
            }
        }
        Ok(Self { descriptors })
    }

    /// Look up a descriptor by name
    pub fn describe(&self, name: &str) -> Result<&ParameterDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| CensoError::UnknownParameter(name.to_string()))
    }

    /// Coerce raw user input into the declared type of `name`
    pub fn coerce(&self, name: &str, raw: &str) -> Result<ParameterValue> {
        let descriptor = self.describe(name)?;
        coerce_kind(descriptor, raw)
    }

    /// Descriptors in declaration order
    pub fn descriptors(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.descriptors.iter()
    }

    pub fn choices(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.descriptors
            .iter()
            .filter(|d| d.presence == Presence::Choice)
    }

    pub fn has_choices(&self) -> bool {
        self.choices().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

fn coerce_kind(descriptor: &ParameterDescriptor, raw: &str) -> Result<ParameterValue> {
    let invalid = || CensoError::InvalidValue {
        name: descriptor.name.clone(),
        value: raw.to_string(),
        expected: descriptor.kind.expected(),
    };

    match descriptor.kind {
        ParameterKind::Boolean => match raw {
            "true" => Ok(ParameterValue::Boolean(true)),
            "false" => Ok(ParameterValue::Boolean(false)),
            _ => Err(invalid()),
        },
        ParameterKind::Integer => {
            if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            raw.parse::<i64>()
                .map(ParameterValue::Integer)
                .map_err(|_| invalid())
        }
        ParameterKind::Text => Ok(ParameterValue::Text(raw.to_string())),
    }
}
