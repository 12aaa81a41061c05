use crate::property::key::{NodeCategory, PropertyKey};

/// Convenience result type used across cadence.
pub type CadenceResult<T> = Result<T, CadenceError>;

/// Top-level error taxonomy.
#[derive(thiserror::Error, Debug)]
pub enum CadenceError {
    /// A descriptor referenced a property its target node cannot animate.
    #[error(transparent)]
    InvalidDescriptor(#[from] InvalidDescriptorError),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl CadenceError {
    /// Build a [`CadenceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// The descriptor error, if this is one.
    pub fn as_invalid_descriptor(&self) -> Option<&InvalidDescriptorError> {
        match self {
            Self::InvalidDescriptor(e) => Some(e),
            _ => None,
        }
    }
}

/// Why a property was rejected for a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum InvalidReason {
    /// The property does not exist on the node's category.
    NotApplicable,
    /// The property exists but the engine cannot interpolate it.
    NotAnimatable,
}

/// First property of a descriptor that failed validation against a node.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[error("{}", describe(.category, .property, .reason))]
pub struct InvalidDescriptorError {
    /// Category of the node the descriptor was validated against.
    pub category: NodeCategory,
    /// Offending property.
    pub property: PropertyKey,
    /// What was wrong with it.
    pub reason: InvalidReason,
}

fn describe(category: &NodeCategory, property: &PropertyKey, reason: &InvalidReason) -> String {
    match reason {
        InvalidReason::NotApplicable => format!("{property} is not a {category} node property"),
        InvalidReason::NotAnimatable => {
            format!("{property} is not animatable on a {category} node")
        }
    }
}

impl From<serde_json::Error> for CadenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
