//! Enumerates errors reported by token key object accessors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenObjectError {
    #[error("Attribute type invalid: `{0}`")]
    AttributeTypeInvalid(String),
    #[error("Attribute is sensitive: `{0}`")]
    AttributeSensitive(String),
    #[error("Driver error: `{0}`")]
    Driver(String),
}
