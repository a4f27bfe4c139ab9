//! Enumerates errors related to key handle construction.

use thiserror::Error;

use crate::token_object::model::ObjectClass;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoKeyError {
    #[error("Unsupported object type `{0}`")]
    UnsupportedObjectType(ObjectClass),
}
