//! Key handles built from token key objects.
//!
//! A [`CryptoKey`] is built once from a resolved [`TokenKeyObject`] and a caller
//! supplied [`AlgorithmRequest`]. Construction:
//!
//! 1. maps the object class to a [`KeyKind`], failing for anything that is not a
//!    private, public or secret key,
//! 2. derives the [`KeyIdentity`] from kind, handle and id,
//! 3. infers extractability and usages from capability flags ([`usage`]),
//! 4. merges the algorithm description with token attributes ([`algorithm`]).
//!
//! Attribute reads that the token rejects never fail construction. The handle does
//! not query the token again afterwards.

use std::{fmt, sync::Arc};

use serde::{Serialize, Serializer};

use error::CryptoKeyError;
use identity::KeyIdentity;
use model::{AlgorithmRequest, KeyAlgorithm, KeyDescriptor, KeyKind, KeyUsage};
use usage::Classification;

use crate::token_object::TokenKeyObject;

pub mod algorithm;
pub mod error;
pub mod identity;
pub mod model;
pub mod usage;


#[derive(Clone)]
pub struct CryptoKey {
    id: KeyIdentity,
    kind: KeyKind,
    extractable: bool,
    algorithm: KeyAlgorithm,
    usages: Vec<KeyUsage>,
    object: Arc<dyn TokenKeyObject>,
}

impl CryptoKey {
    /// Built-in algorithm skeleton: empty name and label, not on token, not sensitive.
    pub fn default_key_algorithm() -> KeyAlgorithm {
        KeyAlgorithm::default()
    }

    pub fn new(
        object: Arc<dyn TokenKeyObject>,
        request: AlgorithmRequest,
    ) -> Result<Self, CryptoKeyError> {
        Self::with_defaults(object, request, Self::default_key_algorithm())
    }

    /// Same as [`CryptoKey::new`] with a different algorithm skeleton.
    ///
    /// The skeleton's `name` is never used.
    pub fn with_defaults(
        object: Arc<dyn TokenKeyObject>,
        request: AlgorithmRequest,
        defaults: KeyAlgorithm,
    ) -> Result<Self, CryptoKeyError> {
        let class = object.class();
        let kind = KeyKind::try_from(class).inspect_err(|err| {
            tracing::warn!(%class, %err, "Wrong incoming session object");
        })?;

        let id = KeyIdentity::new(kind, &object.handle(), &object.id());
        let Classification {
            extractable,
            usages,
        } = usage::classify(kind, object.as_ref());
        let algorithm = algorithm::merge_algorithm(defaults, request, object.as_ref());

        tracing::debug!(%id, %kind, ?usages, extractable, "Token key object assigned");

        Ok(Self {
            id,
            kind,
            extractable,
            algorithm,
            usages,
            object,
        })
    }

    pub fn id(&self) -> &KeyIdentity {
        &self.id
    }

    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    pub fn extractable(&self) -> bool {
        self.extractable
    }

    pub fn algorithm(&self) -> &KeyAlgorithm {
        &self.algorithm
    }

    pub fn usages(&self) -> &[KeyUsage] {
        &self.usages
    }

    pub fn has_usage(&self, usage: KeyUsage) -> bool {
        self.usages.contains(&usage)
    }

    /// The underlying token object, for performing operations with the key.
    pub fn key(&self) -> Arc<dyn TokenKeyObject> {
        self.object.clone()
    }

    pub fn descriptor(&self) -> KeyDescriptor {
        KeyDescriptor {
            algorithm: self.algorithm.to_owned(),
            r#type: self.kind,
            usages: self.usages.to_owned(),
            extractable: self.extractable,
        }
    }
}

impl Serialize for CryptoKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.descriptor().serialize(serializer)
    }
}

impl fmt::Debug for CryptoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoKey")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("extractable", &self.extractable)
            .field("algorithm", &self.algorithm)
            .field("usages", &self.usages)
            .finish_non_exhaustive()
    }
}
