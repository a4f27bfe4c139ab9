use std::sync::Arc;

use one_token::{
    crypto_key::{
        model::{AlgorithmRequest, KeyAlgorithm, KeyKind},
        CryptoKey,
    },
    token_object::TokenKeyObject,
};

use super::error::KeyServiceError;
use crate::{config::KeyConfig, model::CryptoKeyPair};


pub struct KeyService {
    defaults: KeyAlgorithm,
}

impl KeyService {
    pub fn new(config: KeyConfig) -> Self {
        Self {
            defaults: config.default_key_algorithm(),
        }
    }

    pub fn open_key(
        &self,
        object: Arc<dyn TokenKeyObject>,
        algorithm: AlgorithmRequest,
    ) -> Result<CryptoKey, KeyServiceError> {
        Ok(CryptoKey::with_defaults(
            object,
            algorithm,
            self.defaults.to_owned(),
        )?)
    }

    pub fn open_key_pair(
        &self,
        private_object: Arc<dyn TokenKeyObject>,
        public_object: Arc<dyn TokenKeyObject>,
        algorithm: AlgorithmRequest,
    ) -> Result<CryptoKeyPair, KeyServiceError> {
        let private_key = self.open_key(private_object, algorithm.to_owned())?;
        ensure_kind(&private_key, KeyKind::Private)?;

        let public_key = self.open_key(public_object, algorithm)?;
        ensure_kind(&public_key, KeyKind::Public)?;

        Ok(CryptoKeyPair {
            private_key,
            public_key,
        })
    }

    /// JSON form of the key descriptor, for debugging and logs.
    pub fn describe(&self, key: &CryptoKey) -> Result<String, KeyServiceError> {
        Ok(serde_json::to_string(&key.descriptor())?)
    }
}

fn ensure_kind(key: &CryptoKey, expected: KeyKind) -> Result<(), KeyServiceError> {
    if key.kind() != expected {
        tracing::warn!(id = %key.id(), %expected, actual = %key.kind(), "Key kind mismatch");
        return Err(KeyServiceError::KeyKindMismatch {
            expected,
            actual: key.kind(),
        });
    }

    Ok(())
}
