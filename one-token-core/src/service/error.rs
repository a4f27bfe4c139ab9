use one_token::crypto_key::{error::CryptoKeyError, model::KeyKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyServiceError {
    #[error("Crypto key error: `{0}`")]
    CryptoKey(#[from] CryptoKeyError),
    #[error("Key kind mismatch: expected `{expected}`, got `{actual}`")]
    KeyKindMismatch { expected: KeyKind, actual: KeyKind },
    #[error("Serialization error: `{0}`")]
    Serialization(#[from] serde_json::Error),
}
