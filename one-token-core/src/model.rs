use one_token::crypto_key::CryptoKey;
use serde::Serialize;

/// A private key and its public counterpart, as opened from two token objects.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoKeyPair {
    pub private_key: CryptoKey,
    pub public_key: CryptoKey,
}
