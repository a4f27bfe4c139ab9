//! Canonical key identities.

use ct_codecs::{Encoder, Hex};

use super::{error::CryptoKeyError, model::KeyKind};
use crate::{
    common_models::macros::{impl_display, impl_into},
    token_object::TokenKeyObject,
};

/// Opaque identity of a key handle, `<kind>-<hex(handle)>-<hex(id)>`.
///
/// Only meant to be compared for equality.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct KeyIdentity(String);
impl_display!(KeyIdentity);
impl_into!(KeyIdentity; String);

impl KeyIdentity {
    pub(crate) fn new(kind: KeyKind, handle: &[u8], id: &[u8]) -> Self {
        Self(format!("{kind}-{}-{}", to_hex(handle), to_hex(id)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Derives the identity of a token key object.
///
/// Fails if the object is not a private, public or secret key.
pub fn derive_identity(object: &dyn TokenKeyObject) -> Result<KeyIdentity, CryptoKeyError> {
    let kind = KeyKind::try_from(object.class())?;

    Ok(KeyIdentity::new(kind, &object.handle(), &object.id()))
}

fn to_hex(bytes: &[u8]) -> String {
    // The output buffer is sized from the input, encoding cannot fail.
    match Hex::encode_to_string(bytes) {
        Ok(hex) => hex,
        Err(err) => {
            debug_assert!(false, "hex encoding failed: {err}");
            tracing::error!(%err, len = bytes.len(), "Hex encoding of identity bytes failed");
            String::new()
        }
    }
}
