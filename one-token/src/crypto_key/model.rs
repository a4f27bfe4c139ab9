//! `struct`s and `enum`s for key handles.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

use super::error::CryptoKeyError;
use crate::token_object::model::ObjectClass;

/// The three kinds of key a token object can be presented as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum KeyKind {
    Private,
    Public,
    Secret,
}

impl KeyKind {
    /// Usages a key of this kind can ever carry.
    pub fn allowed_usages(&self) -> &'static [KeyUsage] {
        match self {
            Self::Private => &[
                KeyUsage::Decrypt,
                KeyUsage::Sign,
                KeyUsage::UnwrapKey,
                KeyUsage::DeriveKey,
                KeyUsage::DeriveBits,
            ],
            Self::Public => &[KeyUsage::Encrypt, KeyUsage::Verify, KeyUsage::WrapKey],
            Self::Secret => &[
                KeyUsage::Encrypt,
                KeyUsage::Decrypt,
                KeyUsage::Sign,
                KeyUsage::Verify,
                KeyUsage::WrapKey,
                KeyUsage::UnwrapKey,
                KeyUsage::DeriveKey,
                KeyUsage::DeriveBits,
            ],
        }
    }
}

impl TryFrom<ObjectClass> for KeyKind {
    type Error = CryptoKeyError;

    fn try_from(class: ObjectClass) -> Result<Self, Self::Error> {
        match class {
            ObjectClass::PrivateKey => Ok(Self::Private),
            ObjectClass::PublicKey => Ok(Self::Public),
            ObjectClass::SecretKey => Ok(Self::Secret),
            other => Err(CryptoKeyError::UnsupportedObjectType(other)),
        }
    }
}

/// WebCrypto key usage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum KeyUsage {
    Encrypt,
    Decrypt,
    Sign,
    Verify,
    WrapKey,
    UnwrapKey,
    DeriveKey,
    DeriveBits,
}

/// Algorithm description attached to a key handle.
///
/// `name`, `label`, `token` and `sensitive` are always present, any other
/// algorithm parameters (`length`, `namedCurve`, `hash`, ...) are kept in `params`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct KeyAlgorithm {
    pub name: String,
    pub label: String,
    pub token: bool,
    pub sensitive: bool,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

/// Algorithm description supplied by the caller when opening a key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl AlgorithmRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// The serializable view of a key handle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeyDescriptor {
    pub algorithm: KeyAlgorithm,
    #[serde(rename = "type")]
    pub r#type: KeyKind,
    pub usages: Vec<KeyUsage>,
    pub extractable: bool,
}
