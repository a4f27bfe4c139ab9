//! Usage inference from token capability flags.
//!
//! Tokens do not report a usage list, so it is rebuilt from the capability flags
//! of the object. Flags are read in a fixed order per key kind and every flag
//! that reads `true` appends its usages. The resulting order follows the
//! tables below and is stable across calls.
//!
//! A flag that cannot be read counts as `false`.

use super::model::{KeyKind, KeyUsage};
use crate::token_object::{model::TokenAttribute, TokenKeyObject};

struct Capability {
    attribute: TokenAttribute,
    usages: &'static [KeyUsage],
}

const PRIVATE_KEY_CAPABILITIES: &[Capability] = &[
    Capability {
        attribute: TokenAttribute::Decrypt,
        usages: &[KeyUsage::Decrypt],
    },
    Capability {
        attribute: TokenAttribute::Derive,
        usages: &[KeyUsage::DeriveKey, KeyUsage::DeriveBits],
    },
    Capability {
        attribute: TokenAttribute::Sign,
        usages: &[KeyUsage::Sign],
    },
    Capability {
        attribute: TokenAttribute::Unwrap,
        usages: &[KeyUsage::UnwrapKey],
    },
];

const PUBLIC_KEY_CAPABILITIES: &[Capability] = &[
    Capability {
        attribute: TokenAttribute::Encrypt,
        usages: &[KeyUsage::Encrypt],
    },
    Capability {
        attribute: TokenAttribute::Verify,
        usages: &[KeyUsage::Verify],
    },
    Capability {
        attribute: TokenAttribute::Wrap,
        usages: &[KeyUsage::WrapKey],
    },
];

const SECRET_KEY_CAPABILITIES: &[Capability] = &[
    Capability {
        attribute: TokenAttribute::Sign,
        usages: &[KeyUsage::Sign],
    },
    Capability {
        attribute: TokenAttribute::Verify,
        usages: &[KeyUsage::Verify],
    },
    Capability {
        attribute: TokenAttribute::Encrypt,
        usages: &[KeyUsage::Encrypt],
    },
    Capability {
        attribute: TokenAttribute::Decrypt,
        usages: &[KeyUsage::Decrypt],
    },
    Capability {
        attribute: TokenAttribute::Wrap,
        usages: &[KeyUsage::WrapKey],
    },
    Capability {
        attribute: TokenAttribute::Unwrap,
        usages: &[KeyUsage::UnwrapKey],
    },
    Capability {
        attribute: TokenAttribute::Derive,
        usages: &[KeyUsage::DeriveKey, KeyUsage::DeriveBits],
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub extractable: bool,
    pub usages: Vec<KeyUsage>,
}

/// Decides extractability and usages of a token object of the given kind.
///
/// Public keys are always extractable. Private and secret keys are extractable
/// only if the token says so; an unreadable `CKA_EXTRACTABLE` means `false`.
pub fn classify(kind: KeyKind, object: &dyn TokenKeyObject) -> Classification {
    let extractable = match kind {
        KeyKind::Public => true,
        KeyKind::Private | KeyKind::Secret => {
            read_flag(object, TokenAttribute::Extractable).unwrap_or(false)
        }
    };

    let usages = capabilities(kind)
        .iter()
        .filter(|capability| read_flag(object, capability.attribute).unwrap_or(false))
        .flat_map(|capability| capability.usages.iter().copied())
        .collect();

    Classification {
        extractable,
        usages,
    }
}

fn capabilities(kind: KeyKind) -> &'static [Capability] {
    match kind {
        KeyKind::Private => PRIVATE_KEY_CAPABILITIES,
        KeyKind::Public => PUBLIC_KEY_CAPABILITIES,
        KeyKind::Secret => SECRET_KEY_CAPABILITIES,
    }
}

pub(super) fn read_flag(object: &dyn TokenKeyObject, attribute: TokenAttribute) -> Option<bool> {
    match object.get_flag(attribute) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(%attribute, %err, "Token attribute not readable, skipping");
            None
        }
    }
}
