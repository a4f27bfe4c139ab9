//! `struct`s and `enum`s for token key objects.

use std::fmt;

use strum::{AsRefStr, Display, EnumString};

/// Name under which the label attribute is reported in read failures.
pub const LABEL_ATTRIBUTE: &str = "CKA_LABEL";

/// PKCS#11 object class (`CKA_CLASS`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ObjectClass {
    Data,
    Certificate,
    PublicKey,
    PrivateKey,
    SecretKey,
    HwFeature,
    DomainParameters,
    Mechanism,
    OtpKey,
    Profile,
    VendorDefined,
    /// A class value this crate has no name for.
    #[strum(disabled)]
    Unknown(u64),
}

impl fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(value) => write!(f, "UNKNOWN({value:#x})"),
            other => f.write_str(AsRef::<str>::as_ref(other)),
        }
    }
}

const CKO_VENDOR_DEFINED: u64 = 0x8000_0000;

impl ObjectClass {
    /// Maps a raw `CKO_*` value. Values in the vendor range collapse to
    /// [`ObjectClass::VendorDefined`], anything else unnamed is kept as
    /// [`ObjectClass::Unknown`].
    pub fn from_raw(value: u64) -> Self {
        match value {
            0 => Self::Data,
            1 => Self::Certificate,
            2 => Self::PublicKey,
            3 => Self::PrivateKey,
            4 => Self::SecretKey,
            5 => Self::HwFeature,
            6 => Self::DomainParameters,
            7 => Self::Mechanism,
            8 => Self::OtpKey,
            9 => Self::Profile,
            value if value >= CKO_VENDOR_DEFINED => Self::VendorDefined,
            value => Self::Unknown(value),
        }
    }
}

/// Boolean attributes a token key object can be queried for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum TokenAttribute {
    #[strum(serialize = "CKA_DECRYPT")]
    Decrypt,
    #[strum(serialize = "CKA_DERIVE")]
    Derive,
    #[strum(serialize = "CKA_SIGN")]
    Sign,
    #[strum(serialize = "CKA_UNWRAP")]
    Unwrap,
    #[strum(serialize = "CKA_ENCRYPT")]
    Encrypt,
    #[strum(serialize = "CKA_VERIFY")]
    Verify,
    #[strum(serialize = "CKA_WRAP")]
    Wrap,
    #[strum(serialize = "CKA_TOKEN")]
    Token,
    #[strum(serialize = "CKA_SENSITIVE")]
    Sensitive,
    #[strum(serialize = "CKA_EXTRACTABLE")]
    Extractable,
}
