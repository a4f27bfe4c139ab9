use std::str::FromStr;

use super::InMemoryTokenObject;
use crate::token_object::{
    error::TokenObjectError,
    model::{ObjectClass, TokenAttribute},
    TokenKeyObject,
};

#[test]
fn test_unset_flag_reads_as_invalid_attribute() {
    let object = InMemoryTokenObject::new(ObjectClass::SecretKey, [1u8], [2u8])
        .with_flag(TokenAttribute::Sign, true);

    assert_eq!(Ok(true), object.get_flag(TokenAttribute::Sign));
    assert_eq!(
        Err(TokenObjectError::AttributeTypeInvalid(
            "CKA_EXTRACTABLE".to_string()
        )),
        object.get_flag(TokenAttribute::Extractable)
    );
}

#[test]
fn test_protected_flag_reads_as_sensitive_even_when_set() {
    let object = InMemoryTokenObject::new(ObjectClass::PrivateKey, [1u8], [2u8])
        .with_flag(TokenAttribute::Extractable, true)
        .with_protected_flag(TokenAttribute::Extractable);

    assert_eq!(
        Err(TokenObjectError::AttributeSensitive(
            "CKA_EXTRACTABLE".to_string()
        )),
        object.get_flag(TokenAttribute::Extractable)
    );
}

#[test]
fn test_label_reads() {
    let object = InMemoryTokenObject::new(ObjectClass::SecretKey, [1u8], [2u8]);
    assert_eq!(
        Err(TokenObjectError::AttributeTypeInvalid("CKA_LABEL".to_string())),
        object.label()
    );

    let object = object.with_label("mykey");
    assert_eq!(Ok("mykey".to_string()), object.label());

    let object = object.with_protected_label();
    assert_eq!(
        Err(TokenObjectError::AttributeSensitive("CKA_LABEL".to_string())),
        object.label()
    );
}

#[test]
fn test_handle_and_id_are_returned_verbatim() {
    let object =
        InMemoryTokenObject::new(ObjectClass::PublicKey, vec![0u8, 0, 0, 7], b"key-1".to_vec());

    assert_eq!(vec![0, 0, 0, 7], object.handle());
    assert_eq!(b"key-1".to_vec(), object.id());
    assert_eq!(ObjectClass::PublicKey, object.class());
}

#[test]
fn test_with_flags_overrides_earlier_values() {
    let object = InMemoryTokenObject::new(ObjectClass::SecretKey, [1u8], [2u8])
        .with_flag(TokenAttribute::Encrypt, false)
        .with_flags([(TokenAttribute::Encrypt, true), (TokenAttribute::Decrypt, true)]);

    assert_eq!(Ok(true), object.get_flag(TokenAttribute::Encrypt));
    assert_eq!(Ok(true), object.get_flag(TokenAttribute::Decrypt));
}

#[test]
fn test_object_class_parsing_and_display() {
    assert_eq!(
        ObjectClass::Certificate,
        ObjectClass::from_str("certificate").unwrap()
    );
    assert_eq!(
        ObjectClass::PrivateKey,
        ObjectClass::from_str("PRIVATE_KEY").unwrap()
    );
    assert!(ObjectClass::from_str("private").is_err());

    assert_eq!("SECRET_KEY", ObjectClass::SecretKey.to_string());
    assert_eq!("HW_FEATURE", ObjectClass::HwFeature.to_string());
}

#[test]
fn test_object_class_from_raw() {
    assert_eq!(ObjectClass::Certificate, ObjectClass::from_raw(1));
    assert_eq!(ObjectClass::PublicKey, ObjectClass::from_raw(2));
    assert_eq!(ObjectClass::PrivateKey, ObjectClass::from_raw(3));
    assert_eq!(ObjectClass::SecretKey, ObjectClass::from_raw(4));
    assert_eq!(ObjectClass::Profile, ObjectClass::from_raw(9));
    assert_eq!(
        ObjectClass::VendorDefined,
        ObjectClass::from_raw(0x8000_0001)
    );
    assert_eq!(ObjectClass::Unknown(10), ObjectClass::from_raw(10));
    assert_eq!(ObjectClass::Unknown(42), ObjectClass::from_raw(42));
}

#[test]
fn test_unknown_object_class_display_and_parsing() {
    assert_eq!("UNKNOWN(0xa)", ObjectClass::Unknown(10).to_string());
    assert_eq!("VENDOR_DEFINED", ObjectClass::VendorDefined.to_string());
    assert!(ObjectClass::from_str("unknown").is_err());
}
