use std::sync::Arc;

use hex_literal::hex;
use one_token::{
    crypto_key::model::AlgorithmRequest,
    token_object::{
        imp::in_memory::InMemoryTokenObject,
        model::{ObjectClass, TokenAttribute},
    },
};
use one_token_core::OneTokenCore;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let core = OneTokenCore::default();

    // a YubiKey-like secret key: CKA_EXTRACTABLE cannot be queried
    let secret = InMemoryTokenObject::new(
        ObjectClass::SecretKey,
        hex!("00000002"),
        hex!("a1b2c3d4"),
    )
    .with_label("session-key")
    .with_flags([
        (TokenAttribute::Encrypt, true),
        (TokenAttribute::Decrypt, true),
        (TokenAttribute::Token, true),
        (TokenAttribute::Sensitive, true),
    ]);

    let key = core
        .key_service
        .open_key(
            Arc::new(secret),
            AlgorithmRequest::new("AES-GCM").with_param("length", 256),
        )
        .expect("Opening secret key failed");

    println!("{}: {}", key.id(), describe(&core, &key));

    let private = InMemoryTokenObject::new(ObjectClass::PrivateKey, hex!("00000003"), hex!("01"))
        .with_flags([(TokenAttribute::Sign, true), (TokenAttribute::Derive, true)]);
    let public = InMemoryTokenObject::new(ObjectClass::PublicKey, hex!("00000004"), hex!("01"))
        .with_flags([(TokenAttribute::Verify, true)]);

    let pair = core
        .key_service
        .open_key_pair(
            Arc::new(private),
            Arc::new(public),
            AlgorithmRequest::new("ECDSA").with_param("namedCurve", "P-256"),
        )
        .expect("Opening key pair failed");

    println!(
        "{}: {}",
        pair.private_key.id(),
        describe(&core, &pair.private_key)
    );
    println!(
        "{}: {}",
        pair.public_key.id(),
        describe(&core, &pair.public_key)
    );

    let certificate =
        InMemoryTokenObject::new(ObjectClass::Certificate, hex!("00000005"), hex!("01"));
    match core
        .key_service
        .open_key(Arc::new(certificate), AlgorithmRequest::new("ECDSA"))
    {
        Ok(_) => println!("Certificate unexpectedly opened as key"),
        Err(err) => println!("Certificate rejected: {err}"),
    };
}

fn describe(core: &OneTokenCore, key: &one_token::crypto_key::CryptoKey) -> String {
    core.key_service
        .describe(key)
        .unwrap_or_else(|err| format!("<{err}>"))
}
