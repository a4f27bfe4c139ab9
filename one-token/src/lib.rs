//! Presenting PKCS#11 token key objects as WebCrypto-style keys.
//!
//! A key object found on a hardware or software token does not report what it can
//! be used for, nor does it always allow every attribute to be read. This crate
//! classifies such an object into a private, public or secret key, infers its
//! permitted usages from the capability flags the token exposes, and merges the
//! caller's algorithm description with whatever attributes the token allows to be
//! queried.
//!
//! * [`token_object`]: the accessor surface of a resolved token key object, plus
//!   an in-memory implementation
//! * [`crypto_key`]: the immutable key handle built from a token object
//!
//! Opening sessions, searching for objects and performing cryptographic operations
//! are left to the caller.

pub mod common_models;
pub mod crypto_key;
pub mod token_object;
