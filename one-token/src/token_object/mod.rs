//! Access to key objects resolved on a PKCS#11 token.
//!
//! Finding the object, and opening and closing the session it lives in, happen
//! elsewhere. A [`TokenKeyObject`] is what is left once that is done: a class, the
//! bytes identifying the object, and a set of attributes that may each be read
//! independently.
//!
//! Tokens differ in which attributes they allow to be queried, so every attribute
//! accessor is fallible. A failed read says nothing about the validity of the
//! object itself.

use error::TokenObjectError;
use model::{ObjectClass, TokenAttribute};

pub mod error;
pub mod imp;
pub mod model;

/// A key object resolved on a token.
///
/// Implementations that talk to a driver which is not reentrant must serialize
/// access themselves.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait TokenKeyObject: Send + Sync {
    /// Object class.
    fn class(&self) -> ObjectClass;

    /// Raw object handle within its session.
    fn handle(&self) -> Vec<u8>;

    /// Raw object identifier (`CKA_ID`).
    fn id(&self) -> Vec<u8>;

    /// Reads `CKA_LABEL`.
    fn label(&self) -> Result<String, TokenObjectError>;

    /// Reads a boolean attribute.
    fn get_flag(&self, attribute: TokenAttribute) -> Result<bool, TokenObjectError>;
}
