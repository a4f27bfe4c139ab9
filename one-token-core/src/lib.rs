//! The **One Token Core** is the service layer over the [one_token] providers.
//!
//! It opens key objects resolved on a PKCS#11 token as WebCrypto-style key
//! handles, using algorithm defaults taken from configuration.
//!
//! ## Getting started
//!
//! ```ignore rust
//! /// `None` initializes the Core with the default configuration
//! let core = OneTokenCore::new(None);
//!
//! let key = core
//!     .key_service
//!     .open_key(token_object, AlgorithmRequest::new("AES-GCM"))
//!     .expect("Unsupported token object");
//! ```
//!
//! Token sessions, object search and the cryptographic operations themselves are
//! not part of this library.

use config::OneTokenCoreConfig;
use service::key_service::KeyService;

pub mod config;
pub mod model;
pub mod service;

pub struct OneTokenCore {
    pub key_service: KeyService,
}

impl Default for OneTokenCore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl OneTokenCore {
    pub fn new(config: Option<OneTokenCoreConfig>) -> Self {
        let config = config.unwrap_or_default();

        let key_service = KeyService::new(config.key_config);

        Self { key_service }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::KeyConfig;

    #[test]
    fn test_config_from_json() {
        let config: OneTokenCoreConfig = serde_json::from_str(
            r#"{ "keyConfig": { "defaultLabel": "unnamed", "defaultSensitive": true } }"#,
        )
        .unwrap();

        assert_eq!(
            KeyConfig {
                default_label: "unnamed".to_string(),
                default_token: false,
                default_sensitive: true,
            },
            config.key_config
        );
    }

    #[test]
    fn test_default_config_matches_built_in_defaults() {
        let config = OneTokenCoreConfig::default();

        assert_eq!("", config.key_config.default_label);
        assert!(!config.key_config.default_token);
        assert!(!config.key_config.default_sensitive);
        assert_eq!(
            one_token::crypto_key::CryptoKey::default_key_algorithm(),
            config.key_config.default_key_algorithm()
        );
    }
}
