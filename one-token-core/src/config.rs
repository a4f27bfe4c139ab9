use one_token::crypto_key::{model::KeyAlgorithm, CryptoKey};
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OneTokenCoreConfig {
    pub key_config: KeyConfig,
}

/// Algorithm fields used when neither the caller nor the token provide them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyConfig {
    pub default_label: String,
    pub default_token: bool,
    pub default_sensitive: bool,
}

impl Default for KeyConfig {
    fn default() -> Self {
        let defaults = CryptoKey::default_key_algorithm();
        Self {
            default_label: defaults.label,
            default_token: defaults.token,
            default_sensitive: defaults.sensitive,
        }
    }
}

impl KeyConfig {
    pub fn default_key_algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm {
            label: self.default_label.to_owned(),
            token: self.default_token,
            sensitive: self.default_sensitive,
            ..CryptoKey::default_key_algorithm()
        }
    }
}
