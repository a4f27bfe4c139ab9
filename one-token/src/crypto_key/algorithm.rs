//! Merging of caller algorithm descriptions with token attributes.
//!
//! | field                        | source, later rows win                               |
//! |------------------------------|------------------------------------------------------|
//! | `name`                       | caller only, the default skeleton's name is dropped  |
//! | `label`, `token`, `sensitive`| default skeleton, then caller, then token attribute  |
//! | anything else                | default skeleton, then caller                        |
//!
//! Caller values for `label`, `token` and `sensitive` come from the typed request
//! fields, or from equally named entries in the request params if the typed field
//! is unset.
//!
//! A token attribute that cannot be read leaves the previous value in place.

use super::{
    model::{AlgorithmRequest, KeyAlgorithm},
    usage::read_flag,
};
use crate::token_object::{model::TokenAttribute, TokenKeyObject};

const BASELINE_FIELDS: [&str; 4] = ["name", "label", "token", "sensitive"];

pub fn merge_algorithm(
    defaults: KeyAlgorithm,
    request: AlgorithmRequest,
    object: &dyn TokenKeyObject,
) -> KeyAlgorithm {
    let KeyAlgorithm {
        name: _,
        label,
        token,
        sensitive,
        mut params,
    } = defaults;
    let AlgorithmRequest {
        name,
        label: requested_label,
        token: requested_token,
        sensitive: requested_sensitive,
        params: mut requested_params,
    } = request;

    // baseline keys passed as plain params count as the typed fields
    let requested_label = requested_label.or_else(|| {
        requested_params
            .remove("label")
            .and_then(|value| value.as_str().map(str::to_owned))
    });
    let requested_token = requested_token.or_else(|| {
        requested_params
            .remove("token")
            .and_then(|value| value.as_bool())
    });
    let requested_sensitive = requested_sensitive.or_else(|| {
        requested_params
            .remove("sensitive")
            .and_then(|value| value.as_bool())
    });

    params.extend(requested_params);
    params.retain(|key, _| !BASELINE_FIELDS.contains(&key.as_str()));

    let mut algorithm = KeyAlgorithm {
        name,
        label: requested_label.unwrap_or(label),
        token: requested_token.unwrap_or(token),
        sensitive: requested_sensitive.unwrap_or(sensitive),
        params,
    };

    match object.label() {
        Ok(label) => algorithm.label = label,
        Err(err) => tracing::debug!(%err, "Token label not readable, keeping previous value"),
    }
    if let Some(token) = read_flag(object, TokenAttribute::Token) {
        algorithm.token = token;
    }
    if let Some(sensitive) = read_flag(object, TokenAttribute::Sensitive) {
        algorithm.sensitive = sensitive;
    }

    algorithm
}
