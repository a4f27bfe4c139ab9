//! Software token object held entirely in memory.

use std::collections::{HashMap, HashSet};

use crate::token_object::{
    error::TokenObjectError,
    model::{ObjectClass, TokenAttribute, LABEL_ATTRIBUTE},
    TokenKeyObject,
};

#[cfg(test)]
mod test;

/// Key object whose attributes are set up front.
///
/// Attributes that were never set read as [`TokenObjectError::AttributeTypeInvalid`],
/// protected ones as [`TokenObjectError::AttributeSensitive`].
#[derive(Clone, Debug)]
pub struct InMemoryTokenObject {
    class: ObjectClass,
    handle: Vec<u8>,
    id: Vec<u8>,
    label: Option<String>,
    label_protected: bool,
    flags: HashMap<TokenAttribute, bool>,
    protected_flags: HashSet<TokenAttribute>,
}

impl InMemoryTokenObject {
    pub fn new(class: ObjectClass, handle: impl Into<Vec<u8>>, id: impl Into<Vec<u8>>) -> Self {
        Self {
            class,
            handle: handle.into(),
            id: id.into(),
            label: None,
            label_protected: false,
            flags: HashMap::new(),
            protected_flags: HashSet::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_flag(mut self, attribute: TokenAttribute, value: bool) -> Self {
        self.flags.insert(attribute, value);
        self
    }

    pub fn with_flags(mut self, flags: impl IntoIterator<Item = (TokenAttribute, bool)>) -> Self {
        self.flags.extend(flags);
        self
    }

    pub fn with_protected_label(mut self) -> Self {
        self.label_protected = true;
        self
    }

    pub fn with_protected_flag(mut self, attribute: TokenAttribute) -> Self {
        self.protected_flags.insert(attribute);
        self
    }
}

impl TokenKeyObject for InMemoryTokenObject {
    fn class(&self) -> ObjectClass {
        self.class
    }

    fn handle(&self) -> Vec<u8> {
        self.handle.to_owned()
    }

    fn id(&self) -> Vec<u8> {
        self.id.to_owned()
    }

    fn label(&self) -> Result<String, TokenObjectError> {
        if self.label_protected {
            return Err(TokenObjectError::AttributeSensitive(
                LABEL_ATTRIBUTE.to_owned(),
            ));
        }

        self.label
            .to_owned()
            .ok_or_else(|| TokenObjectError::AttributeTypeInvalid(LABEL_ATTRIBUTE.to_owned()))
    }

    fn get_flag(&self, attribute: TokenAttribute) -> Result<bool, TokenObjectError> {
        if self.protected_flags.contains(&attribute) {
            return Err(TokenObjectError::AttributeSensitive(attribute.to_string()));
        }

        self.flags
            .get(&attribute)
            .copied()
            .ok_or_else(|| TokenObjectError::AttributeTypeInvalid(attribute.to_string()))
    }
}
