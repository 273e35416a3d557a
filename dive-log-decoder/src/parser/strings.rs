//! Descriptive string fields
//!
//! Parsers collect a short ordered list of (description, value) pairs while
//! caching (serial number, firmware version, deco model, ...). Callers walk
//! it by index until the query reports `Unsupported`.

use crate::types::{DecoderError, FieldString, Result};

/// Maximum number of strings a parser keeps
pub(crate) const MAX_STRINGS: usize = 32;

/// Bounded, insertion-ordered list of descriptive strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct StringList {
    items: Vec<FieldString>,
}

impl StringList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a string; silently dropped once the list is full
    pub fn push(&mut self, desc: &'static str, value: impl Into<String>) {
        if self.items.len() >= MAX_STRINGS {
            log::warn!("String list full, dropping {:?}", desc);
            return;
        }

        self.items.push(FieldString {
            desc,
            value: value.into(),
        });
    }

    /// String at `index`, or `Unsupported` past the end
    pub fn get(&self, index: usize) -> Result<FieldString> {
        self.items
            .get(index)
            .cloned()
            .ok_or_else(|| DecoderError::Unsupported(format!("No string at index {}", index)))
    }

    /// Look a value up by its description
    #[cfg(test)]
    pub(crate) fn find(&self, desc: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|s| s.desc == desc)
            .map(|s| s.value.as_str())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}
