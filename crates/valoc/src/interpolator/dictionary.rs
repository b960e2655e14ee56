//! Per-locale message dictionaries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::interpolator::error::DictionaryError;

/// Message templates, field display names, and per-field overrides for one
/// locale.
///
/// All lookups are exact, case-sensitive string matches. The three
/// sections are independent: a display name registered in `names` changes
/// how `{field}` renders but never which template is chosen.
///
/// Dictionaries deserialize from the conventional JSON shape:
///
/// ```json
/// {
///   "messages": { "min": "The {field} field must be at least 0:{length}" },
///   "names": { "email": "e-mail address" },
///   "fields": { "password": { "min": "Your password is too short" } }
/// }
/// ```
///
/// All sections are optional; unknown sections are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocaleDictionary {
    /// Rule name to generic message template.
    pub messages: HashMap<String, String>,
    /// Field name to display name, substituted for the `{field}` token.
    pub names: HashMap<String, String>,
    /// Field name to rule name to override template. An override applies
    /// to exactly one (field, rule) pair.
    pub fields: HashMap<String, HashMap<String, String>>,
}

impl LocaleDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a dictionary from a JSON string.
    ///
    /// `locale` is only used to label the error. Fails with
    /// [`DictionaryError::Malformed`] when the content is not valid JSON
    /// or does not match the dictionary shape; nothing is partially
    /// applied on failure.
    pub fn from_json_str(locale: &str, content: &str) -> Result<Self, DictionaryError> {
        serde_json::from_str(content).map_err(|e| DictionaryError::Malformed {
            locale: locale.to_string(),
            detail: e.to_string(),
        })
    }

    /// Converts an already-parsed JSON value into a dictionary.
    pub fn from_json_value(
        locale: &str,
        content: serde_json::Value,
    ) -> Result<Self, DictionaryError> {
        serde_json::from_value(content).map_err(|e| DictionaryError::Malformed {
            locale: locale.to_string(),
            detail: e.to_string(),
        })
    }

    /// Deep-merges `partial` into this dictionary.
    ///
    /// The merge is key-wise at the leaf level: individual messages,
    /// names, and per-field overrides from `partial` replace entries with
    /// the same key and leave every other entry untouched. Sections and
    /// per-field override maps are never replaced wholesale.
    pub fn merge(&mut self, partial: LocaleDictionary) {
        self.messages.extend(partial.messages);
        self.names.extend(partial.names);
        for (field, overrides) in partial.fields.into_iter().collect::<Vec<_>>() {
            self.fields.entry(field).or_default().extend(overrides);
        }
    }

    /// Looks up the template for a rule failure on a field.
    ///
    /// A field-specific override wins over the rule's generic message.
    pub fn template_for(&self, field: &str, rule: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|overrides| overrides.get(rule))
            .or_else(|| self.messages.get(rule))
            .map(String::as_str)
    }

    /// Returns the display name registered for a field, if any.
    pub fn display_name(&self, field: &str) -> Option<&str> {
        self.names.get(field).map(String::as_str)
    }
}
