//! Localized placeholder strings for the history panel.
//!
//! Locale files use the same layout as the web frontend: nested JSON objects
//! whose leaf strings are addressed by dotted paths (`notifi.emptyHistoryTitle`).
//! A missing entry resolves to its own key path, matching the frontend's
//! translation hook.

use std::collections::HashMap;

use crate::error::CoreError;

/// Namespace every history key lives under.
pub const NAMESPACE: &str = "notifi";

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// The fixed set of strings the presenter may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    EmptyHistoryTitle,
    EmptyHistoryMessage,
    UnsupportedHistoryTitle,
    UnsupportedHistoryMessage,
}

impl MessageKey {
    pub const ALL: [MessageKey; 4] = [
        MessageKey::EmptyHistoryTitle,
        MessageKey::EmptyHistoryMessage,
        MessageKey::UnsupportedHistoryTitle,
        MessageKey::UnsupportedHistoryMessage,
    ];

    /// Full dotted lookup path, e.g. `notifi.emptyHistoryTitle`.
    pub fn path(self) -> &'static str {
        match self {
            MessageKey::EmptyHistoryTitle => "notifi.emptyHistoryTitle",
            MessageKey::EmptyHistoryMessage => "notifi.emptyHistoryMessage",
            MessageKey::UnsupportedHistoryTitle => "notifi.unsupportedHistoryTitle",
            MessageKey::UnsupportedHistoryMessage => "notifi.unsupportedHistoryMessage",
        }
    }

    fn english(self) -> &'static str {
        match self {
            MessageKey::EmptyHistoryTitle => "Notification",
            MessageKey::EmptyHistoryMessage => "This notification has no content.",
            MessageKey::UnsupportedHistoryTitle => "Unsupported notification",
            MessageKey::UnsupportedHistoryMessage => {
                "This type of notification can't be displayed yet."
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Translator
// ---------------------------------------------------------------------------

/// Resolves a [`MessageKey`] to display text.
pub trait Translator {
    fn translate(&self, key: MessageKey) -> String;
}

/// Any `Fn(&str) -> String` is a translator; it receives the full key path.
impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: MessageKey) -> String {
        self(key.path())
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A flattened locale file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Built-in English strings.
    pub fn english() -> Self {
        let entries = MessageKey::ALL
            .iter()
            .map(|key| (key.path().to_string(), key.english().to_string()))
            .collect();
        Self { entries }
    }

    /// Parse a locale file. Nested objects are flattened into dotted paths;
    /// non-string leaves are skipped.
    pub fn from_json_str(input: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        let serde_json::Value::Object(root) = value else {
            return Err(CoreError::Validation(
                "Locale file must contain a JSON object".to_string(),
            ));
        };

        let mut entries = HashMap::new();
        flatten_into(&mut entries, None, &root);
        Ok(Self { entries })
    }

    /// Fill entries missing from `self` with those from `fallback`.
    pub fn with_fallback(mut self, fallback: Catalog) -> Self {
        for (path, text) in fallback.entries {
            self.entries.entry(path).or_insert(text);
        }
        self
    }

    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Keys of the history panel this catalog has no entry for.
    pub fn missing_keys(&self) -> Vec<MessageKey> {
        MessageKey::ALL
            .into_iter()
            .filter(|key| !self.entries.contains_key(key.path()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn translate(&self, key: MessageKey) -> String {
        match self.lookup(key.path()) {
            Some(text) => text.to_string(),
            None => {
                tracing::debug!(key = key.path(), "Missing translation, using key path");
                key.path().to_string()
            }
        }
    }
}

fn flatten_into(
    entries: &mut HashMap<String, String>,
    prefix: Option<&str>,
    object: &serde_json::Map<String, serde_json::Value>,
) {
    for (name, value) in object {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.clone(),
        };
        match value {
            serde_json::Value::String(text) => {
                entries.insert(path, text.clone());
            }
            serde_json::Value::Object(child) => flatten_into(entries, Some(&path), child),
            _ => {
                tracing::debug!(path = %path, "Skipping non-string locale entry");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
