use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::UserField;

/// Field-level validation messages keyed by field name.
///
/// Keys are kept sorted so the rendered order is stable across responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `message` to the list for `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// All messages recorded for `field`, in the order the backend sent them.
    #[must_use]
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// First message for `field`, if any.
    #[must_use]
    pub fn first_message(&self, field: &str) -> Option<&str> {
        self.messages(field).first().map(String::as_str)
    }

    /// First message for a known user field.
    #[must_use]
    pub fn first_for(&self, field: UserField) -> Option<&str> {
        self.first_message(field.as_str())
    }

    /// One `(field, first message)` pair per field that has at least one message.
    pub fn first_messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().filter_map(|(field, messages)| {
            messages
                .first()
                .map(|message| (field.as_str(), message.as_str()))
        })
    }

    /// Number of fields carrying errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ValidationErrors
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.push(field, message);
        }
        errors
    }
}

/// Body of an HTTP 422 response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationErrorResponse {
    /// Summary message, when the backend sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Per-field messages.
    #[serde(default)]
    pub errors: ValidationErrors,
}
