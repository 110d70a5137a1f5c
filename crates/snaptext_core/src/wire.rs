use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize};

/// One row of structured data returned alongside the extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyValuePair {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

// `null` renders the same as a missing field.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Response body of the extraction endpoint. Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub key_values: Option<Vec<KeyValuePair>>,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Application-level failure reported inside an otherwise successful response.
    /// An empty `error` string counts as no error.
    pub fn application_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|err| !err.is_empty())
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref().filter(|warning| !warning.is_empty())
    }
}

/// File picked in the upload input, read once per change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }
}
