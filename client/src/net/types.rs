//! Wire types for the words/combinations REST API.
//!
//! DESIGN
//! ======
//! Ids are the upstream's 64-bit integers. Nested word references inside a
//! combination only promise `id` and `text`, so they get their own type
//! instead of reusing `Word`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Grammatical role a word can fill in a combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WordType {
    Verb,
    Subject,
    Object,
}

impl WordType {
    pub const ALL: [WordType; 3] = [WordType::Verb, WordType::Subject, WordType::Object];

    /// Wire value, also used verbatim as the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verb => "VERB",
            Self::Subject => "SUBJECT",
            Self::Object => "OBJECT",
        }
    }

    /// Parse a wire value. Empty or unknown input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "VERB" => Some(Self::Verb),
            "SUBJECT" => Some(Self::Subject),
            "OBJECT" => Some(Self::Object),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Verb => "Verb",
            Self::Subject => "Subject",
            Self::Object => "Object",
        }
    }
}

/// A vocabulary entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: WordType,
}

/// Minimal word reference nested inside a combination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRef {
    pub id: i64,
    pub text: String,
}

/// An allowed verb + subject (+ object) sentence template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    pub id: i64,
    pub verb: WordRef,
    pub subject: WordRef,
    #[serde(default)]
    pub object: Option<WordRef>,
    /// Sentence assembled by the upstream, when it provides one.
    #[serde(default)]
    pub sentence: Option<String>,
}

/// Body of `POST /words`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateWordRequest {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: WordType,
}

/// Body of `POST /combinations`. A missing object serializes as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateCombinationRequest {
    pub verb_id: i64,
    pub subject_id: i64,
    pub object_id: Option<i64>,
}

/// Body of `POST /combinations/batch`. `object_ids` is always sent, possibly empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatchCombinationRequest {
    pub verb_id: i64,
    pub subject_ids: Vec<i64>,
    pub object_ids: Vec<i64>,
}

/// Data of a successful batch create.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BatchCreated {
    #[serde(alias = "created")]
    pub count: u64,
}

/// Uniform response envelope. `data` stays untyped until success is known,
/// because failed responses may carry a string or a list of messages there.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope {
    /// Human-readable reason for a `success: false` envelope.
    pub fn rejection_message(&self) -> String {
        if let Some(error) = self.error.as_deref().filter(|e| !e.trim().is_empty()) {
            return error.to_owned();
        }
        match &self.data {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => s.clone(),
            Some(serde_json::Value::Array(items)) => {
                let parts: Vec<&str> = items.iter().filter_map(serde_json::Value::as_str).collect();
                if parts.is_empty() {
                    "request rejected".to_owned()
                } else {
                    parts.join("; ")
                }
            }
            _ => "request rejected".to_owned(),
        }
    }
}

/// Every way an API call can fail. All variants are shown to the user the
/// same way: as a transient error notice.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The upstream answered `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// Non-2xx status without a readable envelope.
    #[error("request failed with status {0}")]
    Status(u16),

    /// Called outside the browser (server render).
    #[error("not available on server")]
    Unavailable,
}
