//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of a create or update request.
///
/// Every field is optional on the wire and any non-string value reads as
/// absent, so a badly shaped body surfaces as an authorization or validation
/// failure instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostWriteRequest {
    #[serde(default, deserialize_with = "text")]
    pub pw: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub category: Option<String>,
}

impl PostWriteRequest {
    /// Read a request from raw body bytes. Anything that is not a JSON object
    /// yields an empty request.
    pub fn from_slice(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Confirmation returned by a successful create or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWriteResponse {
    pub message: String,
    pub slug: String,
}

impl PostWriteResponse {
    pub fn created(slug: impl Into<String>) -> Self {
        Self {
            message: "Post added successfully".to_string(),
            slug: slug.into(),
        }
    }

    pub fn updated(slug: impl Into<String>) -> Self {
        Self {
            message: "Post updated successfully".to_string(),
            slug: slug.into(),
        }
    }

    pub fn unchanged(slug: impl Into<String>) -> Self {
        Self {
            message: "No changes made to the post".to_string(),
            slug: slug.into(),
        }
    }
}
