// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Reads a field as a string; `null` or any non-string value becomes `""`.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    #[serde(deserialize_with = "string_or_empty")]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecommendRequest {
    #[serde(deserialize_with = "string_or_empty")]
    pub dosha: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub goal: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub dosha: String,
    pub goal: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DoshaListResponse {
    pub doshas: Vec<String>,
}
