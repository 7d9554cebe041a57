use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST body for creating a question. `question` and `options` are the only
/// required fields; they stay `Option` here so their absence surfaces as a
/// 400 validation error rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionPayload {
    pub id: Option<String>,
    pub question: Option<String>,
    pub options: Option<Vec<Value>>,
    pub correct_answer: Option<Value>,
    pub subject: Option<String>,
    pub difficulty: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// What the store reports back after a successful write.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedQuestion {
    pub id: String,
    pub url: String,
}
