use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::token::random_suffix;

/// A stored question record. One record maps to one JSON blob at
/// `questions/<id>.json`. Stored blobs are deserialized back through this
/// struct on the read path, so a blob that no longer fits the schema is
/// rejected as corrupt instead of being passed through opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: String,
    pub question: String,
    pub options: Vec<Value>,
    pub correct_answer: Option<Value>,
    #[serde(default)]
    pub subject: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: String,
}

fn default_difficulty() -> String {
    "medium".to_string()
}

/// Generates a fresh record id: `q_<unix millis>_<random suffix>`.
/// Uniqueness is not enforced anywhere; a reused id overwrites the old blob.
pub fn generate_question_id() -> String {
    format!(
        "q_{}_{}",
        chrono::Utc::now().timestamp_millis(),
        random_suffix(9)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_prefix_and_suffix() {
        let id = generate_question_id();
        assert!(id.starts_with("q_"));
        let parts: Vec<&str> = id.splitn(3, '_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].len(), 9);
    }

    #[test]
    fn stored_record_fills_defaults_on_read() {
        let raw = r#"{"id":"q_1","question":"2+2?","options":["3","4"],"createdAt":"2026-01-01T00:00:00.000Z"}"#;
        let record: QuestionRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.subject, "");
        assert_eq!(record.difficulty, "medium");
        assert!(record.tags.is_empty());
        assert!(record.correct_answer.is_none());
    }

    #[test]
    fn malformed_blob_is_rejected() {
        let raw = r#"{"question":"no id or options"}"#;
        assert!(serde_json::from_str::<QuestionRecord>(raw).is_err());
    }
}
