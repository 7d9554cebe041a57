use futures::future::try_join_all;
use serde_json::{Map, Value};

use crate::dto::question_dto::{CreateQuestionPayload, CreatedQuestion};
use crate::error::{Error, Result};
use crate::models::question::{generate_question_id, QuestionRecord};
use crate::services::blob_service::{BlobObject, BlobService};
use crate::utils::time::iso_now;

const QUESTIONS_PREFIX: &str = "questions/";
const JSON_SUFFIX: &str = ".json";

/// Domain operations over the blob store. Holds no state of its own; the
/// store's current object set is the only source of truth.
#[derive(Clone)]
pub struct QuestionService {
    blob: BlobService,
}

impl QuestionService {
    pub fn new(blob: BlobService) -> Self {
        Self { blob }
    }

    /// Lists every record under `questions/`. Content fetches run
    /// concurrently and the whole listing is all-or-nothing: the first
    /// failed fetch or parse fails the request and drops the rest.
    pub async fn list_all(&self) -> Result<Vec<Value>> {
        let objects = self.blob.list(QUESTIONS_PREFIX).await?;
        let fetches = objects.iter().map(|object| self.fetch_listed(object));
        try_join_all(fetches).await
    }

    async fn fetch_listed(&self, object: &BlobObject) -> Result<Value> {
        let record = self.fetch_record(object).await?;

        // Derived fields first, parsed content on top: a stored `id` wins
        // over the one recovered from the pathname.
        let mut entry = Map::new();
        entry.insert(
            "id".to_string(),
            Value::String(derive_id(&object.pathname).to_string()),
        );
        entry.insert(
            "uploadedAt".to_string(),
            serde_json::to_value(object.uploaded_at)?,
        );
        if let Value::Object(fields) = serde_json::to_value(&record)? {
            entry.extend(fields);
        }

        Ok(Value::Object(entry))
    }

    async fn fetch_record(&self, object: &BlobObject) -> Result<QuestionRecord> {
        let bytes = self.blob.fetch(&object.url).await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::CorruptRecord(format!("{}: {}", object.pathname, e)))
    }

    /// Prefix match, not exact: `questions/<id>` also matches any longer id
    /// whose filename begins the same way, and the first hit wins.
    pub async fn get(&self, id: &str) -> Result<QuestionRecord> {
        let prefix = format!("{}{}", QUESTIONS_PREFIX, id);
        let matches = self.blob.list(&prefix).await?;
        let Some(object) = matches.first() else {
            return Err(Error::NotFound("not found".to_string()));
        };
        self.fetch_record(object).await
    }

    /// Writes a new record, or silently overwrites an existing one when the
    /// caller supplies an id that is already in use (upsert, last write wins).
    pub async fn create(&self, payload: CreateQuestionPayload) -> Result<CreatedQuestion> {
        let (Some(question), Some(options)) = (payload.question, payload.options) else {
            return Err(Error::BadRequest("missing required fields".to_string()));
        };

        let record = QuestionRecord {
            id: payload.id.unwrap_or_else(generate_question_id),
            question,
            options,
            correct_answer: payload.correct_answer,
            subject: payload.subject.unwrap_or_default(),
            difficulty: payload.difficulty.unwrap_or_else(|| "medium".to_string()),
            tags: payload.tags.unwrap_or_default(),
            created_at: iso_now(),
        };

        let pathname = format!("{}{}{}", QUESTIONS_PREFIX, record.id, JSON_SUFFIX);
        let body = serde_json::to_vec(&record)?;
        let result = self.blob.put(&pathname, body, "application/json").await?;
        tracing::info!(id = %record.id, pathname = %result.pathname, "question stored");

        Ok(CreatedQuestion {
            id: record.id,
            url: result.url,
        })
    }

    /// No existence check: deleting an id that was never created still
    /// succeeds.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let pathname = format!("{}{}{}", QUESTIONS_PREFIX, id, JSON_SUFFIX);
        self.blob.delete(&pathname).await
    }
}

fn derive_id(pathname: &str) -> &str {
    let stripped = pathname.strip_prefix(QUESTIONS_PREFIX).unwrap_or(pathname);
    stripped.strip_suffix(JSON_SUFFIX).unwrap_or(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_id_strips_prefix_and_suffix() {
        assert_eq!(derive_id("questions/q_17_abc.json"), "q_17_abc");
        assert_eq!(derive_id("questions/plain"), "plain");
        assert_eq!(derive_id("elsewhere/x.json"), "elsewhere/x");
    }
}
