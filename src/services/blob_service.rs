use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Metadata for one stored object, as reported by the store's listing
/// endpoint. `url` is the publicly readable location of the content.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobObject {
    pub url: String,
    pub pathname: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ListBlobsResponse {
    blobs: Vec<BlobObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutBlobResult {
    pub url: String,
    pub pathname: String,
}

/// Thin client for the external blob store. All mutating calls carry the
/// single read-write bearer token; content fetches go straight to the
/// object's public URL. Every call is single-attempt, no retries.
#[derive(Clone)]
pub struct BlobService {
    client: Client,
    base_url: String,
    token: String,
}

impl BlobService {
    pub fn new(client: Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub async fn list(&self, prefix: &str) -> Result<Vec<BlobObject>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("prefix", prefix)])
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Storage(format!(
                "list with prefix {} failed: {}",
                prefix,
                response.status()
            )));
        }

        Ok(response.json::<ListBlobsResponse>().await?.blobs)
    }

    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Storage(format!(
                "fetch of {} failed: {}",
                url,
                response.status()
            )));
        }

        Ok(response.bytes().await?)
    }

    pub async fn put(&self, pathname: &str, body: Vec<u8>, content_type: &str) -> Result<PutBlobResult> {
        let url = format!("{}/{}", self.base_url, pathname);
        let response = self
            .client
            .put(&url)
            .query(&[("access", "public")])
            .bearer_auth(&self.token)
            .header("x-content-type", content_type)
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Storage(format!(
                "put of {} failed: {}",
                pathname,
                response.status()
            )));
        }

        Ok(response.json::<PutBlobResult>().await?)
    }

    pub async fn delete(&self, pathname: &str) -> Result<()> {
        let url = format!("{}/{}", self.base_url, pathname);
        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Storage(format!(
                "delete of {} failed: {}",
                pathname,
                response.status()
            )));
        }

        Ok(())
    }
}
