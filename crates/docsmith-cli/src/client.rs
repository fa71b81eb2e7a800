use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use docsmith_generate::Document;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("search api error (status {status}): {message}")]
    Api { status: u16, message: String },
    #[error("bulk insert rejected {failed} documents")]
    BulkRejected { failed: usize },
}

/// Thin client for the search engine's REST surface.
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn index_exists(&self, index: &str) -> Result<bool, ClientError> {
        let url = format!("{}/{index}", self.base_url);
        let response = self.http.head(&url).send().await?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(api_error(status, response).await),
        }
    }

    /// Ensure the target index exists, recreating it when `reset` is set.
    ///
    /// The mapping body is sent exactly as it appeared in the mapping file,
    /// so settings and analyzer blocks survive alongside the properties.
    pub async fn create_or_reset_index(
        &self,
        index: &str,
        mapping_body: &Value,
        reset: bool,
    ) -> Result<(), ClientError> {
        let exists = self.index_exists(index).await?;
        if exists && reset {
            warn!(index, "deleting existing index");
            let url = format!("{}/{index}", self.base_url);
            let response = self.http.delete(&url).send().await?;
            if !response.status().is_success() {
                return Err(api_error(response.status(), response).await);
            }
        }

        if !exists || reset {
            info!(index, "creating index");
            let url = format!("{}/{index}", self.base_url);
            let response = self.http.put(&url).json(mapping_body).send().await?;
            if !response.status().is_success() {
                return Err(api_error(response.status(), response).await);
            }
        } else {
            info!(index, "index already exists");
        }
        Ok(())
    }

    /// Load documents through the bulk endpoint. Returns the inserted count.
    pub async fn bulk_insert(
        &self,
        index: &str,
        documents: &[Document],
    ) -> Result<u64, ClientError> {
        if documents.is_empty() {
            return Ok(0);
        }

        let body = bulk_body(index, documents)?;
        let url = format!("{}/_bulk", self.base_url);
        let response = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/x-ndjson")
            .body(body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response.status(), response).await);
        }

        let bulk: BulkResponse = response.json().await?;
        if bulk.errors {
            let failed = bulk.items.iter().filter(|item| item.failed()).count();
            return Err(ClientError::BulkRejected { failed });
        }
        Ok(bulk.items.len() as u64)
    }
}

async fn api_error(status: StatusCode, response: reqwest::Response) -> ClientError {
    let message = response.text().await.unwrap_or_default();
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}

/// NDJSON payload for `/_bulk`: an action line per document, newline
/// terminated.
fn bulk_body(index: &str, documents: &[Document]) -> Result<String, serde_json::Error> {
    let mut body = String::new();
    for document in documents {
        let action = serde_json::json!({"index": {"_index": index}});
        body.push_str(&action.to_string());
        body.push('\n');
        body.push_str(&serde_json::to_string(document)?);
        body.push('\n');
    }
    Ok(body)
}

#[derive(Debug, Deserialize)]
struct BulkResponse {
    errors: bool,
    #[serde(default)]
    items: Vec<BulkItem>,
}

#[derive(Debug, Deserialize)]
struct BulkItem {
    index: Option<BulkItemStatus>,
}

#[derive(Debug, Deserialize)]
struct BulkItemStatus {
    status: u16,
    #[serde(default)]
    error: Option<Value>,
}

impl BulkItem {
    fn failed(&self) -> bool {
        match &self.index {
            Some(status) => status.error.is_some() || status.status >= 300,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(value: Value) -> Document {
        serde_json::from_value(value).expect("document object")
    }

    #[test]
    fn bulk_body_pairs_action_and_source_lines() {
        let documents = vec![
            document(serde_json::json!({"id": "a1"})),
            document(serde_json::json!({"id": "a2"})),
        ];
        let body = bulk_body("articles", &documents).expect("bulk body");

        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], r#"{"index":{"_index":"articles"}}"#);
        assert_eq!(lines[1], r#"{"id":"a1"}"#);
        assert_eq!(lines[2], r#"{"index":{"_index":"articles"}}"#);
        assert_eq!(lines[3], r#"{"id":"a2"}"#);
        assert!(body.ends_with('\n'), "bulk body must end with a newline");
    }

    #[test]
    fn bulk_items_report_failures() {
        let response: BulkResponse = serde_json::from_str(
            r#"{
                "errors": true,
                "items": [
                    {"index": {"status": 201}},
                    {"index": {"status": 400, "error": {"type": "mapper_parsing_exception"}}}
                ]
            }"#,
        )
        .expect("parse bulk response");

        assert!(response.errors);
        let failed = response.items.iter().filter(|item| item.failed()).count();
        assert_eq!(failed, 1);
    }
}
