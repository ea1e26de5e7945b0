use crate::error::{AppError, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// Produces an embedding vector for a free-text query, delegating to an
/// out-of-scope embedding service over HTTP.
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

pub struct HttpEmbeddingClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl HttpEmbeddingClient {
    pub fn new(base_url: String, model: String) -> Self {
        HttpEmbeddingClient {
            client: reqwest::Client::new(),
            base_url,
            model,
        }
    }
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    embedding: Vec<f32>,
}

#[async_trait]
impl EmbeddingClient for HttpEmbeddingClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let response = self
            .client
            .post(format!("{}/embed", self.base_url))
            .json(&serde_json::json!({ "model": self.model, "input": text }))
            .send()
            .await
            .map_err(|e| AppError::Embedding(format!("embedding request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Embedding(format!(
                "embedding service returned status {}",
                response.status()
            )));
        }

        let body: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| AppError::Embedding(format!("malformed embedding response: {}", e)))?;

        Ok(body.embedding)
    }
}
