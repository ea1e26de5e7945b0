use crate::error::Result;
use crate::models::SemanticHit;
use crate::services::{EmbeddingClient, VectorStore};
use std::sync::Arc;
use uuid::Uuid;

/// Thin composition of an embedding client and a vector store: embeds the
/// query text, then runs it through the configured nearest-neighbor search.
pub struct SemanticSearchClient {
    embeddings: Arc<dyn EmbeddingClient>,
    vectors: Arc<dyn VectorStore>,
}

impl SemanticSearchClient {
    pub fn new(embeddings: Arc<dyn EmbeddingClient>, vectors: Arc<dyn VectorStore>) -> Self {
        SemanticSearchClient { embeddings, vectors }
    }

    pub async fn search(&self, query: &str, top_k: u32) -> Result<Vec<SemanticHit>> {
        let embedding = self.embeddings.embed(query).await?;
        self.vectors.search(&embedding, query, top_k).await
    }

    pub async fn search_filtered(&self, query: &str, top_k: u32, ids: &[Uuid]) -> Result<Vec<SemanticHit>> {
        let embedding = self.embeddings.embed(query).await?;
        self.vectors.search_filtered(&embedding, query, top_k, ids).await
    }

    /// Checks vector store connectivity directly, without a live embedding
    /// round trip through `search`.
    pub async fn vector_store_health(&self) -> bool {
        self.vectors.health_check().await
    }
}
