use crate::error::{AppError, Result};
use crate::models::SemanticHit;
use async_trait::async_trait;
use qdrant_client::qdrant::{Condition, Filter, PointId, QueryPointsBuilder};
use qdrant_client::Qdrant;
use uuid::Uuid;

/// Nearest-neighbor search over POI embeddings, optionally restricted to a
/// caller-supplied id set. `query_text` is recorded on each hit as
/// `assigned_category` — the category a POI is shortlisted under is the
/// query that won it, not any field on the POI's own vector payload.
#[async_trait]
pub trait VectorStore: Send + Sync {
    async fn search(&self, query: &[f32], query_text: &str, top_k: u32) -> Result<Vec<SemanticHit>>;

    async fn search_filtered(&self, query: &[f32], query_text: &str, top_k: u32, ids: &[Uuid]) -> Result<Vec<SemanticHit>>;

    async fn health_check(&self) -> bool;
}

pub struct QdrantVectorStore {
    client: Qdrant,
    collection_name: String,
}

impl QdrantVectorStore {
    pub fn new(client: Qdrant, collection_name: String) -> Self {
        QdrantVectorStore {
            client,
            collection_name,
        }
    }

    async fn run_search(&self, query: &[f32], query_text: &str, top_k: u32, filter: Option<Filter>) -> Result<Vec<SemanticHit>> {
        let mut builder = QueryPointsBuilder::new(&self.collection_name)
            .query(query.to_vec())
            .limit(top_k as u64)
            .with_payload(true);
        if let Some(filter) = filter {
            builder = builder.filter(filter);
        }

        let response = self
            .client
            .query(builder)
            .await
            .map_err(|e| AppError::VectorStore(format!("qdrant query failed: {}", e)))?;

        response
            .result
            .into_iter()
            .map(|point| {
                let poi_id = point_id_to_uuid(point.id.as_ref())
                    .ok_or_else(|| AppError::VectorStore("qdrant point id was not a uuid".to_string()))?;
                Ok(SemanticHit {
                    poi_id,
                    similarity: point.score as f64,
                    assigned_category: query_text.to_string(),
                })
            })
            .collect()
    }
}

fn point_id_to_uuid(id: Option<&PointId>) -> Option<Uuid> {
    use qdrant_client::qdrant::point_id::PointIdOptions;
    match id?.point_id_options.as_ref()? {
        PointIdOptions::Uuid(s) => Uuid::parse_str(s).ok(),
        PointIdOptions::Num(_) => None,
    }
}

#[async_trait]
impl VectorStore for QdrantVectorStore {
    async fn search(&self, query: &[f32], query_text: &str, top_k: u32) -> Result<Vec<SemanticHit>> {
        self.run_search(query, query_text, top_k, None).await
    }

    async fn search_filtered(&self, query: &[f32], query_text: &str, top_k: u32, ids: &[Uuid]) -> Result<Vec<SemanticHit>> {
        if ids.is_empty() {
            return Err(AppError::InvalidRequest(
                "id-filtered semantic search requires a non-empty id set".to_string(),
            ));
        }
        let point_ids: Vec<PointId> = ids.iter().map(|id| PointId::from(id.to_string())).collect();
        let filter = Filter::must([Condition::has_id(point_ids)]);
        self.run_search(query, query_text, top_k, Some(filter)).await
    }

    async fn health_check(&self) -> bool {
        self.client.collection_info(&self.collection_name).await.is_ok()
    }
}
