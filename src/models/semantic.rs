use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One hit from the vector store for a single query string, with the
/// category the orchestrator decided best represents that query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticHit {
    pub poi_id: Uuid,
    pub similarity: f64,
    pub assigned_category: String,
}
