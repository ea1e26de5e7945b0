pub mod embedding_client;
pub mod orchestrator;
pub mod poi_store;
pub mod replacement_service;
pub mod route_builder;
pub mod semantic_search;
pub mod vector_store;

pub use embedding_client::{EmbeddingClient, HttpEmbeddingClient};
pub use orchestrator::{MultiQueryOrchestrator, RankedPoi};
pub use poi_store::PoiInfoStore;
pub use replacement_service::ReplacementService;
pub use semantic_search::SemanticSearchClient;
pub use vector_store::{QdrantVectorStore, VectorStore};
