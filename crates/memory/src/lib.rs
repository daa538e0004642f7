//! Embedding and nearest-neighbor retrieval for chat grounding.
//!
//! The retriever holds page text and dense vectors for the lifetime of
//! the process — nothing here persists across restarts. Embeddings come
//! from a pluggable [`Embedder`]; the default [`CharCodeEmbedder`] is a
//! deterministic, non-semantic placeholder, good enough for the core
//! contract while a production embedding backend stays an external
//! collaborator.

pub use embedder::{CharCodeEmbedder, EMBEDDING_DIM, Embedder};
pub use retriever::{Retriever, cosine_similarity};

mod embedder;
mod retriever;
