//! In-memory nearest-neighbor retrieval over prior page content.

use anyhow::{Result, bail};

/// Cosine similarity between two dense vectors.
///
/// Zero-norm vectors and length mismatches yield `0.0` — a NaN must
/// never propagate into ranking.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 { 0.0 } else { dot / denom }
}

/// Document store with cosine-similarity top-k lookup.
///
/// Explicitly constructed and dependency-injected — there is no global
/// instance. [`ensure_initialized`](Retriever::ensure_initialized) must
/// be called before use and is idempotent.
#[derive(Debug, Default)]
pub struct Retriever {
    documents: Vec<String>,
    embeddings: Vec<Vec<f32>>,
    initialized: bool,
}

impl Retriever {
    /// Create an uninitialized retriever.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare the retriever for use. Idempotent — calling it again is
    /// a no-op.
    pub fn ensure_initialized(&mut self) {
        self.initialized = true;
    }

    /// Add a document and its embedding (1:1, same insertion order).
    pub fn add_document(&mut self, text: impl Into<String>, embedding: Vec<f32>) -> Result<()> {
        if !self.initialized {
            bail!("retriever is not initialized");
        }
        self.documents.push(text.into());
        self.embeddings.push(embedding);
        Ok(())
    }

    /// The `k` most similar documents to the query embedding, best
    /// first.
    ///
    /// Full stable sort by descending score: equal scores preserve
    /// insertion order. An empty store yields an empty result.
    pub fn find_relevant_context(&self, query: &[f32], k: usize) -> Result<Vec<String>> {
        if !self.initialized {
            bail!("retriever is not initialized");
        }
        if self.embeddings.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(f32, usize)> = self
            .embeddings
            .iter()
            .enumerate()
            .map(|(idx, embedding)| (cosine_similarity(query, embedding), idx))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(_, idx)| self.documents[idx].clone())
            .collect())
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
