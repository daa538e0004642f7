//! Embedding trait and the deterministic placeholder implementation.

use std::future::Future;

/// Dimensionality of every embedding produced in this crate.
pub const EMBEDDING_DIM: usize = 384;

/// Converts text into a dense vector embedding.
///
/// Implementations may call external APIs or local models. Uses RPITIT
/// for async without boxing.
pub trait Embedder: Send + Sync {
    /// Embed the given text into a dense float vector.
    fn embed(&self, text: &str) -> impl Future<Output = Vec<f32>> + Send;
}

/// Deterministic, non-semantic placeholder embedder.
///
/// Derives a fixed 384-dimension vector from character codes: position
/// `i` holds `code(i) / 255` for the first `min(len, 384)` characters,
/// zero elsewhere. Deterministic and fixed-dimension is the whole
/// contract — semantic quality is explicitly not.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCodeEmbedder;

impl Embedder for CharCodeEmbedder {
    async fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0; EMBEDDING_DIM];
        for (i, c) in text.chars().take(EMBEDDING_DIM).enumerate() {
            vector[i] = (c as u32 % 256) as f32 / 255.0;
        }
        vector
    }
}
