//! The embedding backend trait.
//!
//! Implemented by the `vivaprep-providers` crate for OpenAI, Ollama, and an
//! offline mock. Defined here so the evaluator can depend on the trait
//! without knowing about any concrete backend.

use async_trait::async_trait;

/// Trait for text-embedding backends.
///
/// The embedding model is treated as an opaque function from text to a
/// fixed-length vector; the evaluator only ever compares two vectors with
/// cosine similarity.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Human-readable backend name (e.g. "openai").
    fn name(&self) -> &str;

    /// Embed a single text into a fixed-length vector.
    async fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>>;

    /// Dimension of the vectors this backend produces.
    fn dimensions(&self) -> usize;
}
