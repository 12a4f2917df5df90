//! Mock embedder for testing and offline demos.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use vivaprep_core::traits::Embedder;

const DIMENSIONS: usize = 64;

/// A deterministic offline embedder.
///
/// Hashes each word of the input into a fixed-length bag-of-words vector, so
/// identical texts embed identically (cosine 1.0) and texts sharing words
/// score higher than unrelated ones. No network, no model weights.
pub struct MockEmbedder {
    call_count: AtomicU32,
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self {
            call_count: AtomicU32::new(0),
        }
    }

    /// Number of embed calls made.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        let mut vector = vec![0.0f32; DIMENSIONS];
        for word in text.to_lowercase().split_whitespace() {
            let mut hasher = DefaultHasher::new();
            word.hash(&mut hasher);
            let bucket = (hasher.finish() as usize) % DIMENSIONS;
            vector[bucket] += 1.0;
        }
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        DIMENSIONS
    }
}
