//! Answer evaluation: similarity scoring, keyword checking, sentiment tagging.

use std::sync::Arc;

use anyhow::Result;

use crate::model::{Evaluation, QuestionRecord, Sentiment};
use crate::traits::Embedder;

/// Words counted toward positive polarity.
const LEXICON_POSITIVE: &[&str] = &[
    "good", "great", "love", "loved", "like", "liked", "enjoy", "enjoyed", "excited", "exciting",
    "excellent", "happy", "passionate", "confident", "nice", "best", "strong", "proud",
];

/// Words counted toward negative polarity.
const LEXICON_NEGATIVE: &[&str] = &[
    "bad", "hate", "hated", "awful", "terrible", "boring", "worst", "dislike", "disliked", "weak",
    "poor", "difficult", "frustrating", "annoying",
];

/// Cosine similarity between two vectors, in [-1, 1].
///
/// Mismatched dimensions or a zero-magnitude vector yield 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        tracing::warn!(
            "cosine_similarity dimension mismatch: a={}, b={}",
            a.len(),
            b.len()
        );
        return 0.0;
    }
    if a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Reference keywords absent from the candidate answer.
///
/// Each keyword is trimmed and checked for case-insensitive substring
/// containment. Input order is preserved; duplicate keywords produce
/// duplicate entries.
pub fn missing_keywords(candidate: &str, keywords: &[String]) -> Vec<String> {
    let candidate_lower = candidate.to_lowercase();
    keywords
        .iter()
        .map(|kw| kw.trim())
        .filter(|kw| !kw.is_empty() && !candidate_lower.contains(&kw.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Classify the tone of an answer with a fixed-lexicon polarity count.
///
/// Polarity is the positive word count minus the negative word count over
/// whitespace/punctuation-split tokens. Strictly positive polarity maps to
/// `Positive`; zero and negative both map to `NeutralOrNegative`.
pub fn classify(candidate: &str) -> Sentiment {
    let lowered = candidate.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let positive = tokens
        .iter()
        .filter(|t| LEXICON_POSITIVE.contains(t))
        .count() as i32;
    let negative = tokens
        .iter()
        .filter(|t| LEXICON_NEGATIVE.contains(t))
        .count() as i32;

    if positive - negative > 0 {
        Sentiment::Positive
    } else {
        Sentiment::NeutralOrNegative
    }
}

/// Scores candidate answers against reference answers through an embedding
/// backend.
pub struct Evaluator {
    embedder: Arc<dyn Embedder>,
}

impl Evaluator {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    /// Backend name, for logging and transcripts.
    pub fn backend(&self) -> &str {
        self.embedder.name()
    }

    /// Semantic similarity between candidate and reference, rescaled to 0–10.
    ///
    /// The raw cosine is multiplied by 10 with no clamping; a score
    /// fractionally outside [0, 10] passes through unmodified.
    pub async fn similarity(&self, candidate: &str, reference: &str) -> Result<f64> {
        let candidate_vec = self.embedder.embed(candidate).await?;
        let reference_vec = self.embedder.embed(reference).await?;
        let cosine = cosine_similarity(&candidate_vec, &reference_vec);
        tracing::debug!(cosine, "scored answer");
        Ok(cosine as f64 * 10.0)
    }

    /// Full per-answer evaluation: similarity, missing keywords, sentiment.
    pub async fn evaluate(&self, candidate: &str, record: &QuestionRecord) -> Result<Evaluation> {
        let similarity = self.similarity(candidate, &record.ideal_answer).await?;
        Ok(Evaluation {
            similarity,
            missing_keywords: missing_keywords(candidate, &record.keywords),
            sentiment: classify(candidate),
        })
    }
}
