//! Core data model types for vivaprep.
//!
//! These are the fundamental types the entire system uses to represent
//! questions, per-answer evaluations, and sentiment labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single interview question with its reference answer.
///
/// Immutable once loaded from the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// The question presented to the user.
    pub question: String,
    /// The reference answer the candidate answer is scored against.
    pub ideal_answer: String,
    /// Topic label used for filtered sampling.
    pub category: String,
    /// Reference keywords expected in a good answer.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// The result of evaluating one free-text answer.
///
/// Produced per submission and formatted at the presentation boundary;
/// the session only retains `similarity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Semantic similarity rescaled to the 0–10 range (unclamped).
    pub similarity: f64,
    /// Reference keywords absent from the answer, in dataset order.
    pub missing_keywords: Vec<String>,
    /// Tone of the answer.
    pub sentiment: Sentiment,
}

/// Tone classification of an answer.
///
/// Zero or negative polarity both map to `NeutralOrNegative`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    NeutralOrNegative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive tone"),
            Sentiment::NeutralOrNegative => write!(f, "Neutral/Negative tone"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_display() {
        assert_eq!(Sentiment::Positive.to_string(), "Positive tone");
        assert_eq!(
            Sentiment::NeutralOrNegative.to_string(),
            "Neutral/Negative tone"
        );
    }

    #[test]
    fn question_record_serde_roundtrip() {
        let record = QuestionRecord {
            question: "What is ownership?".into(),
            ideal_answer: "Each value has a single owner.".into(),
            category: "Rust".into(),
            keywords: vec!["owner".into(), "borrow".into()],
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: QuestionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.category, "Rust");
        assert_eq!(back.keywords.len(), 2);
    }
}
