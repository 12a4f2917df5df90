//! CSV question store.
//!
//! Loads question records from a flat CSV dataset and supports filtering by
//! category and random sampling without replacement.

use std::path::Path;

use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::error::CoreError;
use crate::model::QuestionRecord;

/// Raw CSV row. Headers match the dataset: `Question, IdealAnswer, Category, Keywords`.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Question")]
    question: String,
    #[serde(rename = "IdealAnswer")]
    ideal_answer: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Keywords", default)]
    keywords: String,
}

impl From<CsvRow> for QuestionRecord {
    fn from(row: CsvRow) -> Self {
        // Keywords stay in source form (split on commas, untrimmed); the
        // keyword checker trims each one at comparison time.
        let keywords = if row.keywords.is_empty() {
            Vec::new()
        } else {
            row.keywords.split(',').map(str::to_string).collect()
        };
        QuestionRecord {
            question: row.question,
            ideal_answer: row.ideal_answer,
            category: row.category,
            keywords,
        }
    }
}

/// An immutable, in-memory set of question records.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    records: Vec<QuestionRecord>,
}

impl QuestionBank {
    /// Load a bank from a CSV file.
    pub fn load_csv(path: &Path) -> Result<Self, CoreError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            CoreError::Dataset(format!("failed to open {}: {e}", path.display()))
        })?;

        let mut records = Vec::new();
        for row in reader.deserialize::<CsvRow>() {
            let row = row.map_err(|e| {
                CoreError::Dataset(format!("malformed row in {}: {e}", path.display()))
            })?;
            records.push(QuestionRecord::from(row));
        }

        tracing::info!("loaded {} questions from {}", records.len(), path.display());
        Ok(Self { records })
    }

    /// Build a bank from already-constructed records (useful for testing).
    pub fn from_records(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }

    /// All records, in dataset order.
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    /// Number of records in the bank.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the bank holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut cats: Vec<String> = self
            .records
            .iter()
            .map(|r| r.category.clone())
            .collect();
        cats.sort();
        cats.dedup();
        cats
    }

    /// Draw `n` records uniformly at random **without replacement**.
    ///
    /// If `category` is given, records are filtered by case-insensitive exact
    /// category match first. Fails with `EmptyCategory` when the filter
    /// matches nothing, `InsufficientQuestions` when `n` exceeds the filtered
    /// set, and `InvalidCount` when `n` is zero.
    pub fn sample(
        &self,
        n: usize,
        category: Option<&str>,
    ) -> Result<Vec<QuestionRecord>, CoreError> {
        if n == 0 {
            return Err(CoreError::InvalidCount);
        }

        let filtered: Vec<&QuestionRecord> = match category {
            Some(cat) => {
                let matches: Vec<&QuestionRecord> = self
                    .records
                    .iter()
                    .filter(|r| r.category.eq_ignore_ascii_case(cat))
                    .collect();
                if matches.is_empty() {
                    return Err(CoreError::EmptyCategory(cat.to_string()));
                }
                matches
            }
            None => self.records.iter().collect(),
        };

        if n > filtered.len() {
            return Err(CoreError::InsufficientQuestions {
                requested: n,
                available: filtered.len(),
            });
        }

        let mut rng = rand::thread_rng();
        let sampled = filtered
            .choose_multiple(&mut rng, n)
            .map(|r| (*r).clone())
            .collect();
        Ok(sampled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn bank() -> QuestionBank {
        QuestionBank::from_records(
            (0..10)
                .map(|i| QuestionRecord {
                    question: format!("Question {i}"),
                    ideal_answer: format!("Answer {i}"),
                    category: if i % 2 == 0 { "Rust".into() } else { "SQL".into() },
                    keywords: vec![format!("kw{i}")],
                })
                .collect(),
        )
    }

    #[test]
    fn sample_returns_exactly_n_without_duplicates() {
        let bank = bank();
        let sampled = bank.sample(5, None).unwrap();
        assert_eq!(sampled.len(), 5);

        let mut questions: Vec<&str> = sampled.iter().map(|r| r.question.as_str()).collect();
        questions.sort();
        questions.dedup();
        assert_eq!(questions.len(), 5, "sampling must not repeat records");
    }

    #[test]
    fn sample_respects_category_filter() {
        let bank = bank();
        let sampled = bank.sample(3, Some("rust")).unwrap();
        assert_eq!(sampled.len(), 3);
        assert!(sampled.iter().all(|r| r.category == "Rust"));
    }

    #[test]
    fn sample_unknown_category_fails() {
        let bank = bank();
        let err = bank.sample(1, Some("Go")).unwrap_err();
        assert!(matches!(err, CoreError::EmptyCategory(_)));
    }

    #[test]
    fn sample_oversampling_fails() {
        let bank = bank();
        let err = bank.sample(6, Some("Rust")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientQuestions {
                requested: 6,
                available: 5
            }
        ));
    }

    #[test]
    fn sample_zero_count_fails() {
        let bank = bank();
        assert!(matches!(
            bank.sample(0, None).unwrap_err(),
            CoreError::InvalidCount
        ));
    }

    #[test]
    fn categories_distinct_and_sorted() {
        let bank = bank();
        assert_eq!(bank.categories(), vec!["Rust".to_string(), "SQL".to_string()]);
    }

    #[test]
    fn load_csv_parses_headers_and_keywords() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Question,IdealAnswer,Category,Keywords").unwrap();
        writeln!(
            file,
            "What are design patterns?,Reusable solutions,Design,\"design patterns, SOLID\""
        )
        .unwrap();

        let bank = QuestionBank::load_csv(file.path()).unwrap();
        assert_eq!(bank.len(), 1);
        let record = &bank.records()[0];
        assert_eq!(record.category, "Design");
        // Source form is preserved, including the leading space.
        assert_eq!(record.keywords, vec!["design patterns", " SOLID"]);
    }

    #[test]
    fn load_csv_missing_file_fails() {
        let err = QuestionBank::load_csv(Path::new("no_such_file.csv")).unwrap_err();
        assert!(matches!(err, CoreError::Dataset(_)));
    }
}
