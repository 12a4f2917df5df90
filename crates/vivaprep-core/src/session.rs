//! The session controller state machine.
//!
//! Drives progression `Setup -> Asking(0) -> ... -> Asking(n-1) -> Complete`
//! and back to `Setup` on restart. Both front ends (the one-pass console
//! loop and the interactive stateful loop) drive this one controller; the
//! controller itself never talks to the embedding backend — front ends
//! evaluate an answer first and then record the resulting score.
//!
//! Invariant: the number of recorded scores always equals the index of the
//! question currently being asked.

use crate::error::CoreError;
use crate::model::QuestionRecord;
use crate::store::QuestionBank;

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No questions selected yet; waiting for category and count.
    Setup,
    /// Asking the i-th selected question (0-based).
    Asking(usize),
    /// All questions answered; the report can be rendered.
    Complete,
}

/// A single practice session over a question bank.
pub struct SessionController {
    bank: QuestionBank,
    questions: Vec<QuestionRecord>,
    scores: Vec<f64>,
    category: Option<String>,
    started: bool,
}

impl SessionController {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            questions: Vec::new(),
            scores: Vec::new(),
            category: None,
            started: false,
        }
    }

    /// The underlying question bank.
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Current phase, derived from recorded state.
    pub fn phase(&self) -> SessionPhase {
        if !self.started {
            SessionPhase::Setup
        } else if self.scores.len() < self.questions.len() {
            SessionPhase::Asking(self.scores.len())
        } else {
            SessionPhase::Complete
        }
    }

    /// Select questions and move to `Asking(0)`.
    ///
    /// Samples `count` questions without replacement, filtered by `category`
    /// when given. Starting while a session is in progress discards it.
    pub fn start(&mut self, category: Option<&str>, count: usize) -> Result<(), CoreError> {
        let questions = self.bank.sample(count, category)?;
        self.questions = questions;
        self.scores.clear();
        self.category = category.map(str::to_string);
        self.started = true;
        tracing::debug!(
            count = self.questions.len(),
            category = self.category.as_deref().unwrap_or("any"),
            "session started"
        );
        Ok(())
    }

    /// The question currently being asked, with its 0-based index.
    pub fn current(&self) -> Option<(usize, &QuestionRecord)> {
        match self.phase() {
            SessionPhase::Asking(i) => Some((i, &self.questions[i])),
            _ => None,
        }
    }

    /// Record the score for the current question and advance.
    pub fn record(&mut self, score: f64) -> Result<SessionPhase, CoreError> {
        match self.phase() {
            SessionPhase::Setup => Err(CoreError::NotStarted),
            SessionPhase::Complete => Err(CoreError::SessionComplete),
            SessionPhase::Asking(_) => {
                self.scores.push(score);
                Ok(self.phase())
            }
        }
    }

    /// Scores recorded so far, one per answered question.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Number of questions selected for this session.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Category filter chosen at start, if any.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Mean of the recorded scores; `None` until at least one is recorded.
    pub fn average(&self) -> Option<f64> {
        if self.scores.is_empty() {
            None
        } else {
            Some(self.scores.iter().sum::<f64>() / self.scores.len() as f64)
        }
    }

    /// Question/score pairs for the final report, in asking order.
    pub fn review(&self) -> impl Iterator<Item = (&QuestionRecord, f64)> {
        self.questions.iter().zip(self.scores.iter().copied())
    }

    /// Clear all session fields and return to `Setup`.
    pub fn restart(&mut self) {
        self.questions.clear();
        self.scores.clear();
        self.category = None;
        self.started = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> QuestionBank {
        QuestionBank::from_records(
            (0..6)
                .map(|i| QuestionRecord {
                    question: format!("Q{i}"),
                    ideal_answer: format!("A{i}"),
                    category: if i < 3 { "Rust".into() } else { "SQL".into() },
                    keywords: vec![],
                })
                .collect(),
        )
    }

    #[test]
    fn full_session_walkthrough() {
        let mut session = SessionController::new(bank());
        assert_eq!(session.phase(), SessionPhase::Setup);

        session.start(None, 3).unwrap();
        assert_eq!(session.phase(), SessionPhase::Asking(0));
        assert!(session.current().is_some());

        assert_eq!(session.record(7.0).unwrap(), SessionPhase::Asking(1));
        assert_eq!(session.record(8.0).unwrap(), SessionPhase::Asking(2));
        assert_eq!(session.record(9.0).unwrap(), SessionPhase::Complete);

        assert_eq!(session.scores().len(), 3);
        let avg = session.average().unwrap();
        assert!((avg - 8.0).abs() < f64::EPSILON);
        assert_eq!(session.review().count(), 3);

        session.restart();
        assert_eq!(session.phase(), SessionPhase::Setup);
        assert!(session.scores().is_empty());
        assert_eq!(session.question_count(), 0);
        assert!(session.category().is_none());
        assert!(session.average().is_none());
    }

    #[test]
    fn score_count_tracks_current_index() {
        let mut session = SessionController::new(bank());
        session.start(None, 4).unwrap();

        for expected in 0..4 {
            match session.phase() {
                SessionPhase::Asking(i) => {
                    assert_eq!(i, expected);
                    assert_eq!(session.scores().len(), i);
                }
                other => panic!("unexpected phase {other:?}"),
            }
            session.record(5.0).unwrap();
        }
        assert_eq!(session.phase(), SessionPhase::Complete);
    }

    #[test]
    fn record_before_start_fails() {
        let mut session = SessionController::new(bank());
        assert!(matches!(
            session.record(5.0).unwrap_err(),
            CoreError::NotStarted
        ));
    }

    #[test]
    fn record_after_complete_fails() {
        let mut session = SessionController::new(bank());
        session.start(None, 1).unwrap();
        session.record(5.0).unwrap();
        assert!(matches!(
            session.record(5.0).unwrap_err(),
            CoreError::SessionComplete
        ));
    }

    #[test]
    fn start_with_category_only_selects_matching() {
        let mut session = SessionController::new(bank());
        session.start(Some("rust"), 3).unwrap();
        while let Some((_, record)) = session.current() {
            assert_eq!(record.category, "Rust");
            session.record(1.0).unwrap();
        }
    }

    #[test]
    fn start_errors_propagate() {
        let mut session = SessionController::new(bank());
        assert!(matches!(
            session.start(Some("Go"), 1).unwrap_err(),
            CoreError::EmptyCategory(_)
        ));
        assert!(matches!(
            session.start(None, 7).unwrap_err(),
            CoreError::InsufficientQuestions { .. }
        ));
        assert!(matches!(
            session.start(None, 0).unwrap_err(),
            CoreError::InvalidCount
        ));
        assert_eq!(session.phase(), SessionPhase::Setup);
    }
}
