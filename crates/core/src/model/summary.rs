use thiserror::Error;

use crate::model::AnswerRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("quiz has no questions")]
    Empty,

    #[error("{records} answers recorded for a quiz of {total} questions")]
    TooManyRecords { records: usize, total: usize },
}

/// End-of-quiz report built from the answer records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    total: usize,
    score: usize,
    records: Vec<AnswerRecord>,
}

impl QuizSummary {
    /// # Errors
    ///
    /// Returns `SummaryError::Empty` when `total` is zero and
    /// `SummaryError::TooManyRecords` when more answers than questions are given.
    pub fn from_records(total: usize, records: Vec<AnswerRecord>) -> Result<Self, SummaryError> {
        if total == 0 {
            return Err(SummaryError::Empty);
        }
        if records.len() > total {
            return Err(SummaryError::TooManyRecords {
                records: records.len(),
                total,
            });
        }

        let score = records.iter().filter(|record| record.correct).count();
        Ok(Self {
            total,
            score,
            records,
        })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    /// Share of correct answers, rounded to the nearest whole percent.
    #[must_use]
    pub fn percent(&self) -> usize {
        (self.score * 100 + self.total / 2) / self.total
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}
