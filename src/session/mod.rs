//! Session accumulator: one analysis record per input, plus the
//! end-of-session summary statistics.

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::classify::{Confidence, Sentiment};
use crate::error::{AppResult, OracleError};
use crate::oracle::PolarityOracle;

/// Timestamp format for analysis records (local wall-clock, second precision).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One analyzed input.
///
/// Field order is the dataset column order; the CSV header is derived
/// from it. Records are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Identifier of the session that produced this record.
    pub session_id: String,
    /// Local wall-clock time of analysis, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    /// The raw input text, unmodified.
    pub text: String,
    /// Sentiment label derived from the sign of the polarity.
    pub sentiment: Sentiment,
    /// Polarity score rounded to 2 decimal places.
    pub polarity_score: f64,
    /// Confidence tier derived from the unrounded polarity magnitude.
    pub confidence: Confidence,
}

/// One interactive run: a generated identifier and an ordered,
/// append-only sequence of records.
#[derive(Debug)]
pub struct Session {
    id: String,
    records: Vec<AnalysisRecord>,
}

impl Session {
    /// Start an empty session with a fresh 8-character identifier.
    pub fn new() -> Self {
        let mut id = Uuid::new_v4().to_string();
        id.truncate(8);
        Self {
            id,
            records: Vec::new(),
        }
    }

    /// The session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The records accumulated so far, in analysis order.
    pub fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    /// Number of records accumulated so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no input has been analyzed yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Analyze one input: invoke the oracle, classify, and append a record.
    ///
    /// The confidence tier is derived from the unrounded polarity so the
    /// stored rounding cannot shift a score across a tier boundary.
    /// Oracle failures propagate uncaught.
    pub fn analyze(
        &mut self,
        oracle: &dyn PolarityOracle,
        text: &str,
    ) -> AppResult<AnalysisRecord> {
        let polarity = oracle.polarity(text)?;
        if !(-1.0..=1.0).contains(&polarity) {
            return Err(OracleError::ScoreOutOfRange { score: polarity }.into());
        }

        let record = AnalysisRecord {
            session_id: self.id.clone(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            text: text.to_string(),
            sentiment: Sentiment::from_score(polarity),
            polarity_score: round2(polarity),
            confidence: Confidence::from_score(polarity),
        };

        debug!(
            session_id = %self.id,
            sentiment = %record.sentiment,
            score = record.polarity_score,
            "Input analyzed"
        );

        self.records.push(record.clone());
        Ok(record)
    }

    /// Aggregate statistics over the session, or `None` when empty.
    pub fn summarize(&self) -> Option<SessionSummary> {
        if self.records.is_empty() {
            return None;
        }

        let positives = self.count_label(Sentiment::Positive);
        let negatives = self.count_label(Sentiment::Negative);
        let neutrals = self.count_label(Sentiment::Neutral);

        // Mean over the stored (rounded) scores, matching the dataset.
        let total_score: f64 = self.records.iter().map(|r| r.polarity_score).sum();
        let average_polarity = total_score / self.records.len() as f64;

        Some(SessionSummary {
            total: self.records.len(),
            positives,
            negatives,
            neutrals,
            average_polarity,
        })
    }

    fn count_label(&self, label: Sentiment) -> usize {
        self.records.iter().filter(|r| r.sentiment == label).count()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate statistics for a completed session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// Number of inputs analyzed.
    pub total: usize,
    /// Count of `Positive` records.
    pub positives: usize,
    /// Count of `Negative` records.
    pub negatives: usize,
    /// Count of `Neutral` records.
    pub neutrals: usize,
    /// Arithmetic mean of the stored polarity scores.
    pub average_polarity: f64,
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "=".repeat(30);
        writeln!(f, "{}", rule)?;
        writeln!(f, " 📊 SESSION ANALYTICS SUMMARY")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Total Inputs Analyzed : {}", self.total)?;
        writeln!(
            f,
            "Sentiment Distribution: {} Pos | {} Neg | {} Neu",
            self.positives, self.negatives, self.neutrals
        )?;
        writeln!(f, "Average Polarity      : {:.2}", self.average_polarity)?;
        write!(f, "{}", rule)
    }
}

/// Round a polarity score to 2 decimal places for storage and display.
fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
