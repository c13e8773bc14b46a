//! # Sentilog
//!
//! An interactive sentiment analysis session logger: reads lines of text,
//! scores each one on a polarity scale via a pluggable sentiment oracle,
//! classifies the result into a label and a confidence tier, prints a
//! session summary on exit, and appends the session's records to a CSV
//! dataset.
//!
//! ## Architecture
//!
//! ```text
//! stdin → Interactive Loop → Oracle (text → polarity)
//!                  ↓              ↓
//!              Session ←── Classifier (label + tier)
//!                  ↓
//!          Summary → stdout
//!          Records → CSV dataset (append-only, header-once)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use sentilog::{Config, DatasetWriter, LexiconOracle, Repl};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let writer = DatasetWriter::new(config.dataset.path.clone());
//!     let mut repl = Repl::new(LexiconOracle::new(), writer);
//!     repl.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Sentiment label and confidence tier classification rules.
pub mod classify;
/// Configuration management.
pub mod config;
/// CSV dataset writer.
pub mod dataset;
/// Error types and result aliases for the application.
pub mod error;
/// Sentiment oracle trait and the built-in lexicon implementation.
pub mod oracle;
/// Interactive loop over stdin/stdout.
pub mod repl;
/// Session accumulator and summary statistics.
pub mod session;

pub use classify::{Confidence, Sentiment};
pub use config::Config;
pub use dataset::DatasetWriter;
pub use error::{AppError, AppResult};
pub use oracle::{LexiconOracle, PolarityOracle};
pub use repl::Repl;
pub use session::{AnalysisRecord, Session, SessionSummary};
