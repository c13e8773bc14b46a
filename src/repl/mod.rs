//! Interactive analysis loop over stdin/stdout.
//!
//! A two-state machine: `Reading` until the operator enters a sentinel
//! (`exit`/`quit`, case-insensitive) or stdin reaches EOF, then the
//! session summary is printed, the dataset append is attempted, and the
//! loop moves to `Terminated`.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::dataset::DatasetWriter;
use crate::error::AppResult;
use crate::oracle::PolarityOracle;
use crate::session::Session;

/// Operator input, classified before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sentinel token: end the session.
    Quit,
    /// Blank line: ignore and re-prompt.
    Empty,
    /// Free-form text to analyze (trimmed).
    Analyze(String),
}

impl Command {
    /// Classify one raw input line. Surrounding whitespace is ignored and
    /// the sentinel comparison is case-insensitive.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Command::Empty
        } else if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            Command::Quit
        } else {
            Command::Analyze(trimmed.to_string())
        }
    }
}

/// Loop state. `Terminated` is final; there is no way back to `Reading`.
#[derive(Debug, PartialEq, Eq)]
enum LoopState {
    Reading,
    Terminated,
}

/// The interactive session driver.
pub struct Repl<O> {
    oracle: O,
    session: Session,
    writer: DatasetWriter,
}

impl<O: PolarityOracle> Repl<O> {
    /// Create a driver with a fresh session.
    pub fn new(oracle: O, writer: DatasetWriter) -> Self {
        Self {
            oracle,
            session: Session::new(),
            writer,
        }
    }

    /// The identifier of the session being driven.
    pub fn session_id(&self) -> &str {
        self.session.id()
    }

    /// Run the loop over process stdin/stdout.
    pub async fn run(&mut self) -> AppResult<()> {
        let stdin = tokio::io::stdin();
        let stdout = tokio::io::stdout();
        self.run_with(BufReader::new(stdin), stdout).await
    }

    /// Run the loop over arbitrary streams (tests substitute buffers).
    pub async fn run_with<R, W>(&mut self, mut reader: R, mut out: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let banner = format!(
            "=== 🧠 Sentiment Analytics Session ===\n\
             Session ID: {}\n\
             Type 'exit' to end session and generate report.\n\n",
            self.session.id()
        );
        out.write_all(banner.as_bytes()).await?;
        out.flush().await?;

        info!(session_id = %self.session.id(), "Interactive session started");

        let mut line = String::new();
        let mut state = LoopState::Reading;

        while state == LoopState::Reading {
            out.write_all(b">> Enter text: ").await?;
            out.flush().await?;

            line.clear();
            let bytes_read = reader.read_line(&mut line).await?;

            let command = if bytes_read == 0 {
                info!("EOF on stdin, ending session");
                Command::Quit
            } else {
                Command::parse(&line)
            };

            match command {
                Command::Empty => continue,
                Command::Quit => {
                    self.finalize(&mut out).await?;
                    state = LoopState::Terminated;
                }
                Command::Analyze(text) => {
                    // Oracle failures propagate: fail fast, no recovery.
                    let record = self.session.analyze(&self.oracle, &text)?;
                    let result_line = format!(
                        "   [Analysis] {} {} | Score: {} | Confidence: {}\n",
                        record.sentiment,
                        record.sentiment.marker(),
                        record.polarity_score,
                        record.confidence
                    );
                    out.write_all(result_line.as_bytes()).await?;
                    out.flush().await?;
                }
            }
        }

        Ok(())
    }

    /// Print the summary and attempt the dataset append.
    ///
    /// Storage failures are caught here, reported to the operator, and
    /// otherwise non-fatal: the interactive work is already done.
    async fn finalize<W>(&self, out: &mut W) -> AppResult<()>
    where
        W: AsyncWrite + Unpin,
    {
        out.write_all(b"\nFinalizing session...\n").await?;

        match self.session.summarize() {
            Some(summary) => {
                out.write_all(format!("\n{}\n\n", summary).as_bytes()).await?;
            }
            None => {
                out.write_all(b"\n[System] No data to summarize.\n\n").await?;
            }
        }

        match self.writer.append(self.session.records()) {
            Ok(()) => {
                if !self.session.is_empty() {
                    let confirmation = format!(
                        "[System] Session data successfully appended to '{}'\n",
                        self.writer.path().display()
                    );
                    out.write_all(confirmation.as_bytes()).await?;
                }
                debug!(rows = self.session.len(), "Dataset append complete");
            }
            Err(e) => {
                error!(error = %e, "Dataset append failed");
                let notice = format!("[Error] Data storage failed: {}\n", e);
                out.write_all(notice.as_bytes()).await?;
            }
        }

        out.flush().await?;
        Ok(())
    }
}
