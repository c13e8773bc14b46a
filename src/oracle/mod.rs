//! Sentiment oracle: the text-to-polarity computation.
//!
//! The oracle is a narrow interface (one method, string to score) so the
//! concrete analyzer is swappable and tests can substitute a stand-in.

mod lexicon;

pub use lexicon::LexiconOracle;

use crate::error::OracleResult;

/// Computes a polarity score for a piece of text.
///
/// Implementations must return a score in `[-1.0, 1.0]`: negative for
/// unfavorable text, positive for favorable, zero for neutral.
pub trait PolarityOracle {
    /// Score `text` on the polarity scale.
    fn polarity(&self, text: &str) -> OracleResult<f64>;
}
