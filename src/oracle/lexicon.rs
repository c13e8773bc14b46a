//! Lexicon-based polarity analyzer.
//!
//! Scores text by averaging word scores from a general-purpose sentiment
//! lexicon, with intensity modifiers ("very", "slightly") and a short
//! negation window ("not good" reads negative).

use std::collections::{HashMap, HashSet};

use super::PolarityOracle;
use crate::error::OracleResult;

/// How many tokens after a negation word still get their score inverted.
const NEGATION_WINDOW: usize = 3;

/// Damping applied when a score is inverted by negation.
const NEGATION_DAMPING: f64 = 0.8;

/// Default sentiment oracle backed by a built-in English lexicon.
#[derive(Debug, Clone)]
pub struct LexiconOracle {
    scores: HashMap<&'static str, f64>,
    modifiers: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl LexiconOracle {
    /// Create an oracle with the built-in lexicon.
    pub fn new() -> Self {
        Self {
            scores: build_score_lexicon(),
            modifiers: build_modifier_lexicon(),
            negations: build_negation_set(),
        }
    }

    /// Score a single text. Text with no lexicon matches scores 0.0.
    fn score(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();

        let mut total = 0.0;
        let mut matched = 0usize;
        let mut modifier = 1.0;
        let mut negated_for = 0usize;

        for token in lowered.split_whitespace() {
            let word = trim_token(token);
            if word.is_empty() {
                continue;
            }

            if self.negations.contains(word) {
                negated_for = NEGATION_WINDOW;
                continue;
            }

            if let Some(factor) = self.modifiers.get(word) {
                modifier = *factor;
                continue;
            }

            if let Some(base) = self.scores.get(word) {
                let mut score = base * modifier;
                if negated_for > 0 {
                    score = -score * NEGATION_DAMPING;
                }
                total += score;
                matched += 1;
                // Modifier applies to the next sentiment word only.
                modifier = 1.0;
            }

            negated_for = negated_for.saturating_sub(1);
        }

        if matched == 0 {
            0.0
        } else {
            (total / matched as f64).clamp(-1.0, 1.0)
        }
    }
}

impl Default for LexiconOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityOracle for LexiconOracle {
    fn polarity(&self, text: &str) -> OracleResult<f64> {
        Ok(self.score(text))
    }
}

/// Strip surrounding punctuation, keeping apostrophes for contractions.
fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
}

fn build_score_lexicon() -> HashMap<&'static str, f64> {
    let entries: &[(&'static str, f64)] = &[
        // Strong positive
        ("love", 0.7),
        ("loved", 0.7),
        ("amazing", 0.8),
        ("excellent", 0.8),
        ("fantastic", 0.8),
        ("incredible", 0.85),
        ("wonderful", 0.8),
        ("outstanding", 0.85),
        ("perfect", 0.9),
        ("brilliant", 0.8),
        ("awesome", 0.75),
        ("delighted", 0.8),
        ("superb", 0.8),
        ("best", 0.8),
        // Moderate positive
        ("good", 0.5),
        ("great", 0.7),
        ("nice", 0.45),
        ("happy", 0.6),
        ("pleased", 0.55),
        ("enjoy", 0.55),
        ("enjoyed", 0.55),
        ("like", 0.4),
        ("liked", 0.4),
        ("useful", 0.45),
        ("helpful", 0.5),
        ("recommend", 0.55),
        ("recommended", 0.55),
        ("solid", 0.45),
        ("smooth", 0.4),
        ("fast", 0.35),
        ("reliable", 0.5),
        ("works", 0.35),
        ("positive", 0.5),
        ("fine", 0.3),
        ("decent", 0.35),
        ("satisfied", 0.5),
        ("impressive", 0.6),
        ("promising", 0.55),
        // Strong negative
        ("hate", -0.75),
        ("hated", -0.75),
        ("terrible", -0.8),
        ("horrible", -0.85),
        ("awful", -0.8),
        ("worst", -0.85),
        ("disgusting", -0.9),
        ("useless", -0.75),
        ("garbage", -0.8),
        ("scam", -0.95),
        ("disaster", -0.9),
        ("unacceptable", -0.8),
        ("furious", -0.8),
        ("angry", -0.7),
        // Moderate negative
        ("bad", -0.5),
        ("poor", -0.5),
        ("disappointing", -0.6),
        ("disappointed", -0.6),
        ("broken", -0.6),
        ("slow", -0.35),
        ("annoying", -0.5),
        ("frustrating", -0.55),
        ("confusing", -0.4),
        ("buggy", -0.55),
        ("crash", -0.6),
        ("crashed", -0.6),
        ("fail", -0.55),
        ("failed", -0.55),
        ("dislike", -0.45),
        ("negative", -0.5),
        ("mediocre", -0.4),
        ("weak", -0.4),
        ("boring", -0.4),
        ("sad", -0.5),
        ("worried", -0.45),
        ("problem", -0.35),
        ("problems", -0.35),
        ("issue", -0.3),
        ("issues", -0.3),
    ];
    entries.iter().copied().collect()
}

fn build_modifier_lexicon() -> HashMap<&'static str, f64> {
    let entries: &[(&'static str, f64)] = &[
        ("very", 1.5),
        ("really", 1.4),
        ("extremely", 1.8),
        ("incredibly", 1.7),
        ("absolutely", 1.6),
        ("totally", 1.4),
        ("highly", 1.4),
        ("quite", 1.2),
        ("somewhat", 0.8),
        ("slightly", 0.7),
        ("barely", 0.6),
        ("fairly", 0.9),
        ("pretty", 1.2),
    ];
    entries.iter().copied().collect()
}

fn build_negation_set() -> HashSet<&'static str> {
    [
        "not", "no", "never", "neither", "nobody", "nothing", "hardly", "don't", "dont",
        "doesn't", "doesnt", "didn't", "didnt", "can't", "cant", "couldn't", "couldnt", "won't",
        "wont", "wouldn't", "wouldnt", "isn't", "isnt", "aren't", "arent", "wasn't", "wasnt",
        "weren't", "werent",
    ]
    .iter()
    .copied()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_phrase() {
        let oracle = LexiconOracle::new();
        let score = oracle.polarity("I love this product").unwrap();
        assert!(score > 0.0, "expected positive score, got {}", score);
    }

    #[test]
    fn test_negative_phrase() {
        let oracle = LexiconOracle::new();
        let score = oracle.polarity("I hate this").unwrap();
        assert!(score < 0.0, "expected negative score, got {}", score);
    }

    #[test]
    fn test_unknown_words_are_neutral() {
        let oracle = LexiconOracle::new();
        assert_eq!(oracle.polarity("the quarterly ledger arrived").unwrap(), 0.0);
        assert_eq!(oracle.polarity("").unwrap(), 0.0);
    }

    #[test]
    fn test_negation_inverts() {
        let oracle = LexiconOracle::new();
        let plain = oracle.polarity("this is good").unwrap();
        let negated = oracle.polarity("this is not good").unwrap();
        assert!(plain > 0.0);
        assert!(negated < 0.0, "negated score should flip, got {}", negated);
    }

    #[test]
    fn test_modifier_intensifies() {
        let oracle = LexiconOracle::new();
        let plain = oracle.polarity("good").unwrap();
        let intensified = oracle.polarity("very good").unwrap();
        assert!(intensified > plain);
    }

    #[test]
    fn test_score_stays_in_range() {
        let oracle = LexiconOracle::new();
        let score = oracle
            .polarity("extremely perfect extremely amazing extremely incredible")
            .unwrap();
        assert!((-1.0..=1.0).contains(&score));
    }

    #[test]
    fn test_punctuation_ignored() {
        let oracle = LexiconOracle::new();
        let bare = oracle.polarity("great").unwrap();
        let punctuated = oracle.polarity("Great!!!").unwrap();
        assert_eq!(bare, punctuated);
    }
}
