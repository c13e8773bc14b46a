//! Classification rules mapping a polarity score to a sentiment label
//! and a confidence tier.
//!
//! Both rules are pure and total: any finite score classifies without
//! a failure mode.

use serde::{Deserialize, Serialize};

/// Sentiment label derived from the sign of a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    /// Polarity strictly greater than zero.
    Positive,
    /// Polarity strictly less than zero.
    Negative,
    /// Polarity exactly zero.
    Neutral,
}

impl Sentiment {
    /// Classify a polarity score by its sign.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Decorative marker shown next to the label in interactive output.
    /// Display-only, never persisted to the dataset.
    pub fn marker(&self) -> &'static str {
        match self {
            Sentiment::Positive => "😊",
            Sentiment::Negative => "😠",
            Sentiment::Neutral => "😐",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

impl std::str::FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            _ => Err(format!("Unknown sentiment label: {}", s)),
        }
    }
}

/// Confidence tier derived from the magnitude of a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    /// Magnitude at or below 0.3.
    Low,
    /// Magnitude above 0.3, at or below 0.6.
    Medium,
    /// Magnitude above 0.6.
    High,
}

impl Confidence {
    /// Classify a polarity score by its magnitude.
    ///
    /// Boundary magnitudes (exactly 0.3 or 0.6) fall into the lower tier.
    pub fn from_score(score: f64) -> Self {
        let magnitude = score.abs();
        if magnitude > 0.6 {
            Confidence::High
        } else if magnitude > 0.3 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Low => write!(f, "Low"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Confidence::Low),
            "medium" => Ok(Confidence::Medium),
            "high" => Ok(Confidence::High),
            _ => Err(format!("Unknown confidence tier: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_sign_rule() {
        assert_eq!(Sentiment::from_score(0.01), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(1.0), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(-0.01), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(-1.0), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(0.0), Sentiment::Neutral);
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(Confidence::from_score(0.61), Confidence::High);
        assert_eq!(Confidence::from_score(1.0), Confidence::High);
        assert_eq!(Confidence::from_score(0.31), Confidence::Medium);
        assert_eq!(Confidence::from_score(0.5), Confidence::Medium);
        assert_eq!(Confidence::from_score(0.3), Confidence::Low);
        assert_eq!(Confidence::from_score(0.0), Confidence::Low);
    }

    #[test]
    fn test_confidence_boundaries_fall_into_lower_tier() {
        assert_eq!(Confidence::from_score(0.6), Confidence::Medium);
        assert_eq!(Confidence::from_score(-0.6), Confidence::Medium);
        assert_eq!(Confidence::from_score(0.3), Confidence::Low);
        assert_eq!(Confidence::from_score(-0.3), Confidence::Low);
    }

    #[test]
    fn test_confidence_symmetric_in_sign() {
        for s in [0.0, 0.1, 0.3, 0.35, 0.6, 0.65, 1.0] {
            assert_eq!(Confidence::from_score(s), Confidence::from_score(-s));
        }
    }

    #[test]
    fn test_display_round_trip() {
        for sentiment in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
            let parsed: Sentiment = sentiment.to_string().parse().unwrap();
            assert_eq!(parsed, sentiment);
        }
        for confidence in [Confidence::Low, Confidence::Medium, Confidence::High] {
            let parsed: Confidence = confidence.to_string().parse().unwrap();
            assert_eq!(parsed, confidence);
        }
    }

    #[test]
    fn test_marker_per_label() {
        assert_eq!(Sentiment::Positive.marker(), "😊");
        assert_eq!(Sentiment::Negative.marker(), "😠");
        assert_eq!(Sentiment::Neutral.marker(), "😐");
    }
}
