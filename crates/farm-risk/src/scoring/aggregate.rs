use serde::{Deserialize, Serialize};

const PRODUCTION_WEIGHT: f64 = 0.3;
const FINANCIAL_WEIGHT: f64 = 0.4;
const BEHAVIORAL_WEIGHT: f64 = 0.3;

const LOW_RISK_CEILING: f64 = 0.3;
const MEDIUM_RISK_CEILING: f64 = 0.7;

/// Coarse risk bucket. Upper bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    /// Category for a risk score; recomputed every time, no hysteresis.
    pub fn from_score(score: f64) -> Self {
        if score <= LOW_RISK_CEILING {
            Self::Low
        } else if score <= MEDIUM_RISK_CEILING {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// The three creditworthiness sub-scores, higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub production: f64,
    pub financial: f64,
    pub behavioral: f64,
}

impl SubScores {
    pub fn blend(&self) -> f64 {
        PRODUCTION_WEIGHT * self.production
            + FINANCIAL_WEIGHT * self.financial
            + BEHAVIORAL_WEIGHT * self.behavioral
    }

    /// Inverted blend so 0 is the lowest risk.
    pub fn risk_score(&self) -> f64 {
        (1.0 - self.blend()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_upper_bounds() {
        assert_eq!(RiskCategory::from_score(0.0), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(0.30), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(0.3000001), RiskCategory::Medium);
        assert_eq!(RiskCategory::from_score(0.70), RiskCategory::Medium);
        assert_eq!(RiskCategory::from_score(0.7000001), RiskCategory::High);
        assert_eq!(RiskCategory::from_score(1.0), RiskCategory::High);
    }

    #[test]
    fn risk_score_inverts_blend() {
        let perfect = SubScores {
            production: 1.0,
            financial: 1.0,
            behavioral: 1.0,
        };
        assert!(perfect.risk_score() < 1e-9);

        let empty = SubScores {
            production: 0.0,
            financial: 0.0,
            behavioral: 0.0,
        };
        assert_eq!(empty.risk_score(), 1.0);
    }

    #[test]
    fn financial_weighs_heaviest() {
        let financial_only = SubScores {
            production: 0.0,
            financial: 1.0,
            behavioral: 0.0,
        };
        assert!((financial_only.blend() - 0.4).abs() < 1e-12);
    }
}
