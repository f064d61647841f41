use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_COST_CEILING: f64 = 500_000.0;
pub const DEFAULT_NEUTRAL_LOAN_HISTORY: f64 = 0.6;
pub const DEFAULT_INSURANCE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_COMPLETENESS_THRESHOLD: f64 = 0.8;

/// Tunable constants of the scoring rubric. The factor weights themselves are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Total input spend at which cost efficiency bottoms out.
    pub input_cost_ceiling: f64,
    /// Loan history score used when the farmer has never borrowed.
    pub neutral_loan_history: f64,
    /// Risk scores above this suggest crop insurance.
    pub insurance_threshold: f64,
    /// Profiles less complete than this are asked to fill in the rest.
    pub completeness_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            input_cost_ceiling: DEFAULT_INPUT_COST_CEILING,
            neutral_loan_history: DEFAULT_NEUTRAL_LOAN_HISTORY,
            insurance_threshold: DEFAULT_INSURANCE_THRESHOLD,
            completeness_threshold: DEFAULT_COMPLETENESS_THRESHOLD,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        if !self.input_cost_ceiling.is_finite() || self.input_cost_ceiling <= 0.0 {
            return Err(ScoringConfigError::InputCostCeiling(self.input_cost_ceiling));
        }

        let fractions = [
            ("neutral_loan_history", self.neutral_loan_history),
            ("insurance_threshold", self.insurance_threshold),
            ("completeness_threshold", self.completeness_threshold),
        ];
        for (field, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(ScoringConfigError::OutOfRange { field, value });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("input cost ceiling must be a positive number, got {0}")]
    InputCostCeiling(f64),
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfRange { field: &'static str, value: f64 },
}
