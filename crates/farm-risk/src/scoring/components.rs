use serde::{Deserialize, Serialize};

/// Factors that contribute to the three sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    YieldStability,
    CropDiversification,
    InputCostEfficiency,
    RepaymentRecord,
    LoanHistory,
    SavingsBehavior,
    FinancialInfrastructure,
    UpdateFrequency,
    Timeliness,
    TrainingParticipation,
    AdvisoryEngagement,
}

/// Discrete contribution to a sub-score, kept so assessments can be audited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: RiskFactor,
    /// Factor value in [0, 1], higher is better.
    pub value: f64,
    pub weight: f64,
    pub notes: String,
}

impl ScoreComponent {
    pub(crate) fn new(factor: RiskFactor, value: f64, weight: f64, notes: String) -> Self {
        Self {
            factor,
            value,
            weight,
            notes,
        }
    }

    fn weighted(&self) -> f64 {
        self.value * self.weight
    }
}

/// One scorer's result: the sub-score plus the components it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    pub score: f64,
    pub components: Vec<ScoreComponent>,
}

impl SubScore {
    /// Plain weighted sum; used when every factor is always present.
    pub(crate) fn summed(components: Vec<ScoreComponent>) -> Self {
        let score = components.iter().map(ScoreComponent::weighted).sum::<f64>();
        Self {
            score: score.clamp(0.0, 1.0),
            components,
        }
    }

    /// Weighted sum divided by the weights actually applied.
    pub(crate) fn renormalized(components: Vec<ScoreComponent>) -> Self {
        let applied = components.iter().map(|c| c.weight).sum::<f64>();
        let score = if applied > 0.0 {
            components.iter().map(ScoreComponent::weighted).sum::<f64>() / applied
        } else {
            0.0
        };
        Self {
            score: score.clamp(0.0, 1.0),
            components,
        }
    }
}

pub(crate) fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
