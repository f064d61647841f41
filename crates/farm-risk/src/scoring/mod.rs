mod aggregate;
mod behavioral;
mod components;
mod config;
mod financial;
mod production;

pub use aggregate::{RiskCategory, SubScores};
pub use components::{RiskFactor, ScoreComponent, SubScore};
pub use config::{ScoringConfig, ScoringConfigError};

use behavioral::score_behavioral;
use financial::score_financial;
use production::score_production;
use serde::{Deserialize, Serialize};

use crate::insights::{self, RiskInsights};
use crate::profiles::{BehavioralBackground, FarmerProfile, FinancialBackground, ProductionProfile};

/// Stateless scorer carrying the rubric configuration it was built with.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: ScoringConfig,
}

impl RiskEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn compute_risk(
        &self,
        production: &ProductionProfile,
        financial: &FinancialBackground,
        behavioral: &BehavioralBackground,
    ) -> RiskAssessment {
        let production = score_production(production, &self.config);
        let financial = score_financial(financial, &self.config);
        let behavioral = score_behavioral(behavioral);

        let sub_scores = SubScores {
            production: production.score,
            financial: financial.score,
            behavioral: behavioral.score,
        };
        let score = sub_scores.risk_score();

        let mut components = production.components;
        components.extend(financial.components);
        components.extend(behavioral.components);

        RiskAssessment {
            score,
            category: RiskCategory::from_score(score),
            sub_scores,
            components,
        }
    }

    pub fn generate_insights(
        &self,
        score: f64,
        category: RiskCategory,
        production: &ProductionProfile,
        financial: &FinancialBackground,
        behavioral: &BehavioralBackground,
    ) -> RiskInsights {
        insights::build(
            &self.config,
            score,
            category,
            production,
            financial,
            behavioral,
        )
    }

    /// Score a full profile and derive insights from the same result.
    pub fn assess(&self, profile: &FarmerProfile) -> (RiskAssessment, RiskInsights) {
        let assessment =
            self.compute_risk(&profile.production, &profile.financial, &profile.behavioral);
        let insights = self.generate_insights(
            assessment.score,
            assessment.category,
            &profile.production,
            &profile.financial,
            &profile.behavioral,
        );
        (assessment, insights)
    }
}

/// Scores with the default rubric configuration.
pub fn compute_risk(
    production: &ProductionProfile,
    financial: &FinancialBackground,
    behavioral: &BehavioralBackground,
) -> RiskAssessment {
    RiskEngine::default().compute_risk(production, financial, behavioral)
}

/// Scoring output. `category` is always derived from `score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: f64,
    pub category: RiskCategory,
    pub sub_scores: SubScores,
    pub components: Vec<ScoreComponent>,
}
