//! Advisory text and credit terms derived from a risk assessment.

mod recommendations;
mod tiers;


use serde::{Deserialize, Serialize};

use crate::profiles::{BehavioralBackground, FinancialBackground, ProductionProfile};
use crate::scoring::{RiskCategory, ScoringConfig};
use recommendations::recommend;
use tiers::tier_for;

/// Indicative lending terms for a risk category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditTerms {
    pub interest_rate_range: String,
    pub loan_amount_range: String,
    pub eligibility: String,
}

/// Recommendations and credit terms; rebuilt from scratch on every assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskInsights {
    pub category: RiskCategory,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub credit_terms: CreditTerms,
    pub benefits: Vec<String>,
}

/// Insights under the default rubric configuration.
pub fn generate_insights(
    score: f64,
    category: RiskCategory,
    production: &ProductionProfile,
    financial: &FinancialBackground,
    behavioral: &BehavioralBackground,
) -> RiskInsights {
    build(
        &ScoringConfig::default(),
        score,
        category,
        production,
        financial,
        behavioral,
    )
}

pub(crate) fn build(
    config: &ScoringConfig,
    score: f64,
    category: RiskCategory,
    production: &ProductionProfile,
    financial: &FinancialBackground,
    behavioral: &BehavioralBackground,
) -> RiskInsights {
    let tier = tier_for(category);

    RiskInsights {
        category,
        summary: format!("{} (risk score {:.2})", tier.summary, score),
        recommendations: recommend(config, score, category, production, financial, behavioral),
        credit_terms: CreditTerms {
            interest_rate_range: tier.interest_rate_range.to_string(),
            loan_amount_range: tier.loan_amount_range.to_string(),
            eligibility: tier.eligibility.to_string(),
        },
        benefits: tier.benefits.iter().map(|benefit| benefit.to_string()).collect(),
    }
}
