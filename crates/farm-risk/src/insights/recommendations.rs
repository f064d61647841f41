use crate::profiles::{
    BehavioralBackground, EngagementLevel, FinancialBackground, ProductionProfile, SavingsBehavior,
};
use crate::scoring::{RiskCategory, ScoringConfig};

pub(crate) const DIVERSIFY_CROPS: &str =
    "Diversify into at least one more crop to spread weather and market risk";
pub(crate) const KEEP_SAVING: &str =
    "Move to consistent monthly savings to unlock the highest loan limits";
pub(crate) const RECORD_YIELDS: &str =
    "Record yields for at least two seasons so lenders can see production stability";
pub(crate) const IMPROVE_REPAYMENT: &str =
    "Repay existing loans on schedule to improve your repayment record";
pub(crate) const OPEN_BANK_ACCOUNT: &str =
    "Open a bank account to build a formal financial history";
pub(crate) const JOIN_TRAINING: &str =
    "Join an agronomy or financial literacy training session";
pub(crate) const START_SAVING: &str =
    "Start a regular savings habit, even small weekly deposits through M-Pesa";
pub(crate) const GET_INSURANCE: &str =
    "Consider crop insurance to protect against weather-related losses";
pub(crate) const INCREASE_MPESA: &str =
    "Increase M-Pesa usage for farm payments to build a digital transaction history";
pub(crate) const COMPLETE_PROFILE: &str =
    "Complete your profile to improve the accuracy of your assessment";

/// Builds the ordered recommendation list. Order is part of the contract.
pub(super) fn recommend(
    config: &ScoringConfig,
    score: f64,
    category: RiskCategory,
    production: &ProductionProfile,
    financial: &FinancialBackground,
    behavioral: &BehavioralBackground,
) -> Vec<String> {
    let mut recommendations: Vec<&'static str> = Vec::new();
    let few_crops = production.distinct_crop_count() < 2;

    match category {
        RiskCategory::Low => {
            if few_crops {
                recommendations.push(DIVERSIFY_CROPS);
            }
            if financial.savings_behavior != SavingsBehavior::Consistent {
                recommendations.push(KEEP_SAVING);
            }
        }
        RiskCategory::Medium => {
            if production.yield_history.len() < 2 {
                recommendations.push(RECORD_YIELDS);
            }
            if financial.repayment_record.needs_improvement() {
                recommendations.push(IMPROVE_REPAYMENT);
            }
            if few_crops {
                recommendations.push(DIVERSIFY_CROPS);
            }
        }
        RiskCategory::High => {
            if !financial.bank_account {
                recommendations.push(OPEN_BANK_ACCOUNT);
            }
            if behavioral.training_participation.is_empty() {
                recommendations.push(JOIN_TRAINING);
            }
            if financial.repayment_record.needs_improvement() {
                recommendations.push(IMPROVE_REPAYMENT);
            }
            if matches!(
                financial.savings_behavior,
                SavingsBehavior::None | SavingsBehavior::Irregular
            ) {
                recommendations.push(START_SAVING);
            }
        }
    }

    if score > config.insurance_threshold {
        recommendations.push(GET_INSURANCE);
    }
    if financial.mobile_money_usage == EngagementLevel::Low {
        recommendations.push(INCREASE_MPESA);
    }
    if behavioral.profile_completeness < config.completeness_threshold {
        recommendations.push(COMPLETE_PROFILE);
    }

    recommendations.into_iter().map(str::to_string).collect()
}
