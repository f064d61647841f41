use super::components::{RiskFactor, ScoreComponent, SubScore};
use super::config::ScoringConfig;
use crate::profiles::{EngagementLevel, FinancialBackground, RepaymentRecord, SavingsBehavior};

const REPAYMENT_WEIGHT: f64 = 0.4;
const LOAN_HISTORY_WEIGHT: f64 = 0.3;
const SAVINGS_WEIGHT: f64 = 0.2;
const INFRASTRUCTURE_WEIGHT: f64 = 0.1;

const REPAID_SHARE: f64 = 0.6;
const ON_TIME_SHARE: f64 = 0.4;
const BANK_ACCOUNT_CREDIT: f64 = 0.5;

pub(crate) fn score_financial(background: &FinancialBackground, config: &ScoringConfig) -> SubScore {
    let repayment = repayment_value(background.repayment_record);
    let savings = savings_value(background.savings_behavior);
    let (loan_history, loan_notes) = loan_history(background, config);

    let bank = if background.bank_account {
        BANK_ACCOUNT_CREDIT
    } else {
        0.0
    };
    let infrastructure = bank + mobile_money_value(background.mobile_money_usage);

    SubScore::summed(vec![
        ScoreComponent::new(
            RiskFactor::RepaymentRecord,
            repayment,
            REPAYMENT_WEIGHT,
            format!("{} repayment record", background.repayment_record.label()),
        ),
        ScoreComponent::new(
            RiskFactor::LoanHistory,
            loan_history,
            LOAN_HISTORY_WEIGHT,
            loan_notes,
        ),
        ScoreComponent::new(
            RiskFactor::SavingsBehavior,
            savings,
            SAVINGS_WEIGHT,
            format!("{} savings", background.savings_behavior.label()),
        ),
        ScoreComponent::new(
            RiskFactor::FinancialInfrastructure,
            infrastructure,
            INFRASTRUCTURE_WEIGHT,
            format!(
                "bank account: {}, M-Pesa usage: {}",
                if background.bank_account { "yes" } else { "no" },
                background.mobile_money_usage.label()
            ),
        ),
    ])
}

fn loan_history(background: &FinancialBackground, config: &ScoringConfig) -> (f64, String) {
    let loans = &background.past_loans;
    if loans.is_empty() {
        return (
            config.neutral_loan_history,
            "no prior loans, neutral history applied".to_string(),
        );
    }

    let total = loans.len() as f64;
    let repaid = loans.iter().filter(|loan| loan.repaid).count() as f64;
    let on_time = loans.iter().filter(|loan| loan.on_time).count() as f64;
    let value = REPAID_SHARE * (repaid / total) + ON_TIME_SHARE * (on_time / total);

    (
        value,
        format!(
            "{} of {} loan(s) repaid, {} on time",
            repaid as usize, total as usize, on_time as usize
        ),
    )
}

const fn repayment_value(record: RepaymentRecord) -> f64 {
    match record {
        RepaymentRecord::Poor => 0.2,
        RepaymentRecord::Fair => 0.5,
        RepaymentRecord::Good => 0.8,
        RepaymentRecord::Excellent => 1.0,
    }
}

const fn savings_value(behavior: SavingsBehavior) -> f64 {
    match behavior {
        SavingsBehavior::None => 0.2,
        SavingsBehavior::Irregular => 0.5,
        SavingsBehavior::Regular => 0.8,
        SavingsBehavior::Consistent => 1.0,
    }
}

const fn mobile_money_value(level: EngagementLevel) -> f64 {
    match level {
        EngagementLevel::High => 0.5,
        EngagementLevel::Medium => 0.3,
        EngagementLevel::Low => 0.1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::LoanRecord;

    fn loan(repaid: bool, on_time: bool) -> LoanRecord {
        LoanRecord {
            year: 2023,
            amount: 20_000.0,
            repaid,
            on_time,
        }
    }

    #[test]
    fn empty_loan_history_uses_neutral_constant() {
        let background = FinancialBackground::default();
        let (value, notes) = loan_history(&background, &ScoringConfig::default());
        assert_eq!(value, 0.6);
        assert!(notes.contains("neutral"));
    }

    #[test]
    fn blends_repaid_and_on_time_rates() {
        let background = FinancialBackground {
            past_loans: vec![loan(true, true), loan(true, false)],
            ..FinancialBackground::default()
        };
        let (value, _) = loan_history(&background, &ScoringConfig::default());
        // 0.6 * 1.0 + 0.4 * 0.5
        assert!((value - 0.8).abs() < 1e-9);
    }

    #[test]
    fn strongest_background_scores_near_one() {
        let background = FinancialBackground {
            repayment_record: RepaymentRecord::Excellent,
            savings_behavior: SavingsBehavior::Consistent,
            past_loans: vec![loan(true, true)],
            bank_account: true,
            mobile_money_usage: EngagementLevel::High,
            ..FinancialBackground::default()
        };
        let result = score_financial(&background, &ScoringConfig::default());
        assert!((result.score - 1.0).abs() < 1e-9);
        assert_eq!(result.components.len(), 4);
    }

    #[test]
    fn weakest_background_matches_table_values() {
        let result = score_financial(&FinancialBackground::default(), &ScoringConfig::default());
        // 0.4 * 0.2 + 0.3 * 0.6 + 0.2 * 0.2 + 0.1 * 0.1
        assert!((result.score - 0.31).abs() < 1e-9);
    }
}
