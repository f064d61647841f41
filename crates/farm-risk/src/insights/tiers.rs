use crate::scoring::RiskCategory;

/// Fixed advisory template for one risk category.
pub(super) struct CreditTier {
    pub summary: &'static str,
    pub interest_rate_range: &'static str,
    pub loan_amount_range: &'static str,
    pub eligibility: &'static str,
    pub benefits: &'static [&'static str],
}

static LOW_RISK: CreditTier = CreditTier {
    summary: "Low risk profile: strong production, financial discipline, and engagement make you a preferred borrower.",
    interest_rate_range: "8-12%",
    loan_amount_range: "KES 200,000 - 1,000,000",
    eligibility: "Eligible for premium credit products with flexible repayment schedules.",
    benefits: &[
        "Access to the lowest interest rates",
        "Higher loan limits for farm expansion",
        "Flexible repayment tied to harvest cycles",
        "Priority processing of loan applications",
    ],
};

static MEDIUM_RISK: CreditTier = CreditTier {
    summary: "Medium risk profile: a solid foundation with room to strengthen records and financial habits.",
    interest_rate_range: "12-18%",
    loan_amount_range: "KES 50,000 - 200,000",
    eligibility: "Eligible for standard agricultural loans, subject to regular review.",
    benefits: &[
        "Access to standard input financing",
        "Seasonal repayment options",
        "Eligibility for limit increases after on-time repayment",
    ],
};

static HIGH_RISK: CreditTier = CreditTier {
    summary: "High risk profile: lenders will need more evidence of stable production and repayment before extending credit.",
    interest_rate_range: "18-25%",
    loan_amount_range: "KES 10,000 - 50,000",
    eligibility: "Eligible for starter loans, group lending, or guarantor-backed credit.",
    benefits: &[
        "Access to starter and group lending programs",
        "Free financial literacy and agronomy training",
        "A clear path to better terms as your profile improves",
    ],
};

pub(super) fn tier_for(category: RiskCategory) -> &'static CreditTier {
    match category {
        RiskCategory::Low => &LOW_RISK,
        RiskCategory::Medium => &MEDIUM_RISK,
        RiskCategory::High => &HIGH_RISK,
    }
}
