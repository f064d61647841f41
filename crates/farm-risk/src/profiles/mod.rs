//! Farmer profile sections consumed by the scoring pipeline.

mod domain;

pub use domain::{
    BehavioralBackground, EngagementLevel, FarmerId, FarmerProfile, FinancialBackground,
    Frequency, InputCosts, LoanRecord, ProductionProfile, RepaymentRecord, SavingsBehavior,
    Seasonality, YieldRecord,
};
