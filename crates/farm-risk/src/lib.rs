//! Risk scoring for smallholder farmer profiles.
//!
//! The [`scoring`] pipeline turns production, financial, and behavioral
//! profiles into a risk score and category, [`insights`] maps that result to
//! recommendations and credit terms, and [`assessment`] keeps stored profiles
//! and their derived results in step.

pub mod assessment;
pub mod config;
pub mod error;
pub mod insights;
pub mod profiles;
pub mod scoring;
pub mod telemetry;

pub use insights::{generate_insights, CreditTerms, RiskInsights};
pub use profiles::{
    BehavioralBackground, EngagementLevel, FarmerId, FarmerProfile, FinancialBackground,
    Frequency, InputCosts, LoanRecord, ProductionProfile, RepaymentRecord, SavingsBehavior,
    Seasonality, YieldRecord,
};
pub use scoring::{compute_risk, RiskAssessment, RiskCategory, RiskEngine, ScoringConfig, SubScores};
