use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for farmers tracked by the assessment service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FarmerId(pub String);

impl fmt::Display for FarmerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Complete farmer snapshot; each section is replaced wholesale on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub farmer_id: FarmerId,
    #[serde(default)]
    pub production: ProductionProfile,
    #[serde(default)]
    pub financial: FinancialBackground,
    #[serde(default)]
    pub behavioral: BehavioralBackground,
}

impl FarmerProfile {
    /// Profile as created on first interaction, before the farmer fills anything in.
    pub fn empty(farmer_id: FarmerId) -> Self {
        Self {
            farmer_id,
            production: ProductionProfile::default(),
            financial: FinancialBackground::default(),
            behavioral: BehavioralBackground::default(),
        }
    }
}

/// Crop, yield, and cost data describing what the farm produces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionProfile {
    pub crop_types: BTreeSet<String>,
    pub acreage: f64,
    pub yield_history: Vec<YieldRecord>,
    pub input_costs: InputCosts,
    pub seasonality: Seasonality,
}

impl ProductionProfile {
    /// Crop names counted once each, ignoring case and surrounding whitespace.
    pub fn distinct_crop_count(&self) -> usize {
        self.crop_types
            .iter()
            .map(|crop| crop.trim().to_ascii_lowercase())
            .filter(|crop| !crop.is_empty())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// One harvest entry; `yield` is a keyword so the field is `yield_amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldRecord {
    pub year: i32,
    #[serde(rename = "yield", alias = "yield_amount")]
    pub yield_amount: f64,
    pub crop: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputCosts {
    pub seeds: f64,
    pub fertilizer: f64,
    pub pesticides: f64,
    pub labor: f64,
}

impl InputCosts {
    pub fn total(&self) -> f64 {
        self.seeds + self.fertilizer + self.pesticides + self.labor
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Seasonality {
    pub primary: String,
    pub secondary: Option<String>,
}

/// Income, credit, and savings history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialBackground {
    pub income_sources: BTreeSet<String>,
    pub monthly_income: f64,
    pub past_loans: Vec<LoanRecord>,
    pub savings_behavior: SavingsBehavior,
    pub repayment_record: RepaymentRecord,
    pub bank_account: bool,
    #[serde(alias = "mpesa_usage")]
    pub mobile_money_usage: EngagementLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub year: i32,
    pub amount: f64,
    pub repaid: bool,
    pub on_time: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SavingsBehavior {
    #[default]
    None,
    Irregular,
    Regular,
    Consistent,
}

impl SavingsBehavior {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Irregular => "Irregular",
            Self::Regular => "Regular",
            Self::Consistent => "Consistent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum RepaymentRecord {
    #[default]
    Poor,
    Fair,
    Good,
    Excellent,
}

impl RepaymentRecord {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    pub const fn needs_improvement(self) -> bool {
        matches!(self, Self::Poor | Self::Fair)
    }
}

/// Three-step level shared by M-Pesa usage and advisory engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum EngagementLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl EngagementLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Engagement and data hygiene signals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BehavioralBackground {
    pub data_update_frequency: Frequency,
    pub timeliness_score: f64,
    pub training_participation: BTreeSet<String>,
    pub advisory_engagement: EngagementLevel,
    pub app_usage_frequency: Frequency,
    pub profile_completeness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Frequency {
    #[default]
    Rare,
    Monthly,
    Weekly,
    Daily,
}

impl Frequency {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rare => "Rare",
            Self::Monthly => "Monthly",
            Self::Weekly => "Weekly",
            Self::Daily => "Daily",
        }
    }
}
