use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::insights::RiskInsights;
use crate::profiles::{FarmerId, FarmerProfile};
use crate::scoring::{RiskAssessment, RiskCategory};

/// Stored profile together with the results derived from it.
///
/// `assessment` and `insights` are written in the same call as `profile`; a
/// record never carries results computed from an older profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerRecord {
    pub profile: FarmerProfile,
    pub assessment: RiskAssessment,
    pub insights: RiskInsights,
    pub assessed_at: DateTime<Utc>,
}

impl FarmerRecord {
    /// Stamps a freshly computed result with the current time.
    pub fn new(profile: FarmerProfile, assessment: RiskAssessment, insights: RiskInsights) -> Self {
        Self {
            profile,
            assessment,
            insights,
            assessed_at: Utc::now(),
        }
    }

    pub fn view(&self) -> FarmerRiskView {
        FarmerRiskView {
            farmer_id: self.profile.farmer_id.clone(),
            risk_score: self.assessment.score,
            risk_category: self.assessment.category,
            insights: self.insights.clone(),
            assessed_at: self.assessed_at,
        }
    }
}

/// Storage abstraction so the service can be exercised without a database.
pub trait ProfileRepository: Send + Sync {
    fn insert(&self, record: FarmerRecord) -> Result<FarmerRecord, RepositoryError>;
    /// Applies `apply` to the stored record while holding it exclusively, so
    /// concurrent saves for the same farmer cannot overwrite each other.
    /// Returns the record as stored afterwards.
    fn modify(
        &self,
        id: &FarmerId,
        apply: &mut dyn FnMut(&mut FarmerRecord),
    ) -> Result<FarmerRecord, RepositoryError>;
    fn fetch(&self, id: &FarmerId) -> Result<Option<FarmerRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Public shape of a farmer's current risk standing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerRiskView {
    pub farmer_id: FarmerId,
    pub risk_score: f64,
    pub risk_category: RiskCategory,
    pub insights: RiskInsights,
    pub assessed_at: DateTime<Utc>,
}
