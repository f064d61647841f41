use std::sync::Arc;

use tracing::{debug, info};

use super::repository::{FarmerRecord, ProfileRepository, RepositoryError};
use crate::insights::RiskInsights;
use crate::profiles::{
    BehavioralBackground, FarmerId, FarmerProfile, FinancialBackground, ProductionProfile,
};
use crate::scoring::{RiskAssessment, RiskEngine};

/// Keeps stored farmer profiles and their risk results in step.
pub struct FarmerRiskService<R> {
    repository: Arc<R>,
    engine: Arc<RiskEngine>,
}

impl<R> FarmerRiskService<R>
where
    R: ProfileRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: RiskEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
        }
    }

    /// Score a profile without storing it.
    pub fn assess(&self, profile: &FarmerProfile) -> (RiskAssessment, RiskInsights) {
        self.engine.assess(profile)
    }

    /// Register a farmer with empty profile sections.
    pub fn create(&self, farmer_id: FarmerId) -> Result<FarmerRecord, ServiceError> {
        let record = self.evaluate(FarmerProfile::empty(farmer_id));
        let stored = self.repository.insert(record)?;
        info!(
            farmer_id = %stored.profile.farmer_id,
            risk_score = stored.assessment.score,
            "farmer profile created"
        );
        Ok(stored)
    }

    pub fn get(&self, farmer_id: &FarmerId) -> Result<FarmerRecord, ServiceError> {
        let record = self
            .repository
            .fetch(farmer_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn update_production(
        &self,
        farmer_id: &FarmerId,
        production: ProductionProfile,
    ) -> Result<FarmerRecord, ServiceError> {
        self.replace(farmer_id, |profile| profile.production = production)
    }

    pub fn update_financial(
        &self,
        farmer_id: &FarmerId,
        financial: FinancialBackground,
    ) -> Result<FarmerRecord, ServiceError> {
        self.replace(farmer_id, |profile| profile.financial = financial)
    }

    pub fn update_behavioral(
        &self,
        farmer_id: &FarmerId,
        behavioral: BehavioralBackground,
    ) -> Result<FarmerRecord, ServiceError> {
        self.replace(farmer_id, |profile| profile.behavioral = behavioral)
    }

    fn replace(
        &self,
        farmer_id: &FarmerId,
        apply: impl FnOnce(&mut FarmerProfile),
    ) -> Result<FarmerRecord, ServiceError> {
        let mut apply = Some(apply);
        let mut previous = None;

        let record = self
            .repository
            .modify(farmer_id, &mut |record: &mut FarmerRecord| {
                previous = Some(record.assessment.category);
                let mut profile = record.profile.clone();
                if let Some(apply) = apply.take() {
                    apply(&mut profile);
                }
                *record = self.evaluate(profile);
            })?;
        let previous = previous.unwrap_or(record.assessment.category);

        if record.assessment.category != previous {
            info!(
                farmer_id = %farmer_id,
                from = previous.label(),
                to = record.assessment.category.label(),
                risk_score = record.assessment.score,
                "risk category changed"
            );
        } else {
            debug!(
                farmer_id = %farmer_id,
                risk_score = record.assessment.score,
                category = record.assessment.category.label(),
                "risk recomputed"
            );
        }

        Ok(record)
    }

    fn evaluate(&self, profile: FarmerProfile) -> FarmerRecord {
        let (assessment, insights) = self.engine.assess(&profile);
        FarmerRecord::new(profile, assessment, insights)
    }
}

/// Error raised by the farmer risk service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
