use std::collections::HashMap;
use std::sync::{Arc, Barrier, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::repository::{FarmerRecord, ProfileRepository, RepositoryError};
use crate::assessment::{risk_router, FarmerRiskService};
use crate::profiles::{
    BehavioralBackground, EngagementLevel, FarmerId, FinancialBackground, Frequency, InputCosts,
    ProductionProfile, RepaymentRecord, SavingsBehavior, YieldRecord,
};
use crate::scoring::RiskEngine;

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<FarmerId, FarmerRecord>>,
}

impl ProfileRepository for MemoryRepository {
    fn insert(&self, record: FarmerRecord) -> Result<FarmerRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile.farmer_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile.farmer_id.clone(), record.clone());
        Ok(record)
    }

    fn modify(
        &self,
        id: &FarmerId,
        apply: &mut dyn FnMut(&mut FarmerRecord),
    ) -> Result<FarmerRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let existing = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        apply(existing);
        Ok(existing.clone())
    }

    fn fetch(&self, id: &FarmerId) -> Result<Option<FarmerRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn insert(&self, _record: FarmerRecord) -> Result<FarmerRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn modify(
        &self,
        _id: &FarmerId,
        _apply: &mut dyn FnMut(&mut FarmerRecord),
    ) -> Result<FarmerRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &FarmerId) -> Result<Option<FarmerRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Holds every save at a barrier until all callers have arrived, so their
/// read-modify-write cycles overlap.
pub(super) struct RendezvousRepository {
    pub(super) inner: MemoryRepository,
    pub(super) barrier: Barrier,
}

impl RendezvousRepository {
    pub(super) fn new(parties: usize) -> Self {
        Self {
            inner: MemoryRepository::default(),
            barrier: Barrier::new(parties),
        }
    }
}

impl ProfileRepository for RendezvousRepository {
    fn insert(&self, record: FarmerRecord) -> Result<FarmerRecord, RepositoryError> {
        self.inner.insert(record)
    }

    fn modify(
        &self,
        id: &FarmerId,
        apply: &mut dyn FnMut(&mut FarmerRecord),
    ) -> Result<FarmerRecord, RepositoryError> {
        self.barrier.wait();
        self.inner.modify(id, apply)
    }

    fn fetch(&self, id: &FarmerId) -> Result<Option<FarmerRecord>, RepositoryError> {
        self.inner.fetch(id)
    }
}

pub(super) fn build_service() -> (FarmerRiskService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = FarmerRiskService::new(repository.clone(), RiskEngine::default());
    (service, repository)
}

pub(super) fn router_with_service(service: FarmerRiskService<MemoryRepository>) -> axum::Router {
    risk_router(Arc::new(service))
}

pub(super) fn farmer(id: &str) -> FarmerId {
    FarmerId(id.to_string())
}

pub(super) fn diversified_production() -> ProductionProfile {
    ProductionProfile {
        crop_types: ["Maize", "Beans", "Sorghum"]
            .iter()
            .map(|crop| crop.to_string())
            .collect(),
        acreage: 4.5,
        yield_history: vec![
            YieldRecord {
                year: 2022,
                yield_amount: 20.0,
                crop: "Maize".to_string(),
            },
            YieldRecord {
                year: 2023,
                yield_amount: 22.0,
                crop: "Maize".to_string(),
            },
        ],
        input_costs: InputCosts {
            seeds: 8_000.0,
            fertilizer: 12_000.0,
            pesticides: 3_000.0,
            labor: 15_000.0,
        },
        ..ProductionProfile::default()
    }
}

pub(super) fn strong_financial() -> FinancialBackground {
    FinancialBackground {
        income_sources: ["Crop Sales".to_string()].into_iter().collect(),
        monthly_income: 50_000.0,
        repayment_record: RepaymentRecord::Excellent,
        savings_behavior: SavingsBehavior::Consistent,
        bank_account: true,
        mobile_money_usage: EngagementLevel::High,
        ..FinancialBackground::default()
    }
}

pub(super) fn engaged_behavioral() -> BehavioralBackground {
    BehavioralBackground {
        data_update_frequency: Frequency::Weekly,
        timeliness_score: 0.9,
        training_participation: ["Soil health".to_string(), "Record keeping".to_string()]
            .into_iter()
            .collect(),
        advisory_engagement: EngagementLevel::High,
        app_usage_frequency: Frequency::Daily,
        profile_completeness: 0.95,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
