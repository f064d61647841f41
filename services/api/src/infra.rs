use farm_risk::assessment::{FarmerRecord, ProfileRepository, RepositoryError};
use farm_risk::profiles::FarmerId;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local stand-in for the hosted profile database.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    records: Arc<Mutex<HashMap<FarmerId, FarmerRecord>>>,
}

impl InMemoryProfileRepository {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<FarmerId, FarmerRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    fn insert(&self, record: FarmerRecord) -> Result<FarmerRecord, RepositoryError> {
        let mut guard = self.lock()?;
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
        let mut guard = self.lock()?;
        let existing = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        apply(existing);
        Ok(existing.clone())
    }

    fn fetch(&self, id: &FarmerId) -> Result<Option<FarmerRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farm_risk::profiles::FarmerProfile;
    use farm_risk::scoring::RiskEngine;

    fn record(id: &str) -> FarmerRecord {
        let profile = FarmerProfile::empty(FarmerId(id.to_string()));
        let (assessment, insights) = RiskEngine::default().assess(&profile);
        FarmerRecord::new(profile, assessment, insights)
    }

    #[test]
    fn insert_then_fetch_round_trips() {
        let repository = InMemoryProfileRepository::default();
        repository.insert(record("F-1")).expect("insert succeeds");

        let fetched = repository
            .fetch(&FarmerId("F-1".to_string()))
            .expect("fetch succeeds");
        assert!(fetched.is_some());
    }

    #[test]
    fn duplicate_insert_conflicts_and_missing_modify_fails() {
        let repository = InMemoryProfileRepository::default();
        repository.insert(record("F-1")).expect("insert succeeds");

        assert!(matches!(
            repository.insert(record("F-1")),
            Err(RepositoryError::Conflict)
        ));
        assert!(matches!(
            repository.modify(
                &FarmerId("F-2".to_string()),
                &mut |_: &mut FarmerRecord| {}
            ),
            Err(RepositoryError::NotFound)
        ));
    }

    #[test]
    fn modify_applies_change_in_place() {
        let repository = InMemoryProfileRepository::default();
        repository.insert(record("F-1")).expect("insert succeeds");
        let id = FarmerId("F-1".to_string());

        let updated = repository
            .modify(&id, &mut |stored: &mut FarmerRecord| {
                stored.profile.financial.bank_account = true
            })
            .expect("modify succeeds");

        assert!(updated.profile.financial.bank_account);
        let fetched = repository
            .fetch(&id)
            .expect("fetch succeeds")
            .expect("record present");
        assert!(fetched.profile.financial.bank_account);
    }
}
