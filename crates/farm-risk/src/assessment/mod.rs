//! Farmer profile lifecycle: every saved section triggers a synchronous
//! rescoring, and the stored record always carries results for its profile.

pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use repository::{FarmerRecord, FarmerRiskView, ProfileRepository, RepositoryError};
pub use router::{risk_router, ScoreRequest, ScoreResponse};
pub use service::{FarmerRiskService, ServiceError};
