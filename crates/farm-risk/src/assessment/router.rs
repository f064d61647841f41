use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::repository::{ProfileRepository, RepositoryError};
use super::service::{FarmerRiskService, ServiceError};
use crate::insights::RiskInsights;
use crate::profiles::{
    BehavioralBackground, FarmerId, FarmerProfile, FinancialBackground, ProductionProfile,
};
use crate::scoring::RiskAssessment;

/// Router builder exposing scoring and profile lifecycle endpoints.
pub fn risk_router<R>(service: Arc<FarmerRiskService<R>>) -> Router
where
    R: ProfileRepository + 'static,
{
    Router::new()
        .route("/api/v1/risk/score", post(score_handler::<R>))
        .route("/api/v1/farmers", post(create_handler::<R>))
        .route("/api/v1/farmers/:farmer_id", get(status_handler::<R>))
        .route(
            "/api/v1/farmers/:farmer_id/production",
            put(production_handler::<R>),
        )
        .route(
            "/api/v1/farmers/:farmer_id/financial",
            put(financial_handler::<R>),
        )
        .route(
            "/api/v1/farmers/:farmer_id/behavioral",
            put(behavioral_handler::<R>),
        )
        .with_state(service)
}

/// Stateless scoring request; omitted sections count as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub production: ProductionProfile,
    #[serde(default)]
    pub financial: FinancialBackground,
    #[serde(default)]
    pub behavioral: BehavioralBackground,
}

impl ScoreRequest {
    pub fn into_profile(self, farmer_id: FarmerId) -> FarmerProfile {
        FarmerProfile {
            farmer_id,
            production: self.production,
            financial: self.financial,
            behavioral: self.behavioral,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub assessment: RiskAssessment,
    pub insights: RiskInsights,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateFarmerRequest {
    farmer_id: String,
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<FarmerRiskService<R>>>,
    Json(request): Json<ScoreRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    let profile = request.into_profile(FarmerId("anonymous".to_string()));
    let (assessment, insights) = service.assess(&profile);
    (
        StatusCode::OK,
        Json(ScoreResponse {
            assessment,
            insights,
        }),
    )
        .into_response()
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<FarmerRiskService<R>>>,
    Json(request): Json<CreateFarmerRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    let farmer_id = request.farmer_id.trim();
    if farmer_id.is_empty() {
        let payload = json!({ "error": "farmer_id must not be empty" });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    match service.create(FarmerId(farmer_id.to_string())) {
        Ok(record) => (StatusCode::CREATED, Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<FarmerRiskService<R>>>,
    Path(farmer_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.get(&FarmerId(farmer_id)) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn production_handler<R>(
    State(service): State<Arc<FarmerRiskService<R>>>,
    Path(farmer_id): Path<String>,
    Json(production): Json<ProductionProfile>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    updated(service.update_production(&FarmerId(farmer_id), production))
}

pub(crate) async fn financial_handler<R>(
    State(service): State<Arc<FarmerRiskService<R>>>,
    Path(farmer_id): Path<String>,
    Json(financial): Json<FinancialBackground>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    updated(service.update_financial(&FarmerId(farmer_id), financial))
}

pub(crate) async fn behavioral_handler<R>(
    State(service): State<Arc<FarmerRiskService<R>>>,
    Path(farmer_id): Path<String>,
    Json(behavioral): Json<BehavioralBackground>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    updated(service.update_behavioral(&FarmerId(farmer_id), behavioral))
}

fn updated(result: Result<super::repository::FarmerRecord, ServiceError>) -> Response {
    match result {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ServiceError) -> Response {
    let status = match &error {
        ServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
