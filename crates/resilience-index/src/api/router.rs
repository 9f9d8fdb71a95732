use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{debug, info};

use super::query::{ForecastQuery, RegionQuery, TrendQuery};
use super::state::AnalyticsState;
use super::submissions::{
    AlertSubscriptionConfirmation, AlertSubscriptionPayload, ServiceRequestConfirmation,
    ServiceRequestPayload,
};
use super::views::{
    CompositeScoreResponse, CountyDetailResponse, CountyListResponse, EconomicResponse,
    ForecastResponse, StateListResponse, TrendResponse,
};
use crate::economics::EconomicIndicators;
use crate::error::ApiError;
use crate::forecast::ForecastModel;
use crate::scoring::CompositeScore;
use crate::trends::HistoricalTrend;

/// Router builder exposing the dashboard's analytics endpoints.
pub fn analytics_router(state: Arc<AnalyticsState>) -> Router {
    Router::new()
        .route("/api/resilience-score", get(resilience_score_handler))
        .route("/api/predictions", get(forecast_handler))
        .route("/api/trends", get(trend_handler))
        .route("/api/economic-indicators", get(economic_handler))
        .route("/api/states", get(state_list_handler))
        .route("/api/states/:code", get(state_handler))
        .route("/api/counties/:state", get(county_list_handler))
        .route("/api/counties/:state/:county", get(county_handler))
        .route("/api/zip/:zip", get(zip_handler))
        .route("/api/cbos/:state", get(cbo_handler))
        .route("/api/recommendations/:region", get(recommendation_handler))
        .route("/api/service-requests", post(service_request_handler))
        .route("/api/alert-subscriptions", post(alert_subscription_handler))
        .with_state(state)
}

pub(crate) async fn resilience_score_handler(
    State(state): State<Arc<AnalyticsState>>,
    Query(query): Query<RegionQuery>,
) -> Result<Json<CompositeScoreResponse>, ApiError> {
    let region = query.region_key()?;
    let mut generator = state.generator();
    let composite = CompositeScore::generate(&mut generator);

    info!(
        region = %region.code,
        kind = %region.kind,
        score = composite.value,
        "generated composite score"
    );
    Ok(Json(CompositeScoreResponse::new(
        &region,
        composite,
        Utc::now(),
    )))
}

pub(crate) async fn forecast_handler(
    State(state): State<Arc<AnalyticsState>>,
    Query(query): Query<ForecastQuery>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let region = query.region_key()?;
    let horizon = ForecastModel::horizon(query.days);
    let include_scenarios = query.include_scenarios.unwrap_or(false);

    let latency = state.simulation.latency;
    if !latency.is_zero() {
        debug!(latency_ms = latency.as_millis() as u64, "simulating upstream latency");
        tokio::time::sleep(latency).await;
    }

    let response = ForecastResponse::generate(
        region,
        &mut state.generator(),
        &state.forecast_model,
        horizon,
        state.today(),
        include_scenarios,
    );

    info!(
        region = %response.region,
        kind = %response.region_type,
        horizon,
        include_scenarios,
        "generated forecast"
    );
    Ok(Json(response))
}

pub(crate) async fn trend_handler(
    State(state): State<Arc<AnalyticsState>>,
    Query(query): Query<TrendQuery>,
) -> Result<Json<TrendResponse>, ApiError> {
    let region = query.region_key()?;
    let months = HistoricalTrend::months(query.months);

    let mut generator = state.generator();
    let composite = CompositeScore::generate(&mut generator);
    let history = HistoricalTrend::synthesize(
        generator.rng_mut(),
        f64::from(composite.value),
        months,
        state.today(),
    );

    debug!(region = %region.code, months, "generated historical trend");
    Ok(Json(TrendResponse {
        region: region.code,
        region_type: region.kind,
        current_score: composite.value,
        months: history.months,
        monthly_drift: history.monthly_drift,
        trend: composite.trend(),
        history: history.points,
    }))
}

pub(crate) async fn economic_handler(
    State(state): State<Arc<AnalyticsState>>,
    Query(query): Query<RegionQuery>,
) -> Result<Json<EconomicResponse>, ApiError> {
    let region = query.region_key()?;
    let mut generator = state.generator();
    let indicators = EconomicIndicators::generate(&mut generator);

    debug!(region = %region.code, "generated economic indicators");
    Ok(Json(EconomicResponse {
        region: region.code,
        region_type: region.kind,
        indicators,
        last_updated: Utc::now(),
    }))
}

pub(crate) async fn state_list_handler(State(state): State<Arc<AnalyticsState>>) -> Response {
    let states = state.catalogs.state_list();
    Json(StateListResponse {
        count: states.len(),
        states,
    })
    .into_response()
}

pub(crate) async fn state_handler(
    State(state): State<Arc<AnalyticsState>>,
    Path(code): Path<String>,
) -> Response {
    Json(state.catalogs.states.lookup(&code)).into_response()
}

pub(crate) async fn county_list_handler(
    State(state): State<Arc<AnalyticsState>>,
    Path(state_code): Path<String>,
) -> Result<Response, ApiError> {
    let list = state.catalogs.county_list(&state_code)?;
    let state_record = state.catalogs.states.lookup(list.state);
    Ok(Json(CountyListResponse {
        state: list.state,
        state_name: state_record.name,
        count: list.counties.len(),
        counties: &list.counties,
    })
    .into_response())
}

pub(crate) async fn county_handler(
    State(state): State<Arc<AnalyticsState>>,
    Path((state_code, county)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let record = state.catalogs.county(&state_code, &county).map_err(|err| {
        debug!(state = %state_code, county = %county, "county lookup miss");
        ApiError::from(err)
    })?;
    let state_record = state.catalogs.states.lookup(&state_code);
    Ok(Json(CountyDetailResponse {
        state: state_record.code,
        state_name: state_record.name,
        county: record,
    })
    .into_response())
}

pub(crate) async fn zip_handler(
    State(state): State<Arc<AnalyticsState>>,
    Path(zip): Path<String>,
) -> Response {
    Json(state.catalogs.zips.lookup(&zip)).into_response()
}

pub(crate) async fn cbo_handler(
    State(state): State<Arc<AnalyticsState>>,
    Path(state_code): Path<String>,
) -> Response {
    Json(state.catalogs.cbos.lookup(&state_code)).into_response()
}

pub(crate) async fn recommendation_handler(
    State(state): State<Arc<AnalyticsState>>,
    Path(region): Path<String>,
) -> Response {
    Json(state.catalogs.recommendations.lookup(&region)).into_response()
}

pub(crate) async fn service_request_handler(
    Json(payload): Json<ServiceRequestPayload>,
) -> Result<Json<ServiceRequestConfirmation>, ApiError> {
    let confirmation = payload.confirm(Utc::now())?;
    info!(id = %confirmation.id, region = %confirmation.region, "service request received");
    Ok(Json(confirmation))
}

pub(crate) async fn alert_subscription_handler(
    Json(payload): Json<AlertSubscriptionPayload>,
) -> Result<Json<AlertSubscriptionConfirmation>, ApiError> {
    let confirmation = payload.confirm(Utc::now())?;
    info!(id = %confirmation.id, region = %confirmation.region, "alert subscription created");
    Ok(Json(confirmation))
}
