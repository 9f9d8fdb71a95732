use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;

use crate::catalogs::{CountyRecord, StateRecord};
use crate::economics::EconomicIndicators;
use crate::forecast::{ForecastModel, PredictionPoint, ScenarioSet};
use crate::region::{RegionKind, RegionKey};
use crate::scoring::{CompositeScore, DataQuality, FactorScore, MetricGenerator, TrendDirection};
use crate::trends::TrendPoint;

pub const MODEL_VERSION: &str = "synthetic-v1";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeScoreResponse {
    pub region: String,
    pub region_type: RegionKind,
    pub composite_score: u8,
    pub factors: Vec<FactorScore>,
    pub data_quality: DataQuality,
    pub trend: TrendDirection,
    pub last_updated: DateTime<Utc>,
}

impl CompositeScoreResponse {
    pub fn new(region: &RegionKey, composite: CompositeScore, generated_at: DateTime<Utc>) -> Self {
        Self {
            region: region.code.clone(),
            region_type: region.kind,
            composite_score: composite.value,
            data_quality: composite.data_quality(),
            trend: composite.trend(),
            factors: composite.factors,
            last_updated: generated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub region: String,
    pub region_type: RegionKind,
    pub current_score: u8,
    pub horizon_days: u32,
    pub predictions: Vec<PredictionPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<ScenarioSet>,
    pub model_version: &'static str,
    pub generated_at: DateTime<Utc>,
}

impl ForecastResponse {
    /// Current score comes from a fresh composite drawn on the same generator
    /// that then drives the forecast noise and scenario jitter.
    pub fn generate<R: Rng>(
        region: RegionKey,
        generator: &mut MetricGenerator<R>,
        model: &ForecastModel,
        horizon: u32,
        today: NaiveDate,
        include_scenarios: bool,
    ) -> Self {
        let composite = CompositeScore::generate(generator);
        let baseline = model.forecast(
            generator.rng_mut(),
            f64::from(composite.value),
            horizon,
            today,
        );
        let scenarios =
            include_scenarios.then(|| ScenarioSet::derive(generator.rng_mut(), &baseline));

        Self {
            region: region.code,
            region_type: region.kind,
            current_score: composite.value,
            horizon_days: baseline.horizon_days,
            predictions: baseline.points,
            scenarios,
            model_version: MODEL_VERSION,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResponse {
    pub region: String,
    pub region_type: RegionKind,
    pub current_score: u8,
    pub months: u32,
    pub monthly_drift: f64,
    pub trend: TrendDirection,
    pub history: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicResponse {
    pub region: String,
    pub region_type: RegionKind,
    #[serde(flatten)]
    pub indicators: EconomicIndicators,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateListResponse<'a> {
    pub count: usize,
    pub states: Vec<&'a StateRecord>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyListResponse<'a> {
    pub state: &'a str,
    pub state_name: &'a str,
    pub count: usize,
    pub counties: &'a [CountyRecord],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyDetailResponse<'a> {
    pub state: &'a str,
    pub state_name: &'a str,
    pub county: &'a CountyRecord,
}
