//! Forward-looking resilience series: trend, seasonal, noise and scripted
//! shocks layered over the current composite, with widening confidence.

mod model;
mod scenarios;

pub use model::{
    ExternalShock, ForecastModel, ForecastSeries, PredictionFactors, PredictionPoint,
    DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS,
};
pub use scenarios::{ScenarioSet, ScenarioShift};
