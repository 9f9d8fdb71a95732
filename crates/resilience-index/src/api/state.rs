use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalogs::Catalogs;
use crate::config::SimulationConfig;
use crate::forecast::ForecastModel;
use crate::scoring::MetricGenerator;

/// Read-only state shared by every handler.
#[derive(Debug, Clone)]
pub struct AnalyticsState {
    pub catalogs: Catalogs,
    pub forecast_model: ForecastModel,
    pub simulation: SimulationConfig,
}

impl AnalyticsState {
    pub fn new(simulation: SimulationConfig) -> Self {
        Self {
            catalogs: Catalogs::standard(),
            forecast_model: ForecastModel::default(),
            simulation,
        }
    }

    /// Fresh random source for one request.
    pub fn rng(&self) -> StdRng {
        match self.simulation.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn generator(&self) -> MetricGenerator<StdRng> {
        MetricGenerator::new(self.rng())
    }

    pub fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

impl Default for AnalyticsState {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
