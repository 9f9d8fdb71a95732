use rand::Rng;
use serde::{Deserialize, Serialize};

use super::model::{ForecastSeries, PredictionPoint};
use crate::scoring::round1;

/// Transform deriving one scenario from a baseline prediction.
///
/// The random jitter always pushes further in the direction of `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioShift {
    pub offset: f64,
    pub jitter: f64,
    pub min: f64,
    pub max: f64,
}

impl ScenarioShift {
    pub const DISASTER_IMPACT: ScenarioShift = ScenarioShift {
        offset: -15.0,
        jitter: 5.0,
        min: 10.0,
        max: 75.0,
    };

    pub const MITIGATION_APPLIED: ScenarioShift = ScenarioShift {
        offset: 8.0,
        jitter: 4.0,
        min: 40.0,
        max: 95.0,
    };

    fn apply<R: Rng + ?Sized>(&self, rng: &mut R, point: &PredictionPoint) -> PredictionPoint {
        let jitter = if self.jitter > 0.0 {
            rng.gen_range(0.0..=self.jitter)
        } else {
            0.0
        };
        let shifted = point.predicted + self.offset + self.offset.signum() * jitter;
        let predicted = round1(shifted.clamp(self.min, self.max));
        let range = point.confidence_range();

        PredictionPoint {
            date: point.date,
            predicted,
            confidence_lower: round1(predicted - range),
            confidence_upper: round1(predicted + range),
            factors: point.factors,
        }
    }

    pub fn transform<R: Rng + ?Sized>(&self, rng: &mut R, baseline: &ForecastSeries) -> ForecastSeries {
        ForecastSeries {
            horizon_days: baseline.horizon_days,
            points: baseline
                .points
                .iter()
                .map(|point| self.apply(rng, point))
                .collect(),
        }
    }
}

/// Baseline plus its two derived variants, day-aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSet {
    pub baseline: Vec<PredictionPoint>,
    pub disaster_impact: Vec<PredictionPoint>,
    pub mitigation_applied: Vec<PredictionPoint>,
}

impl ScenarioSet {
    pub fn derive<R: Rng + ?Sized>(rng: &mut R, baseline: &ForecastSeries) -> Self {
        let disaster_impact = ScenarioShift::DISASTER_IMPACT.transform(rng, baseline);
        let mitigation_applied = ScenarioShift::MITIGATION_APPLIED.transform(rng, baseline);
        Self {
            baseline: baseline.points.clone(),
            disaster_impact: disaster_impact.points,
            mitigation_applied: mitigation_applied.points,
        }
    }
}
