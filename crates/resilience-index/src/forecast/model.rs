use std::f64::consts::PI;

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::scoring::{round1, round_to};

pub const DEFAULT_HORIZON_DAYS: u32 = 30;
pub const MAX_HORIZON_DAYS: u32 = 365;

/// Discrete episodic perturbation applied on one day of the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExternalShock {
    pub day: u32,
    pub impact: f64,
}

/// Constants shaping a forecast. `Default` is the dashboard's model.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastModel {
    pub min_score: f64,
    pub max_score: f64,
    pub noise_amplitude: f64,
    pub confidence_base: f64,
    pub confidence_growth: f64,
    pub shocks: Vec<ExternalShock>,
}

impl Default for ForecastModel {
    fn default() -> Self {
        Self {
            min_score: 30.0,
            max_score: 90.0,
            noise_amplitude: 3.0,
            confidence_base: 3.0,
            confidence_growth: 5.0,
            shocks: vec![
                ExternalShock {
                    day: 15,
                    impact: -5.0,
                },
                ExternalShock {
                    day: 25,
                    impact: 3.0,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionFactors {
    pub seasonal: f64,
    pub trend: f64,
    pub external_events: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionPoint {
    pub date: NaiveDate,
    pub predicted: f64,
    pub confidence_lower: f64,
    pub confidence_upper: f64,
    pub factors: PredictionFactors,
}

impl PredictionPoint {
    pub fn interval_width(&self) -> f64 {
        self.confidence_upper - self.confidence_lower
    }

    /// Half-width of the confidence band around `predicted`.
    pub fn confidence_range(&self) -> f64 {
        round1(self.interval_width() / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSeries {
    pub horizon_days: u32,
    pub points: Vec<PredictionPoint>,
}

impl ForecastModel {
    /// Resolve a requested horizon: absent means the default, anything else is
    /// pulled into `1..=MAX_HORIZON_DAYS`.
    pub fn horizon(requested: Option<i64>) -> u32 {
        match requested {
            None => DEFAULT_HORIZON_DAYS,
            Some(days) => days.clamp(1, i64::from(MAX_HORIZON_DAYS)) as u32,
        }
    }

    pub fn trend(day: u32) -> f64 {
        -0.1 * (f64::from(day) / 10.0).sin()
    }

    pub fn seasonal(day: u32) -> f64 {
        2.0 * ((f64::from(day) / 365.0) * 2.0 * PI).sin()
    }

    pub fn external_event(&self, day: u32) -> f64 {
        self.shocks
            .iter()
            .filter(|shock| shock.day == day)
            .map(|shock| shock.impact)
            .sum()
    }

    /// Linear in the day index, so the band never narrows.
    pub fn confidence_range(&self, day: u32, horizon: u32) -> f64 {
        let progress = f64::from(day) / f64::from(horizon.max(1));
        round1(self.confidence_base + progress * self.confidence_growth)
    }

    /// Build `horizon` daily points starting the day after `today`.
    pub fn forecast<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        current_score: f64,
        horizon: u32,
        today: NaiveDate,
    ) -> ForecastSeries {
        let half_noise = self.noise_amplitude / 2.0;
        let points = (1..=horizon)
            .map(|day| {
                let trend = Self::trend(day);
                let seasonal = Self::seasonal(day);
                let noise = if half_noise > 0.0 {
                    rng.gen_range(-half_noise..=half_noise)
                } else {
                    0.0
                };
                let external_events = self.external_event(day);

                let predicted = round1(
                    (current_score + trend + seasonal + noise + external_events)
                        .clamp(self.min_score, self.max_score),
                );
                let range = self.confidence_range(day, horizon);

                PredictionPoint {
                    date: today + Days::new(u64::from(day)),
                    predicted,
                    confidence_lower: round1(predicted - range),
                    confidence_upper: round1(predicted + range),
                    factors: PredictionFactors {
                        seasonal: round_to(seasonal, 2),
                        trend: round_to(trend, 2),
                        external_events,
                    },
                }
            })
            .collect();

        ForecastSeries {
            horizon_days: horizon,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date")
    }

    #[test]
    fn horizon_defaults_and_clamps() {
        assert_eq!(ForecastModel::horizon(None), 30);
        assert_eq!(ForecastModel::horizon(Some(0)), 1);
        assert_eq!(ForecastModel::horizon(Some(-4)), 1);
        assert_eq!(ForecastModel::horizon(Some(10)), 10);
        assert_eq!(ForecastModel::horizon(Some(10_000)), MAX_HORIZON_DAYS);
    }

    #[test]
    fn series_starts_tomorrow_with_requested_length() {
        let mut rng = StdRng::seed_from_u64(5);
        let series = ForecastModel::default().forecast(&mut rng, 62.0, 10, today());
        assert_eq!(series.horizon_days, 10);
        assert_eq!(series.points.len(), 10);
        assert_eq!(series.points[0].date, today().succ_opt().expect("next day"));
        assert!(series
            .points
            .windows(2)
            .all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn shocks_land_on_scripted_days() {
        let model = ForecastModel::default();
        assert_eq!(model.external_event(15), -5.0);
        assert_eq!(model.external_event(25), 3.0);
        assert_eq!(model.external_event(16), 0.0);

        let mut rng = StdRng::seed_from_u64(21);
        let series = model.forecast(&mut rng, 60.0, 30, today());
        assert_eq!(series.points[14].factors.external_events, -5.0);
        assert_eq!(series.points[24].factors.external_events, 3.0);
    }

    #[test]
    fn predictions_stay_within_model_clamp() {
        let model = ForecastModel::default();
        let mut rng = StdRng::seed_from_u64(8);
        for current in [0.0, 29.0, 95.0, 100.0] {
            let series = model.forecast(&mut rng, current, 40, today());
            for point in &series.points {
                assert!((30.0..=90.0).contains(&point.predicted));
            }
        }
    }

    #[test]
    fn confidence_band_widens_over_horizon() {
        let model = ForecastModel::default();
        let mut rng = StdRng::seed_from_u64(13);
        let series = model.forecast(&mut rng, 55.0, 30, today());
        assert_eq!(series.points[0].confidence_range(), model.confidence_range(1, 30));
        assert_eq!(model.confidence_range(30, 30), 8.0);
        for pair in series.points.windows(2) {
            assert!(pair[1].interval_width() + 1e-9 >= pair[0].interval_width());
        }
        for point in &series.points {
            assert!(point.confidence_lower <= point.predicted);
            assert!(point.predicted <= point.confidence_upper);
        }
    }

    #[test]
    fn noiseless_model_is_deterministic_shape() {
        let model = ForecastModel {
            noise_amplitude: 0.0,
            shocks: Vec::new(),
            ..ForecastModel::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let series = model.forecast(&mut rng, 60.0, 1, today());
        let expected = round1(60.0 + ForecastModel::trend(1) + ForecastModel::seasonal(1));
        assert_eq!(series.points[0].predicted, expected);
    }
}
