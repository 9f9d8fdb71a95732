//! Backward-looking monthly series ending at the current composite.

use chrono::{Datelike, Months, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::scoring::round1;

pub const DEFAULT_TREND_MONTHS: u32 = 12;
pub const MAX_TREND_MONTHS: u32 = 60;

const MAX_MONTHLY_DRIFT: f64 = 0.8;
const MONTHLY_NOISE: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub month: NaiveDate,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalTrend {
    pub months: u32,
    pub monthly_drift: f64,
    pub points: Vec<TrendPoint>,
}

impl HistoricalTrend {
    pub fn months(requested: Option<i64>) -> u32 {
        match requested {
            None => DEFAULT_TREND_MONTHS,
            Some(months) => months.clamp(1, i64::from(MAX_TREND_MONTHS)) as u32,
        }
    }

    /// The last point is always the current score in the current month.
    pub fn synthesize<R: Rng + ?Sized>(
        rng: &mut R,
        current_score: f64,
        months: u32,
        today: NaiveDate,
    ) -> Self {
        let monthly_drift = round1(rng.gen_range(-MAX_MONTHLY_DRIFT..=MAX_MONTHLY_DRIFT));
        let current_month = today.with_day(1).unwrap_or(today);

        let points = (0..months)
            .rev()
            .map(|back| {
                let month = current_month
                    .checked_sub_months(Months::new(back))
                    .unwrap_or(current_month);
                let score = if back == 0 {
                    current_score
                } else {
                    let noise = rng.gen_range(-MONTHLY_NOISE..=MONTHLY_NOISE);
                    current_score - monthly_drift * f64::from(back) + noise
                };
                TrendPoint {
                    month,
                    score: round1(score.clamp(0.0, 100.0)),
                }
            })
            .collect();

        Self {
            months,
            monthly_drift,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn trend_ends_at_current_month() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 19).expect("valid date");
        let mut rng = StdRng::seed_from_u64(4);
        let trend = HistoricalTrend::synthesize(&mut rng, 64.0, 12, today);
        assert_eq!(trend.points.len(), 12);
        let last = trend.points.last().expect("points");
        assert_eq!(last.month, NaiveDate::from_ymd_opt(2025, 8, 1).expect("valid"));
        assert_eq!(last.score, 64.0);
        assert_eq!(
            trend.points[0].month,
            NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid")
        );
        assert!(trend.points.windows(2).all(|pair| pair[0].month < pair[1].month));
    }

    #[test]
    fn scores_clamped_and_month_count_bounded() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 31).expect("valid date");
        let mut rng = StdRng::seed_from_u64(9);
        let trend = HistoricalTrend::synthesize(&mut rng, 99.5, 60, today);
        assert!(trend.points.iter().all(|p| (0.0..=100.0).contains(&p.score)));
        assert_eq!(HistoricalTrend::months(None), 12);
        assert_eq!(HistoricalTrend::months(Some(500)), 60);
        assert_eq!(HistoricalTrend::months(Some(0)), 1);
    }
}
