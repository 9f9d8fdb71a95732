use chrono::Utc;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use resilience_index::api::views::{CompositeScoreResponse, ForecastResponse};
use resilience_index::error::{ApiError, AppError};
use resilience_index::forecast::ForecastModel;
use resilience_index::region::{RegionKey, RegionKind};
use resilience_index::scoring::{CompositeScore, MetricGenerator};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Region code (state code, county name, or ZIP)
    #[arg(long)]
    pub(crate) region: String,
    /// Region granularity: state, county, or zip
    #[arg(long = "type", default_value = "state")]
    pub(crate) kind: String,
    /// Fix the random seed for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct ForecastArgs {
    /// Region code (state code, county name, or ZIP)
    #[arg(long)]
    pub(crate) region: String,
    /// Region granularity: state, county, or zip
    #[arg(long = "type", default_value = "state")]
    pub(crate) kind: String,
    /// Forecast horizon in days
    #[arg(long)]
    pub(crate) days: Option<i64>,
    /// Include disaster-impact and mitigation scenario series
    #[arg(long)]
    pub(crate) scenarios: bool,
    /// Fix the random seed for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

fn region_key(code: &str, kind: &str) -> Result<RegionKey, AppError> {
    RegionKey::new(code, RegionKind::parse(Some(kind)))
        .ok_or(AppError::Api(ApiError::MissingParameter("region")))
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let region = region_key(&args.region, &args.kind)?;
    let mut generator = MetricGenerator::new(rng(args.seed));
    let composite = CompositeScore::generate(&mut generator);
    let response = CompositeScoreResponse::new(&region, composite, Utc::now());

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub(crate) fn run_forecast(args: ForecastArgs) -> Result<(), AppError> {
    let region = region_key(&args.region, &args.kind)?;
    let horizon = ForecastModel::horizon(args.days);
    let response = ForecastResponse::generate(
        region,
        &mut MetricGenerator::new(rng(args.seed)),
        &ForecastModel::default(),
        horizon,
        Utc::now().date_naive(),
        args.scenarios,
    );

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
