use serde::{Deserialize, Deserializer};

use crate::error::ApiError;
use crate::region::{RegionKey, RegionKind};

// Query structs stay flat: `serde(flatten)` breaks numeric and boolean
// parsing from query strings.

/// Malformed numbers read as absent so the caller's default applies.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.and_then(|value| value.trim().parse().ok()))
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.and_then(|value| parse_flag(&value)))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn region_key(region: Option<&str>, kind: Option<&str>) -> Result<RegionKey, ApiError> {
    let kind = RegionKind::parse(kind);
    region
        .and_then(|code| RegionKey::new(code, kind))
        .ok_or(ApiError::MissingParameter("region"))
}

/// `?region=PA&type=state`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionQuery {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl RegionQuery {
    pub fn region_key(&self) -> Result<RegionKey, ApiError> {
        region_key(self.region.as_deref(), self.kind.as_deref())
    }
}

/// `?region=CA&days=10&includeScenarios=true`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastQuery {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub days: Option<i64>,
    #[serde(
        default,
        alias = "scenarios",
        alias = "include_scenarios",
        deserialize_with = "lenient_bool"
    )]
    pub include_scenarios: Option<bool>,
}

impl ForecastQuery {
    pub fn region_key(&self) -> Result<RegionKey, ApiError> {
        region_key(self.region.as_deref(), self.kind.as_deref())
    }
}

/// `?region=TX&months=24`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendQuery {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub months: Option<i64>,
}

impl TrendQuery {
    pub fn region_key(&self) -> Result<RegionKey, ApiError> {
        region_key(self.region.as_deref(), self.kind.as_deref())
    }
}
