use serde::Serialize;

use super::ReferenceCatalog;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipRecord {
    pub zip: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub county: &'static str,
    pub population: u32,
    pub resilience_score: u8,
    pub flood_zone: bool,
}

const fn zip(
    zip: &'static str,
    city: &'static str,
    state: &'static str,
    county: &'static str,
    population: u32,
    resilience_score: u8,
    flood_zone: bool,
) -> ZipRecord {
    ZipRecord {
        zip,
        city,
        state,
        county,
        population,
        resilience_score,
        flood_zone,
    }
}

const ZIPS: [ZipRecord; 10] = [
    zip("19103", "Philadelphia", "PA", "Philadelphia", 24_960, 62, false),
    zip("19134", "Philadelphia", "PA", "Philadelphia", 60_608, 41, true),
    zip("15213", "Pittsburgh", "PA", "Allegheny", 29_641, 68, false),
    zip("90012", "Los Angeles", "CA", "Los Angeles", 37_942, 53, false),
    zip("95965", "Oroville", "CA", "Butte", 19_204, 36, true),
    zip("77002", "Houston", "TX", "Harris", 16_893, 48, true),
    zip("78701", "Austin", "TX", "Travis", 12_190, 71, false),
    zip("33139", "Miami Beach", "FL", "Miami-Dade", 38_671, 45, true),
    zip("11201", "Brooklyn", "NY", "Kings", 62_823, 60, true),
    zip("14201", "Buffalo", "NY", "Erie", 11_540, 63, false),
];

const UNLISTED: ZipRecord = zip("00000", "Unlisted area", "US", "Unknown", 0, 55, false);

pub(super) fn catalog() -> ReferenceCatalog<ZipRecord> {
    ReferenceCatalog::new(ZIPS.iter().map(|record| (record.zip, record.clone())), UNLISTED)
}
