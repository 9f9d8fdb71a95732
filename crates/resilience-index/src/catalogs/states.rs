use serde::Serialize;

use super::ReferenceCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRecord {
    pub code: &'static str,
    pub name: &'static str,
    pub fema_region: u8,
}

const fn state(code: &'static str, name: &'static str, fema_region: u8) -> StateRecord {
    StateRecord {
        code,
        name,
        fema_region,
    }
}

const STATES: [StateRecord; 51] = [
    state("AL", "Alabama", 4),
    state("AK", "Alaska", 10),
    state("AZ", "Arizona", 9),
    state("AR", "Arkansas", 6),
    state("CA", "California", 9),
    state("CO", "Colorado", 8),
    state("CT", "Connecticut", 1),
    state("DE", "Delaware", 3),
    state("DC", "District of Columbia", 3),
    state("FL", "Florida", 4),
    state("GA", "Georgia", 4),
    state("HI", "Hawaii", 9),
    state("ID", "Idaho", 10),
    state("IL", "Illinois", 5),
    state("IN", "Indiana", 5),
    state("IA", "Iowa", 7),
    state("KS", "Kansas", 7),
    state("KY", "Kentucky", 4),
    state("LA", "Louisiana", 6),
    state("ME", "Maine", 1),
    state("MD", "Maryland", 3),
    state("MA", "Massachusetts", 1),
    state("MI", "Michigan", 5),
    state("MN", "Minnesota", 5),
    state("MS", "Mississippi", 4),
    state("MO", "Missouri", 7),
    state("MT", "Montana", 8),
    state("NE", "Nebraska", 7),
    state("NV", "Nevada", 9),
    state("NH", "New Hampshire", 1),
    state("NJ", "New Jersey", 2),
    state("NM", "New Mexico", 6),
    state("NY", "New York", 2),
    state("NC", "North Carolina", 4),
    state("ND", "North Dakota", 8),
    state("OH", "Ohio", 5),
    state("OK", "Oklahoma", 6),
    state("OR", "Oregon", 10),
    state("PA", "Pennsylvania", 3),
    state("RI", "Rhode Island", 1),
    state("SC", "South Carolina", 4),
    state("SD", "South Dakota", 8),
    state("TN", "Tennessee", 4),
    state("TX", "Texas", 6),
    state("UT", "Utah", 8),
    state("VT", "Vermont", 1),
    state("VA", "Virginia", 3),
    state("WA", "Washington", 10),
    state("WV", "West Virginia", 3),
    state("WI", "Wisconsin", 5),
    state("WY", "Wyoming", 8),
];

const NATIONAL: StateRecord = state("US", "United States", 0);

pub(super) fn catalog() -> ReferenceCatalog<StateRecord> {
    ReferenceCatalog::new(
        STATES.iter().map(|record| (record.code, record.clone())),
        NATIONAL,
    )
}
