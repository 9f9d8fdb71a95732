//! Immutable reference tables keyed by region or organisation code.
//!
//! Top-level catalogs never report a miss: an unknown key resolves to the
//! catalog's designated default record. Only the two-level county lookup can
//! fail, and it distinguishes the missing level.

mod cbos;
mod counties;
mod recommendations;
mod states;
mod zips;

use std::collections::HashMap;

pub use cbos::{CboDirectory, CommunityOrganization};
pub use counties::{CountyList, CountyRecord, RiskLevel};
pub use recommendations::{Recommendation, RecommendationCatalog, RecommendationPriority};
pub use states::StateRecord;
pub use zips::ZipRecord;

/// Case-insensitive map with a fallback record.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog<T> {
    entries: HashMap<String, T>,
    default: T,
}

impl<T> ReferenceCatalog<T> {
    pub fn new<K, I>(entries: I, default: T) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, T)>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (normalize_key(key.as_ref()), value))
            .collect();
        Self { entries, default }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(&normalize_key(key))
    }

    /// Never fails; unknown keys yield the default record.
    pub fn lookup(&self, key: &str) -> &T {
        self.get(key).unwrap_or(&self.default)
    }

    pub fn default_record(&self) -> &T {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

pub(crate) fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountyLookupError {
    #[error("no county data for state '{state}'")]
    UnknownState { state: String },
    #[error("county '{county}' not found in state '{state}'")]
    UnknownCounty { state: String, county: String },
}

/// Every catalog the service reads, built once at startup.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub states: ReferenceCatalog<StateRecord>,
    pub counties: HashMap<String, CountyList>,
    pub zips: ReferenceCatalog<ZipRecord>,
    pub cbos: ReferenceCatalog<CboDirectory>,
    pub recommendations: ReferenceCatalog<RecommendationCatalog>,
}

impl Catalogs {
    pub fn standard() -> Self {
        Self {
            states: states::catalog(),
            counties: counties::catalog(),
            zips: zips::catalog(),
            cbos: cbos::catalog(),
            recommendations: recommendations::catalog(),
        }
    }

    /// States in code order.
    pub fn state_list(&self) -> Vec<&StateRecord> {
        let mut states: Vec<&StateRecord> = self.states.values().collect();
        states.sort_by(|a, b| a.code.cmp(b.code));
        states
    }

    pub fn county_list(&self, state: &str) -> Result<&CountyList, CountyLookupError> {
        self.counties
            .get(&normalize_key(state))
            .ok_or_else(|| CountyLookupError::UnknownState {
                state: state.trim().to_string(),
            })
    }

    pub fn county(&self, state: &str, county: &str) -> Result<&CountyRecord, CountyLookupError> {
        let list = self.county_list(state)?;
        list.find(county)
            .ok_or_else(|| CountyLookupError::UnknownCounty {
                state: state.trim().to_string(),
                county: county.trim().to_string(),
            })
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_with_default() {
        let catalog = ReferenceCatalog::new([("PA", 1), ("ca", 2)], 0);
        assert_eq!(*catalog.lookup("pa"), 1);
        assert_eq!(*catalog.lookup(" CA "), 2);
        assert_eq!(*catalog.lookup("zz"), 0);
        assert!(catalog.get("zz").is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn county_lookup_distinguishes_missing_level() {
        let catalogs = Catalogs::standard();
        assert!(catalogs.county("pa", "allegheny").is_ok());
        assert_eq!(
            catalogs.county("pa", "nonexistent"),
            Err(CountyLookupError::UnknownCounty {
                state: "pa".to_string(),
                county: "nonexistent".to_string(),
            })
        );
        assert_eq!(
            catalogs.county("zz", "allegheny"),
            Err(CountyLookupError::UnknownState {
                state: "zz".to_string(),
            })
        );
    }

    #[test]
    fn repeated_lookups_return_identical_records() {
        let catalogs = Catalogs::standard();
        let first = catalogs.cbos.lookup("PA").clone();
        let second = catalogs.cbos.lookup("pa").clone();
        assert_eq!(first, second);
        assert_eq!(catalogs.cbos.lookup("unknown"), catalogs.cbos.default_record());
    }

    #[test]
    fn state_list_is_sorted_and_complete() {
        let catalogs = Catalogs::standard();
        let states = catalogs.state_list();
        assert_eq!(states.len(), 51);
        assert!(states.windows(2).all(|pair| pair[0].code < pair[1].code));
    }
}
