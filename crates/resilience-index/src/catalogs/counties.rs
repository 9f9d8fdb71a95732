use std::collections::HashMap;

use serde::Serialize;

use super::normalize_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Severe,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => Self::Low,
            55..=69 => Self::Moderate,
            40..=54 => Self::High,
            _ => Self::Severe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyRecord {
    pub name: &'static str,
    pub fips: &'static str,
    pub population: u32,
    pub resilience_score: u8,
    pub risk_level: RiskLevel,
    pub primary_hazards: &'static [&'static str],
}

impl CountyRecord {
    fn matches(&self, key: &str) -> bool {
        county_key(self.name) == key
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyList {
    pub state: &'static str,
    pub counties: Vec<CountyRecord>,
}

impl CountyList {
    /// Accepts "Allegheny", "allegheny-county" or "Allegheny County".
    pub fn find(&self, county: &str) -> Option<&CountyRecord> {
        let key = county_key(county);
        self.counties.iter().find(|record| record.matches(&key))
    }
}

fn county_key(raw: &str) -> String {
    let spaced = normalize_key(raw).replace(['-', '_'], " ");
    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.strip_suffix(" county") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => collapsed,
    }
}

fn county(
    name: &'static str,
    fips: &'static str,
    population: u32,
    resilience_score: u8,
    primary_hazards: &'static [&'static str],
) -> CountyRecord {
    CountyRecord {
        name,
        fips,
        population,
        resilience_score,
        risk_level: RiskLevel::from_score(resilience_score),
        primary_hazards,
    }
}

pub(super) fn catalog() -> HashMap<String, CountyList> {
    let lists = [
        CountyList {
            state: "PA",
            counties: vec![
                county("Philadelphia", "42101", 1_603_797, 58, &["flooding", "extreme heat"]),
                county("Allegheny", "42003", 1_250_578, 66, &["flooding", "landslides"]),
                county("Montgomery", "42091", 856_553, 74, &["severe storms"]),
                county("Dauphin", "42043", 286_401, 63, &["flooding", "winter storms"]),
                county("Erie", "42049", 270_876, 61, &["lake-effect snow", "flooding"]),
            ],
        },
        CountyList {
            state: "CA",
            counties: vec![
                county("Los Angeles", "06037", 10_014_009, 52, &["earthquake", "wildfire", "extreme heat"]),
                county("San Diego", "06073", 3_298_634, 61, &["wildfire", "earthquake"]),
                county("Orange", "06059", 3_186_989, 64, &["earthquake", "wildfire"]),
                county("Fresno", "06019", 1_008_654, 47, &["drought", "extreme heat"]),
                county("Butte", "06007", 211_632, 39, &["wildfire", "flooding"]),
            ],
        },
        CountyList {
            state: "TX",
            counties: vec![
                county("Harris", "48201", 4_731_145, 49, &["hurricane", "flooding"]),
                county("Dallas", "48113", 2_613_539, 60, &["tornado", "hail"]),
                county("Travis", "48453", 1_290_188, 68, &["flooding", "wildfire"]),
                county("Hidalgo", "48215", 870_781, 42, &["hurricane", "extreme heat"]),
            ],
        },
        CountyList {
            state: "FL",
            counties: vec![
                county("Miami-Dade", "12086", 2_701_767, 50, &["hurricane", "storm surge"]),
                county("Broward", "12011", 1_944_375, 55, &["hurricane", "flooding"]),
                county("Hillsborough", "12057", 1_459_762, 57, &["hurricane", "storm surge"]),
                county("Lee", "12071", 760_822, 44, &["hurricane", "storm surge"]),
            ],
        },
        CountyList {
            state: "NY",
            counties: vec![
                county("Kings", "36047", 2_736_074, 56, &["coastal flooding", "extreme heat"]),
                county("Queens", "36081", 2_405_464, 59, &["coastal flooding"]),
                county("Erie", "36029", 954_236, 65, &["winter storms", "lake-effect snow"]),
                county("Monroe", "36055", 759_443, 67, &["winter storms", "ice storms"]),
            ],
        },
    ];

    lists
        .into_iter()
        .map(|list| (normalize_key(list.state), list))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn county_names_normalise() {
        let catalog = catalog();
        let pa = catalog.get("pa").expect("pennsylvania list");
        assert_eq!(pa.find("Allegheny County").map(|c| c.fips), Some("42003"));
        assert_eq!(pa.find("allegheny").map(|c| c.fips), Some("42003"));

        let fl = catalog.get("fl").expect("florida list");
        assert!(fl.find("miami-dade").is_some());
        assert!(fl.find("Miami Dade County").is_some());
        assert!(fl.find("county").is_none());
    }

    #[test]
    fn risk_level_follows_score() {
        assert_eq!(RiskLevel::from_score(74), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(55), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(39), RiskLevel::Severe);
    }
}
