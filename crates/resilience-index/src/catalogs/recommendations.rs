use serde::Serialize;

use super::ReferenceCatalog;
use crate::scoring::FactorGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: FactorGroup,
    pub priority: RecommendationPriority,
    /// Expected composite uplift in index points.
    pub estimated_impact: f64,
    pub timeframe: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationCatalog {
    pub region: &'static str,
    pub recommendations: Vec<Recommendation>,
}

fn rec(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: FactorGroup,
    priority: RecommendationPriority,
    estimated_impact: f64,
    timeframe: &'static str,
) -> Recommendation {
    Recommendation {
        id,
        title,
        description,
        category,
        priority,
        estimated_impact,
        timeframe,
    }
}

pub(super) fn catalog() -> ReferenceCatalog<RecommendationCatalog> {
    use FactorGroup::*;
    use RecommendationPriority::{High, Low, Medium};

    let catalogs = [
        RecommendationCatalog {
            region: "PA",
            recommendations: vec![
                rec(
                    "pa-r1",
                    "Expand riverine flood buyouts",
                    "Prioritise voluntary buyouts along the Allegheny and Monongahela floodplains.",
                    Environmental,
                    High,
                    4.5,
                    "12-24 months",
                ),
                rec(
                    "pa-r2",
                    "Cooling center network",
                    "Extend library and recreation center hours during heat advisories.",
                    Health,
                    Medium,
                    2.0,
                    "3-6 months",
                ),
                rec(
                    "pa-r3",
                    "Rural broadband backbone",
                    "Co-locate fiber with planned road resurfacing in underserved townships.",
                    Infrastructure,
                    Low,
                    1.5,
                    "24-36 months",
                ),
            ],
        },
        RecommendationCatalog {
            region: "CA",
            recommendations: vec![
                rec(
                    "ca-r1",
                    "Defensible space inspections",
                    "Fund annual inspections and vegetation clearance in high fire-hazard zones.",
                    Environmental,
                    High,
                    5.0,
                    "6-12 months",
                ),
                rec(
                    "ca-r2",
                    "Seismic retrofit incentives",
                    "Offer grants for soft-story retrofits in multifamily housing.",
                    Infrastructure,
                    High,
                    3.5,
                    "12-36 months",
                ),
            ],
        },
        RecommendationCatalog {
            region: "TX",
            recommendations: vec![
                rec(
                    "tx-r1",
                    "Grid winterization standards",
                    "Require weatherization of generation and distribution assets.",
                    Infrastructure,
                    High,
                    4.0,
                    "12-24 months",
                ),
                rec(
                    "tx-r2",
                    "Evacuation transit for carless households",
                    "Pre-register residents without vehicles for hurricane evacuation buses.",
                    EmergencyResponse,
                    Medium,
                    2.5,
                    "3-6 months",
                ),
            ],
        },
        RecommendationCatalog {
            region: "FL",
            recommendations: vec![rec(
                "fl-r1",
                "Storm surge elevation program",
                "Elevate critical facilities above projected surge heights.",
                Environmental,
                High,
                4.0,
                "24-48 months",
            )],
        },
    ];

    let general = RecommendationCatalog {
        region: "US",
        recommendations: vec![
            rec(
                "us-r1",
                "Household preparedness campaign",
                "Promote 72-hour kits and family communication plans through schools and employers.",
                EmergencyResponse,
                Medium,
                2.0,
                "3-6 months",
            ),
            rec(
                "us-r2",
                "Community health worker outreach",
                "Connect residents with chronic conditions to care before disaster season.",
                Health,
                Medium,
                1.8,
                "6-12 months",
            ),
            rec(
                "us-r3",
                "Emergency rental assistance reserve",
                "Hold a standing fund to prevent post-disaster displacement.",
                Economic,
                Low,
                1.2,
                "6-12 months",
            ),
        ],
    };

    ReferenceCatalog::new(
        catalogs
            .into_iter()
            .map(|catalog| (catalog.region, catalog)),
        general,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_region_gets_general_catalog() {
        let catalog = catalog();
        assert_eq!(catalog.lookup("wy").region, "US");
        assert_eq!(catalog.lookup("tx").recommendations.len(), 2);
    }
}
