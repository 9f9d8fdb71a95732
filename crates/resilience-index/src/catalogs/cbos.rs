use serde::Serialize;

use super::ReferenceCatalog;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityOrganization {
    pub id: &'static str,
    pub name: &'static str,
    pub focus_areas: &'static [&'static str],
    pub service_area: &'static str,
    pub contact: &'static str,
    pub accepts_referrals: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CboDirectory {
    pub region: &'static str,
    pub organizations: Vec<CommunityOrganization>,
}

fn org(
    id: &'static str,
    name: &'static str,
    focus_areas: &'static [&'static str],
    service_area: &'static str,
    contact: &'static str,
) -> CommunityOrganization {
    CommunityOrganization {
        id,
        name,
        focus_areas,
        service_area,
        contact,
        accepts_referrals: true,
    }
}

pub(super) fn catalog() -> ReferenceCatalog<CboDirectory> {
    let directories = [
        CboDirectory {
            region: "PA",
            organizations: vec![
                org(
                    "pa-001",
                    "Philadelphia Neighborhood Preparedness Network",
                    &["emergency shelters", "heat relief"],
                    "Philadelphia County",
                    "info@phillyprepared.example.org",
                ),
                org(
                    "pa-002",
                    "Three Rivers Flood Response Coalition",
                    &["flood recovery", "home repair"],
                    "Allegheny County",
                    "help@threeriversflood.example.org",
                ),
                org(
                    "pa-003",
                    "Keystone Food Security Alliance",
                    &["food access", "senior outreach"],
                    "Statewide",
                    "contact@keystonefood.example.org",
                ),
            ],
        },
        CboDirectory {
            region: "CA",
            organizations: vec![
                org(
                    "ca-001",
                    "SoCal Wildfire Recovery Collective",
                    &["wildfire recovery", "air quality"],
                    "Los Angeles County",
                    "support@socalrecovery.example.org",
                ),
                org(
                    "ca-002",
                    "Central Valley Water Equity Project",
                    &["drought relief", "water access"],
                    "Fresno County",
                    "team@cvwater.example.org",
                ),
            ],
        },
        CboDirectory {
            region: "TX",
            organizations: vec![
                org(
                    "tx-001",
                    "Gulf Coast Storm Readiness Alliance",
                    &["hurricane preparedness", "evacuation support"],
                    "Harris County",
                    "ready@gulfcoaststorm.example.org",
                ),
                org(
                    "tx-002",
                    "Rio Grande Valley Heat Relief",
                    &["cooling centers", "health outreach"],
                    "Hidalgo County",
                    "relief@rgvheat.example.org",
                ),
            ],
        },
        CboDirectory {
            region: "FL",
            organizations: vec![org(
                "fl-001",
                "South Florida Resilience Hubs",
                &["hurricane shelters", "power restoration"],
                "Miami-Dade County",
                "hubs@sfresilience.example.org",
            )],
        },
        CboDirectory {
            region: "NY",
            organizations: vec![org(
                "ny-001",
                "Brooklyn Coastal Neighbors",
                &["coastal flooding", "tenant support"],
                "Kings County",
                "hello@bkcoastal.example.org",
            )],
        },
    ];

    let national = CboDirectory {
        region: "US",
        organizations: vec![
            org(
                "us-001",
                "American Red Cross",
                &["disaster relief", "emergency shelters", "blood services"],
                "National",
                "https://www.redcross.org",
            ),
            org(
                "us-002",
                "Feeding America",
                &["food access"],
                "National",
                "https://www.feedingamerica.org",
            ),
            org(
                "us-003",
                "United Way 211",
                &["referrals", "housing assistance"],
                "National",
                "https://www.211.org",
            ),
        ],
    };

    ReferenceCatalog::new(
        directories
            .into_iter()
            .map(|directory| (directory.region, directory)),
        national,
    )
}
