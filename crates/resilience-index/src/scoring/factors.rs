use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::generator::{round1, MetricGenerator, MetricRange};

/// The five fixed resilience dimensions, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorGroup {
    Health,
    Economic,
    Infrastructure,
    Environmental,
    EmergencyResponse,
}

impl FactorGroup {
    pub const ALL: [FactorGroup; 5] = [
        FactorGroup::Health,
        FactorGroup::Economic,
        FactorGroup::Infrastructure,
        FactorGroup::Environmental,
        FactorGroup::EmergencyResponse,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FactorGroup::Health => "health",
            FactorGroup::Economic => "economic",
            FactorGroup::Infrastructure => "infrastructure",
            FactorGroup::Environmental => "environmental",
            FactorGroup::EmergencyResponse => "emergencyResponse",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FactorGroup::Health => "Health Stress",
            FactorGroup::Economic => "Economic Vulnerability",
            FactorGroup::Infrastructure => "Infrastructure",
            FactorGroup::Environmental => "Environmental Risk",
            FactorGroup::EmergencyResponse => "Emergency Response",
        }
    }

    /// Raw inputs drawn for this group: name, range, and correlation weight.
    fn inputs(self) -> &'static [(&'static str, MetricRange, f64)] {
        match self {
            FactorGroup::Health => &HEALTH_INPUTS,
            FactorGroup::Economic => &ECONOMIC_INPUTS,
            FactorGroup::Infrastructure => &INFRASTRUCTURE_INPUTS,
            FactorGroup::Environmental => &ENVIRONMENTAL_INPUTS,
            FactorGroup::EmergencyResponse => &EMERGENCY_INPUTS,
        }
    }

    /// Fixed formula reducing the raw inputs of this group to a score.
    /// Missing inputs read as zero.
    pub fn score(self, inputs: &BTreeMap<String, f64>) -> f64 {
        let input = |name: &str| inputs.get(name).copied().unwrap_or_default();
        let raw = match self {
            FactorGroup::Health => mean(&[
                input("hospitalCapacity"),
                input("healthcareAccess"),
                100.0 - input("chronicDiseasePrevalence"),
            ]),
            FactorGroup::Economic => {
                let pressure = (2.0 * input("unemploymentRate")
                    + input("housingInstability")
                    + input("povertyRate"))
                    / 4.0;
                100.0 - pressure * 2.0
            }
            FactorGroup::Infrastructure => mean(&[
                input("gridReliability"),
                input("transportationCondition"),
                input("waterSystemAge"),
                input("broadbandAccess"),
            ]),
            FactorGroup::Environmental => {
                100.0
                    - mean(&[
                        input("floodRisk"),
                        input("droughtRisk"),
                        input("wildfireRisk"),
                        input("stormFrequency"),
                    ])
            }
            FactorGroup::EmergencyResponse => {
                (100.0 - input("emsResponseTime") * 5.0
                    + input("cboDensity") * 3.0
                    + input("emergencyPlanningScore")
                    + input("communityPreparedness"))
                    / 4.0
            }
        };
        round1(raw.clamp(0.0, 100.0))
    }
}

const HEALTH_INPUTS: [(&str, MetricRange, f64); 3] = [
    ("hospitalCapacity", MetricRange::index(70.0, 20.0), 1.0),
    ("healthcareAccess", MetricRange::index(75.0, 20.0), 1.0),
    ("chronicDiseasePrevalence", MetricRange::index(30.0, 15.0), -1.0),
];

const ECONOMIC_INPUTS: [(&str, MetricRange, f64); 3] = [
    ("unemploymentRate", MetricRange::new(5.0, 4.0, 2.0, 15.0), -0.2),
    ("housingInstability", MetricRange::index(20.0, 15.0), -1.0),
    ("povertyRate", MetricRange::index(12.0, 8.0), -0.5),
];

const INFRASTRUCTURE_INPUTS: [(&str, MetricRange, f64); 4] = [
    ("gridReliability", MetricRange::index(75.0, 20.0), 1.0),
    ("transportationCondition", MetricRange::index(65.0, 20.0), 1.0),
    ("waterSystemAge", MetricRange::index(60.0, 20.0), 1.0),
    ("broadbandAccess", MetricRange::index(80.0, 15.0), 1.0),
];

const ENVIRONMENTAL_INPUTS: [(&str, MetricRange, f64); 4] = [
    ("floodRisk", MetricRange::index(30.0, 20.0), -1.0),
    ("droughtRisk", MetricRange::index(25.0, 20.0), -1.0),
    ("wildfireRisk", MetricRange::index(20.0, 20.0), -1.0),
    ("stormFrequency", MetricRange::index(35.0, 20.0), -1.0),
];

const EMERGENCY_INPUTS: [(&str, MetricRange, f64); 4] = [
    ("emsResponseTime", MetricRange::new(8.0, 4.0, 3.0, 20.0), -0.1),
    ("cboDensity", MetricRange::new(5.0, 4.0, 0.0, 15.0), 0.1),
    ("emergencyPlanningScore", MetricRange::index(70.0, 20.0), 1.0),
    ("communityPreparedness", MetricRange::index(65.0, 20.0), 1.0),
];

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// One factor group with the raw inputs it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScore {
    pub name: String,
    pub label: String,
    pub raw_inputs: BTreeMap<String, f64>,
    pub score: f64,
}

impl FactorScore {
    pub fn from_inputs(group: FactorGroup, raw_inputs: BTreeMap<String, f64>) -> Self {
        let score = group.score(&raw_inputs);
        Self {
            name: group.key().to_string(),
            label: group.label().to_string(),
            raw_inputs,
            score,
        }
    }

    pub fn generate<R: Rng>(group: FactorGroup, generator: &mut MetricGenerator<R>) -> Self {
        let raw_inputs = group
            .inputs()
            .iter()
            .map(|(name, range, weight)| {
                (name.to_string(), round1(generator.sample(*range, *weight)))
            })
            .collect();
        Self::from_inputs(group, raw_inputs)
    }
}
