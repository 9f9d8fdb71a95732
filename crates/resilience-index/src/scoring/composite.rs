use rand::Rng;
use serde::{Deserialize, Serialize};

use super::factors::{FactorGroup, FactorScore};
use super::generator::MetricGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataQuality {
    High,
    Medium,
    Low,
}

impl DataQuality {
    pub fn classify(composite: u8) -> Self {
        if composite > 70 {
            Self::High
        } else if composite > 50 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Stable,
    Declining,
}

impl TrendDirection {
    pub fn classify(composite: u8) -> Self {
        if composite > 65 {
            Self::Improving
        } else if composite > 45 {
            Self::Stable
        } else {
            Self::Declining
        }
    }
}

/// Top-level index: the rounded mean of its factor-group scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub factors: Vec<FactorScore>,
    pub value: u8,
}

impl CompositeScore {
    /// Panics on an empty factor list.
    pub fn from_factors(factors: Vec<FactorScore>) -> Self {
        assert!(!factors.is_empty(), "composite requires at least one factor");
        let mean = factors.iter().map(|factor| factor.score).sum::<f64>() / factors.len() as f64;
        let value = mean.round().clamp(0.0, 100.0) as u8;
        Self { factors, value }
    }

    /// Draws every factor group from one generator so siblings stay correlated.
    pub fn generate<R: Rng>(generator: &mut MetricGenerator<R>) -> Self {
        let factors = FactorGroup::ALL
            .iter()
            .map(|group| FactorScore::generate(*group, generator))
            .collect();
        Self::from_factors(factors)
    }

    pub fn data_quality(&self) -> DataQuality {
        DataQuality::classify(self.value)
    }

    pub fn trend(&self) -> TrendDirection {
        TrendDirection::classify(self.value)
    }

    pub fn factor(&self, group: FactorGroup) -> Option<&FactorScore> {
        self.factors.iter().find(|factor| factor.name == group.key())
    }
}
