pub mod composite;
pub mod factors;
pub mod generator;

pub use composite::{CompositeScore, DataQuality, TrendDirection};
pub use factors::{FactorGroup, FactorScore};
pub use generator::{generate, round1, round_to, MetricGenerator, MetricRange};
