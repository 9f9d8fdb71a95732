//! HTTP surface for the dashboard: generated metrics, forecasts, reference
//! catalogs, and echo-only submission endpoints.

pub mod query;
pub mod router;
pub mod state;
pub mod submissions;
pub mod views;


pub use router::analytics_router;
pub use state::AnalyticsState;
