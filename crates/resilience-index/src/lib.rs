//! Synthetic resilience-index analytics for the dashboard API.
//!
//! Every response is fabricated per request from bounded random draws or read
//! from immutable reference catalogs. Nothing is persisted between requests.

pub mod api;
pub mod catalogs;
pub mod config;
pub mod economics;
pub mod error;
pub mod forecast;
pub mod region;
pub mod scoring;
pub mod telemetry;
pub mod trends;
