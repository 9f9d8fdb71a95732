//! POST payloads that are validated and echoed back. Nothing is stored, so a
//! later GET never reflects a prior submission.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

static SERVICE_REQUEST_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static SUBSCRIPTION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_id(prefix: &str, sequence: &AtomicU64) -> String {
    let id = sequence.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id:06}")
}

fn required(value: &str, name: &'static str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::MissingParameter(name))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
    Critical,
}

impl Urgency {
    pub fn estimated_response_hours(self) -> u32 {
        match self {
            Urgency::Low => 72,
            Urgency::Normal => 48,
            Urgency::High => 24,
            Urgency::Critical => 4,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestPayload {
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub urgency: Urgency,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestConfirmation {
    pub id: String,
    pub status: &'static str,
    pub service_type: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    pub priority: Urgency,
    pub estimated_response_hours: u32,
    pub submitted_at: DateTime<Utc>,
    pub message: String,
}

impl ServiceRequestPayload {
    pub fn confirm(self, now: DateTime<Utc>) -> Result<ServiceRequestConfirmation, ApiError> {
        let service_type = required(&self.service_type, "serviceType")?;
        let region = required(&self.region, "region")?;
        let id = next_id("SR", &SERVICE_REQUEST_SEQUENCE);
        let estimated_response_hours = self.urgency.estimated_response_hours();

        Ok(ServiceRequestConfirmation {
            message: format!(
                "{service_type} request for {region} received; expect contact within {estimated_response_hours} hours"
            ),
            id,
            status: "submitted",
            service_type,
            region,
            organization_id: optional(self.organization_id),
            description: optional(self.description),
            contact_email: optional(self.contact_email),
            priority: self.urgency,
            estimated_response_hours,
            submitted_at: now,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSubscriptionPayload {
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSubscriptionConfirmation {
    pub id: String,
    pub status: &'static str,
    pub region: String,
    pub channels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AlertSubscriptionPayload {
    pub fn confirm(self, now: DateTime<Utc>) -> Result<AlertSubscriptionConfirmation, ApiError> {
        let region = required(&self.region, "region")?;
        let mut seen = HashSet::new();
        let mut channels: Vec<String> = self
            .channels
            .iter()
            .map(|channel| channel.trim().to_ascii_lowercase())
            .filter(|channel| !channel.is_empty() && seen.insert(channel.clone()))
            .collect();
        if channels.is_empty() {
            channels.push("email".to_string());
        }

        Ok(AlertSubscriptionConfirmation {
            id: next_id("SUB", &SUBSCRIPTION_SEQUENCE),
            status: "active",
            region,
            channels,
            email: optional(self.email),
            created_at: now,
        })
    }
}
