use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity of a region query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    #[default]
    State,
    County,
    Zip,
}

impl RegionKind {
    /// Unrecognised or absent values resolve to `State`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|raw| raw.trim().to_ascii_lowercase()).as_deref() {
            Some("county") => Self::County,
            Some("zip") | Some("zipcode") => Self::Zip,
            _ => Self::State,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RegionKind::State => "state",
            RegionKind::County => "county",
            RegionKind::Zip => "zip",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Subject of a metric or forecast query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionKey {
    pub code: String,
    pub kind: RegionKind,
}

impl RegionKey {
    /// Returns `None` for a blank code so callers can reject the request.
    pub fn new(code: &str, kind: RegionKind) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        Some(Self {
            code: code.to_string(),
            kind,
        })
    }

    pub fn normalized_code(&self) -> String {
        self.code.to_ascii_lowercase()
    }
}
