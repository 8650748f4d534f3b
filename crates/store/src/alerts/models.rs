use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vigil_scoring::risk::{classify, RiskLevel};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    New,
    Investigating,
    Resolved,
    FalsePositive,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Investigating => "investigating",
            Self::Resolved => "resolved",
            Self::FalsePositive => "false_positive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Investigating => "Investigating",
            Self::Resolved => "Resolved",
            Self::FalsePositive => "False Positive",
        }
    }
}

impl FromStr for AlertStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "investigating" => Ok(Self::Investigating),
            "resolved" => Ok(Self::Resolved),
            "false_positive" => Ok(Self::FalsePositive),
            other => Err(format!("unknown alert status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub confidence_score: f64,
    pub status: AlertStatus,
    pub source_preview: String,
}

impl Alert {
    pub fn risk_level(&self) -> RiskLevel {
        classify(self.confidence_score)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AlertFilter {
    pub status: Option<AlertStatus>,
    pub min_level: Option<RiskLevel>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl AlertFilter {
    pub fn matches(&self, alert: &Alert) -> bool {
        if let Some(status) = self.status {
            if alert.status != status {
                return false;
            }
        }
        if let Some(min_level) = self.min_level {
            if alert.risk_level() < min_level {
                return false;
            }
        }
        true
    }
}
