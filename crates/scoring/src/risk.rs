use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the `low` bucket.
pub const LOW_THRESHOLD: f64 = 0.2;
/// Lower bound (inclusive) of the `medium` bucket.
pub const MEDIUM_THRESHOLD: f64 = 0.4;
/// Lower bound (inclusive) of the `high` bucket.
pub const HIGH_THRESHOLD: f64 = 0.6;
/// Lower bound (inclusive) of the `critical` bucket.
pub const CRITICAL_THRESHOLD: f64 = 0.8;

/// Discretised fraud likelihood, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 5] = [
        Self::Safe,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Collapse the five levels into the three display bands used for
    /// highlight and heatmap colouring.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Safe | Self::Low => Severity::Low,
            Self::Medium => Severity::Medium,
            Self::High | Self::Critical => Severity::High,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "safe" => Ok(Self::Safe),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(format!("unknown risk level: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A score together with the level it classifies to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub score: f64,
}

/// Map a score to its risk bucket.
///
/// Buckets are half-open and lower-bound inclusive, so each threshold value
/// belongs to the bucket above it. Out-of-range scores are not rejected:
/// negatives land in `Safe`, anything at or above 0.8 in `Critical`.
/// NaN compares false against every threshold and therefore lands in
/// `Critical`.
pub fn classify(score: f64) -> RiskLevel {
    if score < LOW_THRESHOLD {
        RiskLevel::Safe
    } else if score < MEDIUM_THRESHOLD {
        RiskLevel::Low
    } else if score < HIGH_THRESHOLD {
        RiskLevel::Medium
    } else if score < CRITICAL_THRESHOLD {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

pub fn assess(score: f64) -> RiskAssessment {
    RiskAssessment {
        level: classify(score),
        score,
    }
}
