use serde::{Deserialize, Serialize};
use vigil_common::error::{VigilError, VigilResult};

/// Operator-tunable knobs of the detection pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionConfig {
    /// Weight carried by specialized fraud detectors. Votes at or above it
    /// are traced as specialized.
    pub specialized_weight: f64,
    /// Composite score at or above which an analysis raises an alert.
    pub min_alert_confidence: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            specialized_weight: 1.5,
            min_alert_confidence: 0.70,
        }
    }
}

impl DetectionConfig {
    pub fn validate(&self) -> VigilResult<()> {
        if !self.specialized_weight.is_finite() || self.specialized_weight <= 0.0 {
            return Err(VigilError::Config(format!(
                "specialized weight must be positive, got {}",
                self.specialized_weight
            )));
        }
        if !(0.0..=1.0).contains(&self.min_alert_confidence) {
            return Err(VigilError::Config(format!(
                "minimum alert confidence must be within [0, 1], got {}",
                self.min_alert_confidence
            )));
        }
        Ok(())
    }

    pub fn is_specialized(&self, weight: f64) -> bool {
        weight >= self.specialized_weight
    }

    pub fn is_alert(&self, score: f64) -> bool {
        score >= self.min_alert_confidence
    }

    /// Minimum confidence as a whole percentage, as shown to operators.
    pub fn min_alert_percent(&self) -> u8 {
        (self.min_alert_confidence * 100.0).round() as u8
    }
}
