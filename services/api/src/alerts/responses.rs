use serde::Serialize;
use vigil_scoring::config::DetectionConfig;
use vigil_scoring::risk::RiskLevel;
use vigil_store::alerts::models::Alert;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertView {
    #[serde(flatten)]
    pub alert: Alert,
    pub risk_level: RiskLevel,
    pub status_label: &'static str,
    /// Confidence reaches the configured alert threshold.
    pub above_threshold: bool,
}

impl AlertView {
    pub fn new(alert: Alert, config: &DetectionConfig) -> Self {
        Self {
            risk_level: alert.risk_level(),
            status_label: alert.status.label(),
            above_threshold: config.is_alert(alert.confidence_score),
            alert,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListAlertsResponse {
    pub data: Vec<AlertView>,
    pub count: usize,
}
