use serde::{Deserialize, Serialize};

use crate::risk::RiskLevel;

/// One model's share of a composite score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteContribution {
    pub model_name: String,
    pub score: f64,
    pub weight: f64,
    pub weighted_score: f64,
    pub level: RiskLevel,
    pub specialized: bool,
}

/// Breakdown of a composite score.
///
/// `weighted_sum` and `weight_sum` are taken over weights divided by
/// `weight_scale` (the largest weight in the set); their ratio is the
/// composite score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeTrace {
    pub votes: Vec<VoteContribution>,
    pub weighted_sum: f64,
    pub weight_sum: f64,
    pub weight_scale: f64,
}
