use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vigil_common::error::VigilResult;
use vigil_scoring::composite::{evaluate_with, CompositeResult, ModelVote};
use vigil_scoring::config::DetectionConfig;
use vigil_scoring::segments::{build_segments, HighlightedSegment, Segment};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub file_type: String,
    pub word_count: usize,
}

/// Everything the analysis pipeline produced for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: String,
    pub source_text: String,
    pub model_votes: Vec<ModelVote>,
    pub highlights: Vec<HighlightedSegment>,
    pub metadata: AnalysisMetadata,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn composite(&self, config: &DetectionConfig) -> VigilResult<CompositeResult> {
        evaluate_with(&self.model_votes, config)
    }

    pub fn segments(&self) -> VigilResult<Vec<Segment>> {
        build_segments(&self.source_text, &self.highlights)
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
