pub mod composite;
pub mod config;
pub mod risk;
pub mod segments;
pub mod trace;

pub use composite::{composite_score, evaluate, evaluate_with, CompositeResult, ModelVote};
pub use config::DetectionConfig;
pub use risk::{assess, classify, RiskAssessment, RiskLevel, Severity};
pub use segments::{build_segments, HighlightedSegment, Segment};
pub use trace::{CompositeTrace, VoteContribution};
