use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// Progress milestones (percent) and the stage label shown once reached.
pub const PROGRESS_STAGES: [(u8, &str); 6] = [
    (0, "Preparing upload..."),
    (25, "Uploading document..."),
    (40, "Extracting text content..."),
    (60, "Running AI detection models..."),
    (80, "Calculating composite scores..."),
    (100, "Analysis complete!"),
];

/// Label of the last milestone `progress` has reached.
pub fn progress_stage(progress: u8) -> &'static str {
    PROGRESS_STAGES
        .iter()
        .rev()
        .find(|(threshold, _)| progress >= *threshold)
        .map(|(_, label)| *label)
        .unwrap_or(PROGRESS_STAGES[0].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_at_each_milestone() {
        for (threshold, label) in PROGRESS_STAGES {
            assert_eq!(progress_stage(threshold), label);
        }
    }

    #[test]
    fn stage_between_milestones_uses_lower_one() {
        assert_eq!(progress_stage(10), "Preparing upload...");
        assert_eq!(progress_stage(59), "Extracting text content...");
        assert_eq!(progress_stage(99), "Calculating composite scores...");
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&JobStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(JobStatus::Pending.as_str(), "pending");
    }
}
