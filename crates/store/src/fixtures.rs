//! Demo data served by the in-memory repositories.

use chrono::{DateTime, Duration, TimeZone, Utc};
use vigil_scoring::composite::ModelVote;
use vigil_scoring::config::DetectionConfig;
use vigil_scoring::segments::HighlightedSegment;

use crate::alerts::models::{Alert, AlertStatus};
use crate::analysis::models::{word_count, AnalysisMetadata, AnalysisRecord};
use crate::dashboard::models::{DashboardStat, HeatmapCell};
use crate::settings::models::{ApiKey, Webhook};

pub const DEMO_ANALYSIS_ID: &str = "analysis_demo_001";

pub const DEMO_SOURCE_TEXT: &str = r#"Dear Valued Customer,

We are writing to inform you of an urgent security matter regarding your account. Our advanced fraud detection systems have identified suspicious activity that requires immediate attention.

Your account has been flagged for potential unauthorized access from an unknown location. To protect your assets and personal information, we must verify your identity within the next 24 hours.

Please click the secure link below to verify your account credentials and restore full access:
[SECURE VERIFICATION PORTAL]

Failure to complete this verification process will result in temporary suspension of your account privileges. This is a mandatory security procedure designed to protect our valued customers from financial fraud.

If you have any questions, please contact our 24/7 support team at the number provided in this email. Do not share this email with anyone, as it contains sensitive security information unique to your account.

Thank you for your immediate cooperation in this matter.

Best regards,
Security Team
Financial Services Division"#;

const DEMO_FLAGS: [(&str, f64, &str); 5] = [
    (
        "urgent security matter",
        0.89,
        "High-pressure urgency language commonly used in phishing attempts",
    ),
    (
        "identified suspicious activity that requires immediate attention",
        0.91,
        "Creates false sense of emergency to bypass rational decision-making",
    ),
    (
        "within the next 24 hours",
        0.87,
        "Artificial time pressure typical of social engineering attacks",
    ),
    (
        "click the secure link below to verify your account credentials",
        0.95,
        "Direct request for credential input via external link - classic phishing indicator",
    ),
    (
        "temporary suspension of your account privileges",
        0.88,
        "Threatening language designed to create fear and compliance",
    ),
];

const SAMPLE_JOB_TEXT: &str = "Sample analyzed text...";
const SAMPLE_JOB_WORD_COUNT: usize = 150;

/// Highlight for the first occurrence of `phrase` in `source`, with char
/// offsets.
pub fn locate(
    source: &str,
    phrase: &str,
    confidence: f64,
    reason: &str,
) -> Option<HighlightedSegment> {
    let byte_start = source.find(phrase)?;
    let start_index = source[..byte_start].chars().count();
    Some(HighlightedSegment {
        text: phrase.to_string(),
        start_index,
        end_index: start_index + phrase.chars().count(),
        confidence,
        reason: reason.to_string(),
    })
}

pub fn demo_votes() -> Vec<ModelVote> {
    vec![
        ModelVote::new("OpenAI GPT-4 Classifier", 0.78, 1.0),
        ModelVote::new("Anthropic Claude Detector", 0.82, 1.0),
        ModelVote::new(
            "Specialized Fraud Detector",
            0.93,
            DetectionConfig::default().specialized_weight,
        ),
    ]
}

pub fn demo_analysis(now: DateTime<Utc>) -> AnalysisRecord {
    let highlights = DEMO_FLAGS
        .iter()
        .filter_map(|(phrase, confidence, reason)| {
            let found = locate(DEMO_SOURCE_TEXT, phrase, *confidence, reason);
            if found.is_none() {
                tracing::warn!(phrase, "demo highlight not found in source text");
            }
            found
        })
        .collect();

    AnalysisRecord {
        id: DEMO_ANALYSIS_ID.to_string(),
        source_text: DEMO_SOURCE_TEXT.to_string(),
        model_votes: demo_votes(),
        highlights,
        metadata: AnalysisMetadata {
            file_type: "text/plain".to_string(),
            word_count: word_count(DEMO_SOURCE_TEXT),
        },
        timestamp: now,
    }
}

/// Record returned for every polled job until a real pipeline exists.
pub fn sample_job_record(now: DateTime<Utc>) -> AnalysisRecord {
    AnalysisRecord {
        id: "analysis_sample".to_string(),
        source_text: SAMPLE_JOB_TEXT.to_string(),
        model_votes: demo_votes(),
        highlights: Vec::new(),
        metadata: AnalysisMetadata {
            file_type: "text/plain".to_string(),
            word_count: SAMPLE_JOB_WORD_COUNT,
        },
        timestamp: now,
    }
}

pub fn demo_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    let alert = |id: &str, minutes_ago: i64, score: f64, status: AlertStatus, preview: &str| Alert {
        id: id.to_string(),
        timestamp: now - Duration::minutes(minutes_ago),
        confidence_score: score,
        status,
        source_preview: preview.to_string(),
    };

    vec![
        alert(
            "alert_001",
            15,
            0.92,
            AlertStatus::New,
            "This revolutionary investment opportunity guarantees 300% returns...",
        ),
        alert(
            "alert_002",
            45,
            0.78,
            AlertStatus::Investigating,
            "Dear valued customer, your account has been compromised. Click here...",
        ),
        alert(
            "alert_003",
            120,
            0.85,
            AlertStatus::New,
            "Congratulations! You have won $1,000,000 in our lottery draw...",
        ),
        alert(
            "alert_004",
            180,
            0.34,
            AlertStatus::FalsePositive,
            "Thank you for your recent purchase. Your order will arrive within 3-5...",
        ),
        alert(
            "alert_005",
            240,
            0.91,
            AlertStatus::Resolved,
            "Urgent: Your payment is overdue. Send payment immediately to avoid...",
        ),
    ]
}

pub fn demo_stats() -> Vec<DashboardStat> {
    [
        ("Total Scans", "2,847", "+12.5%"),
        ("Threats Detected", "143", "+8.2%"),
        ("False Positives", "28", "-3.1%"),
        ("Avg Analysis Time", "2.4s", "-15.3%"),
    ]
    .into_iter()
    .map(|(title, value, change)| DashboardStat {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
    })
    .collect()
}

pub fn demo_heatmap() -> Vec<HeatmapCell> {
    [
        ("Mon", 9, 5, 0.72),
        ("Mon", 10, 8, 0.45),
        ("Mon", 14, 12, 0.88),
        ("Tue", 9, 3, 0.34),
        ("Tue", 11, 15, 0.91),
        ("Tue", 15, 7, 0.56),
        ("Wed", 10, 9, 0.67),
        ("Wed", 13, 11, 0.78),
        ("Wed", 16, 6, 0.42),
        ("Thu", 9, 14, 0.85),
        ("Thu", 12, 10, 0.71),
        ("Thu", 15, 4, 0.38),
        ("Fri", 10, 13, 0.79),
        ("Fri", 14, 8, 0.62),
        ("Fri", 17, 5, 0.47),
    ]
    .into_iter()
    .map(|(day, hour, count, avg_score)| HeatmapCell {
        day: day.to_string(),
        hour,
        count,
        avg_score,
    })
    .collect()
}

fn utc_date(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

pub fn demo_api_keys() -> Vec<ApiKey> {
    vec![
        ApiKey {
            id: "key_001".to_string(),
            name: "Production API Key".to_string(),
            key_prefix: "sk_prod_abc123".to_string(),
            created_at: utc_date(2024, 1, 15).unwrap_or_default(),
            last_used: utc_date(2024, 2, 10),
        },
        ApiKey {
            id: "key_002".to_string(),
            name: "Development Key".to_string(),
            key_prefix: "sk_dev_xyz789".to_string(),
            created_at: utc_date(2024, 2, 1).unwrap_or_default(),
            last_used: None,
        },
    ]
}

pub fn demo_webhooks() -> Vec<Webhook> {
    vec![Webhook {
        id: "webhook_001".to_string(),
        url: "https://api.example.com/fraud-alerts".to_string(),
        events: vec![
            "analysis.completed".to_string(),
            "high_risk_detected".to_string(),
        ],
        enabled: true,
    }]
}
