use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visible characters of a key prefix before the mask.
pub const KEY_PREFIX_VISIBLE: usize = 10;
const KEY_MASK: &str = "••••••••••••••••";

/// Metadata of an issued API key. The secret itself is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    pub key_prefix: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

impl ApiKey {
    /// Prefix cut to [`KEY_PREFIX_VISIBLE`] chars and followed by the mask.
    pub fn masked_prefix(&self) -> String {
        let visible: String = self.key_prefix.chars().take(KEY_PREFIX_VISIBLE).collect();
        format!("{visible}{KEY_MASK}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: String,
    pub url: String,
    pub events: Vec<String>,
    pub enabled: bool,
}

impl Webhook {
    pub fn subscribes_to(&self, event: &str) -> bool {
        self.enabled && self.events.iter().any(|e| e == event)
    }
}
