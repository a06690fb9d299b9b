use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum NotificationCategory {
        Info => "info",
        Success => "success",
        Warning => "warning",
    }
}

/// Event record emitted by workflow transitions. Delivery (in-app,
/// email, messaging) is an external collaborator's concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub recipient_id: String,
    pub message: String,
    pub category: NotificationCategory,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_link: Option<String>,
    pub is_read: bool,
}

impl Notification {
    pub fn new(
        recipient_id: impl Into<String>,
        message: impl Into<String>,
        category: NotificationCategory,
        related_link: Option<&str>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            recipient_id: recipient_id.into(),
            message: message.into(),
            category,
            timestamp: Utc::now(),
            related_link: related_link.map(|link| link.to_string()),
            is_read: false,
        }
    }
}
