use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;
use crate::shared::listview::{count_where, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Info,
    Warning,
    Success,
    Error,
    Urgent,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Info => "info",
            NotificationType::Warning => "warning",
            NotificationType::Success => "success",
            NotificationType::Error => "error",
            NotificationType::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationType::Info => "Info",
            NotificationType::Warning => "Warning",
            NotificationType::Success => "Success",
            NotificationType::Error => "Error",
            NotificationType::Urgent => "Urgent",
        }
    }

    pub fn all() -> &'static [NotificationType] {
        &[
            NotificationType::Info,
            NotificationType::Warning,
            NotificationType::Success,
            NotificationType::Error,
            NotificationType::Urgent,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i32,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_urgent: bool,
    pub created_at: DateTime<Utc>,
}

impl Entity for Notification {
    fn id(&self) -> i32 {
        self.id
    }

    fn collection_name() -> &'static str {
        "notifications"
    }

    fn element_name() -> &'static str {
        "Notification"
    }

    fn list_name() -> &'static str {
        "Notifications"
    }
}

impl Searchable for Notification {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![Some(self.title.clone()), Some(self.message.clone())]
    }

    // The read-status facet is derived from the boolean flag so it
    // keeps the equality contract of every other dimension.
    fn facet_value(&self, facet: &str) -> Option<String> {
        match facet {
            "status" => Some(if self.is_read { "read" } else { "unread" }.to_string()),
            "type" => Some(self.kind.as_str().to_string()),
            _ => None,
        }
    }
}

/// Global badge count; independent of the active filter.
pub fn unread_count(notifications: &[Notification]) -> usize {
    count_where(notifications, |n| !n.is_read)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listview::{filter_records, ListFilter};

    fn notification(id: i32, title: &str, kind: NotificationType, is_read: bool) -> Notification {
        Notification {
            id,
            title: title.to_string(),
            message: "Details inside".to_string(),
            kind,
            is_read,
            is_urgent: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn read_status_facet_derives_from_flag() {
        let inbox = vec![
            notification(1, "Game moved", NotificationType::Warning, false),
            notification(2, "Payment received", NotificationType::Success, true),
        ];
        let mut f = ListFilter::new().with_facet("status").with_facet("type");
        f.set_facet("status", "unread");
        let visible = filter_records(&inbox, &f);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);

        f.set_facet("status", "read");
        f.set_facet("type", "success");
        let visible = filter_records(&inbox, &f);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn unread_count_ignores_filters() {
        let inbox = vec![
            notification(1, "A", NotificationType::Info, false),
            notification(2, "B", NotificationType::Info, false),
            notification(3, "C", NotificationType::Info, true),
        ];
        assert_eq!(unread_count(&inbox), 2);
    }
}
