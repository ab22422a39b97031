use chrono::{DateTime, TimeZone, Utc};
use contracts::domain::notification::aggregate::{Notification, NotificationType};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            title: "Game Reminder".to_string(),
            message: "Lightning Bolts vs Thunder Hawks tomorrow at 6:00 PM".to_string(),
            kind: NotificationType::Urgent,
            is_read: false,
            is_urgent: true,
            created_at: at(2025, 1, 25, 10, 0),
        },
        Notification {
            id: 2,
            title: "Practice Schedule Update".to_string(),
            message: "Lightning Bolts practice moved to 4:30 PM on Friday".to_string(),
            kind: NotificationType::Warning,
            is_read: false,
            is_urgent: false,
            created_at: at(2025, 1, 24, 15, 30),
        },
        Notification {
            id: 3,
            title: "New Player Added".to_string(),
            message: "Emma Johnson has been added to Lightning Bolts roster".to_string(),
            kind: NotificationType::Success,
            is_read: true,
            is_urgent: false,
            created_at: at(2025, 1, 23, 9, 15),
        },
        Notification {
            id: 4,
            title: "Tournament Registration Open".to_string(),
            message: "Youth Championship Tournament registration is now open".to_string(),
            kind: NotificationType::Info,
            is_read: true,
            is_urgent: false,
            created_at: at(2025, 1, 22, 14, 0),
        },
    ]
}
