use chrono::NaiveDate;
use contracts::domain::payment::aggregate::{Payment, PaymentMethod, PaymentStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn payments() -> Vec<Payment> {
    vec![
        Payment {
            id: 1,
            player_name: "John Smith".to_string(),
            team_name: Some("Lightning Bolts".to_string()),
            description: "Monthly Registration Fee".to_string(),
            amount: 150.0,
            due_date: date(2025, 2, 1),
            status: PaymentStatus::Paid,
            paid_date: Some(date(2025, 1, 20)),
            method: Some(PaymentMethod::Card),
        },
        Payment {
            id: 2,
            player_name: "Emma Johnson".to_string(),
            team_name: Some("Lightning Bolts".to_string()),
            description: "Monthly Registration Fee".to_string(),
            amount: 150.0,
            due_date: date(2025, 2, 1),
            status: PaymentStatus::Pending,
            paid_date: None,
            method: None,
        },
        Payment {
            id: 3,
            player_name: "Michael Brown".to_string(),
            team_name: Some("Thunder Hawks".to_string()),
            description: "Tournament Entry Fee".to_string(),
            amount: 75.0,
            due_date: date(2025, 1, 15),
            status: PaymentStatus::Overdue,
            paid_date: None,
            method: None,
        },
        Payment {
            id: 4,
            player_name: "Sarah Wilson".to_string(),
            team_name: Some("Fire Dragons".to_string()),
            description: "Equipment Fee".to_string(),
            amount: 50.0,
            due_date: date(2025, 1, 30),
            status: PaymentStatus::Paid,
            paid_date: Some(date(2025, 1, 18)),
            method: Some(PaymentMethod::BankTransfer),
        },
        Payment {
            id: 5,
            player_name: "David Lee".to_string(),
            team_name: Some("Thunder Hawks".to_string()),
            description: "Monthly Registration Fee".to_string(),
            amount: 150.0,
            due_date: date(2025, 2, 1),
            status: PaymentStatus::Pending,
            paid_date: None,
            method: None,
        },
    ]
}
