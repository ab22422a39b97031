use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;
use crate::shared::listview::{sum_where, FormError, FormModel, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
    Cancelled,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Overdue => "overdue",
            PaymentStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Overdue => "Overdue",
            PaymentStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> &'static [PaymentStatus] {
        &[
            PaymentStatus::Paid,
            PaymentStatus::Pending,
            PaymentStatus::Overdue,
            PaymentStatus::Cancelled,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Cash,
    Check,
    BankTransfer,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Check => "Check",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

/// One fee or dues request. A `paid` status is assumed to carry a paid
/// date; the backend owns that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i32,
    pub player_name: String,
    #[serde(default)]
    pub team_name: Option<String>,
    pub description: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: PaymentStatus,
    #[serde(default)]
    pub paid_date: Option<NaiveDate>,
    #[serde(default)]
    pub method: Option<PaymentMethod>,
}

impl Entity for Payment {
    fn id(&self) -> i32 {
        self.id
    }

    fn collection_name() -> &'static str {
        "payments"
    }

    fn element_name() -> &'static str {
        "Payment"
    }

    fn list_name() -> &'static str {
        "Payments"
    }
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![Some(self.description.clone()), Some(self.player_name.clone())]
    }

    fn facet_value(&self, facet: &str) -> Option<String> {
        match facet {
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }
}

// Header-card totals. All global by policy: "Total Revenue" must not
// shrink when the visible list is narrowed.

pub fn total_revenue(payments: &[Payment]) -> f64 {
    sum_where(payments, |p| p.status == PaymentStatus::Paid, |p| p.amount)
}

pub fn pending_amount(payments: &[Payment]) -> f64 {
    sum_where(payments, |p| p.status == PaymentStatus::Pending, |p| p.amount)
}

pub fn overdue_amount(payments: &[Payment]) -> f64 {
    sum_where(payments, |p| p.status == PaymentStatus::Overdue, |p| p.amount)
}

/// Create form payload; the id is server-assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub player_name: String,
    #[serde(default)]
    pub team_name: Option<String>,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl FormModel for PaymentDto {
    // No enforced rules beyond what the inputs themselves constrain.
    fn validate(&self) -> Result<(), FormError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listview::{filter_records, ListFilter};

    fn payment(id: i32, status: PaymentStatus, amount: f64) -> Payment {
        Payment {
            id,
            player_name: format!("Player {id}"),
            team_name: None,
            description: "Spring registration".to_string(),
            amount,
            due_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            status,
            paid_date: (status == PaymentStatus::Paid)
                .then(|| NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()),
            method: None,
        }
    }

    #[test]
    fn status_filter_narrows_list_but_not_global_revenue() {
        let payments = vec![
            payment(1, PaymentStatus::Paid, 150.0),
            payment(2, PaymentStatus::Pending, 150.0),
            payment(3, PaymentStatus::Overdue, 75.0),
        ];

        let mut f = ListFilter::new().with_facet("status");
        f.set_facet("status", "pending");
        let visible = filter_records(&payments, &f);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].amount, 150.0);

        // totals are computed over the full collection regardless of filter
        assert_eq!(total_revenue(&payments), 150.0);
        assert_eq!(pending_amount(&payments), 150.0);
        assert_eq!(overdue_amount(&payments), 75.0);
    }

    #[test]
    fn search_matches_description_or_player_name() {
        let payments = vec![payment(1, PaymentStatus::Pending, 50.0)];
        let mut f = ListFilter::new().with_facet("status");
        f.set_search("registration");
        assert_eq!(filter_records(&payments, &f).len(), 1);
        f.set_search("player 1");
        assert_eq!(filter_records(&payments, &f).len(), 1);
        f.set_search("uniform");
        assert!(filter_records(&payments, &f).is_empty());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&PaymentStatus::Overdue).unwrap();
        assert_eq!(json, "\"overdue\"");
        let back: PaymentStatus = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(back, PaymentStatus::Paid);
    }
}
