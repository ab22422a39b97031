use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;
use crate::shared::listview::{count_where, Searchable};

/// Parent or guardian linked to a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub is_emergency_contact: bool,
    #[serde(default)]
    pub player_id: Option<i32>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub work_phone: Option<String>,
}

impl Guardian {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Guardian {
    fn id(&self) -> i32 {
        self.id
    }

    fn collection_name() -> &'static str {
        "guardians"
    }

    fn element_name() -> &'static str {
        "Guardian"
    }

    fn list_name() -> &'static str {
        "Guardians"
    }
}

impl Searchable for Guardian {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![
            Some(self.first_name.clone()),
            Some(self.last_name.clone()),
            self.email.clone(),
        ]
    }

    fn facet_value(&self, _facet: &str) -> Option<String> {
        None
    }
}

// Contact stats for the directory header cards. All global: the cards
// describe the whole directory, not the filtered slice.

pub fn email_contacts_count(guardians: &[Guardian]) -> usize {
    count_where(guardians, |g| g.email.is_some())
}

pub fn phone_contacts_count(guardians: &[Guardian]) -> usize {
    count_where(guardians, |g| g.phone.is_some())
}

pub fn emergency_contacts_count(guardians: &[Guardian]) -> usize {
    count_where(guardians, |g| g.is_emergency_contact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guardian(id: i32, email: Option<&str>, phone: Option<&str>) -> Guardian {
        Guardian {
            id,
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
            relationship: "Mother".to_string(),
            is_emergency_contact: false,
            player_id: Some(1),
            address: None,
            occupation: None,
            work_phone: None,
        }
    }

    #[test]
    fn contact_stats_count_non_null_fields() {
        let guardians = vec![
            guardian(1, Some("a@example.com"), Some("555-0100")),
            guardian(2, None, Some("555-0101")),
        ];
        assert_eq!(email_contacts_count(&guardians), 1);
        assert_eq!(phone_contacts_count(&guardians), 2);
        assert_eq!(emergency_contacts_count(&guardians), 0);
    }

    #[test]
    fn search_matches_email_and_never_panics_on_null() {
        let with_email = guardian(1, Some("ana@example.com"), None);
        let without_email = guardian(2, None, None);
        assert!(with_email.matches_search("ana@"));
        assert!(!without_email.matches_search("ana@"));
        assert!(without_email.matches_search("last2"));
    }
}
