use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;
use crate::domain::guardian::aggregate::Guardian;
use crate::shared::listview::{FormError, FormModel, Searchable};

/// Roster entry. Guardians ride along as embedded sub-records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub jersey_number: Option<i32>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team_id: Option<i32>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub guardians: Vec<Guardian>,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_captain(&self) -> bool {
        self.position.as_deref() == Some("Captain")
    }
}

impl Entity for Player {
    fn id(&self) -> i32 {
        self.id
    }

    fn collection_name() -> &'static str {
        "players"
    }

    fn element_name() -> &'static str {
        "Player"
    }

    fn list_name() -> &'static str {
        "Players"
    }
}

impl Searchable for Player {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![
            Some(self.first_name.clone()),
            Some(self.last_name.clone()),
            // jersey numbers are matched as text, not numerically
            self.jersey_number.map(|n| n.to_string()),
        ]
    }

    fn facet_value(&self, facet: &str) -> Option<String> {
        match facet {
            "team" => self.team_id.map(|id| id.to_string()),
            _ => None,
        }
    }
}

/// Create/update form payload; the id is server-assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub jersey_number: Option<i32>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team_id: Option<i32>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

impl FormModel for PlayerDto {
    // The one enforced rule in the domain: first and last name.
    fn validate(&self) -> Result<(), FormError> {
        if self.first_name.trim().is_empty() {
            return Err(FormError::required("firstName", "Player first name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(FormError::required("lastName", "Player last name"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listview::{filter_records, ListFilter, ALL};

    fn player(id: i32, first: &str, last: &str, jersey: Option<i32>, team: Option<i32>) -> Player {
        Player {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            jersey_number: jersey,
            position: None,
            team_id: team,
            date_of_birth: None,
            guardians: Vec::new(),
        }
    }

    #[test]
    fn roster_search_covers_names_and_jersey_as_text() {
        let roster = vec![
            player(1, "Maya", "Chen", Some(1), Some(10)),
            player(2, "Liam", "Okafor", Some(12), Some(11)),
            player(3, "Ana", "Silva", None, Some(10)),
        ];

        let mut f = ListFilter::new().with_facet("team");
        f.set_search("1");
        // "1" matches jerseys 1 and 12 as substrings, nobody by name
        let visible = filter_records(&roster, &f);
        assert_eq!(visible.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);

        f.set_search("");
        f.set_facet("team", "10");
        let visible = filter_records(&roster, &f);
        assert_eq!(visible.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);

        f.set_facet("team", ALL);
        assert_eq!(filter_records(&roster, &f).len(), 3);
    }

    #[test]
    fn dto_requires_first_and_last_name() {
        let mut dto = PlayerDto::default();
        assert_eq!(dto.validate().unwrap_err().field, "firstName");
        dto.first_name = "Maya".to_string();
        assert_eq!(dto.validate().unwrap_err().field, "lastName");
        dto.last_name = "Chen".to_string();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn player_json_is_camel_case() {
        let p = player(5, "Maya", "Chen", Some(7), None);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"firstName\":\"Maya\""));
        assert!(json.contains("\"jerseyNumber\":7"));
    }
}
