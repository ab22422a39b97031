use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;
use crate::shared::listview::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolunteerStatus {
    Active,
    Pending,
    Inactive,
}

impl VolunteerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolunteerStatus::Active => "active",
            VolunteerStatus::Pending => "pending",
            VolunteerStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VolunteerStatus::Active => "Active",
            VolunteerStatus::Pending => "Pending",
            VolunteerStatus::Inactive => "Inactive",
        }
    }

    pub fn all() -> &'static [VolunteerStatus] {
        &[
            VolunteerStatus::Active,
            VolunteerStatus::Pending,
            VolunteerStatus::Inactive,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub status: VolunteerStatus,
    #[serde(default)]
    pub hours_logged: f64,
}

impl Entity for Volunteer {
    fn id(&self) -> i32 {
        self.id
    }

    fn collection_name() -> &'static str {
        "volunteers"
    }

    fn element_name() -> &'static str {
        "Volunteer"
    }

    fn list_name() -> &'static str {
        "Volunteers"
    }
}

impl Searchable for Volunteer {
    // name, email, and every skill are candidates: a search for
    // "scorekeeping" finds anyone with that skill.
    fn search_fields(&self) -> Vec<Option<String>> {
        let mut fields = vec![Some(self.name.clone()), self.email.clone()];
        fields.extend(self.skills.iter().cloned().map(Some));
        fields
    }

    fn facet_value(&self, facet: &str) -> Option<String> {
        match facet {
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listview::{filter_records, ListFilter};

    fn volunteer(id: i32, name: &str, skills: &[&str], status: VolunteerStatus) -> Volunteer {
        Volunteer {
            id,
            name: name.to_string(),
            email: None,
            phone: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            status,
            hours_logged: 0.0,
        }
    }

    #[test]
    fn any_skill_matches_the_search() {
        let roster = vec![
            volunteer(1, "Pat", &["Scorekeeping", "First Aid"], VolunteerStatus::Active),
            volunteer(2, "Sam", &["Concessions"], VolunteerStatus::Active),
        ];
        let mut f = ListFilter::new().with_facet("status");
        f.set_search("first aid");
        let visible = filter_records(&roster, &f);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Pat");
    }

    #[test]
    fn status_facet_is_an_equality_constraint() {
        let roster = vec![
            volunteer(1, "Pat", &[], VolunteerStatus::Active),
            volunteer(2, "Sam", &[], VolunteerStatus::Pending),
        ];
        let mut f = ListFilter::new().with_facet("status");
        f.set_facet("status", "pending");
        let visible = filter_records(&roster, &f);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Sam");
    }
}
