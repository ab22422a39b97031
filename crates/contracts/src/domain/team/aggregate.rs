use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, Timestamps};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Volleyball,
    Basketball,
    Baseball,
}

impl Sport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Volleyball => "volleyball",
            Sport::Basketball => "basketball",
            Sport::Baseball => "baseball",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sport::Volleyball => "Volleyball",
            Sport::Basketball => "Basketball",
            Sport::Baseball => "Baseball",
        }
    }

    pub fn all() -> &'static [Sport] {
        &[Sport::Volleyball, Sport::Basketball, Sport::Baseball]
    }
}

/// Team record; the roster screen uses it as the facet source and the
/// dashboard counts it globally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub sport: Sport,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_max_players")]
    pub max_players: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub timestamps: Option<Timestamps>,
}

fn default_max_players() -> i32 {
    20
}

fn default_true() -> bool {
    true
}

impl Entity for Team {
    fn id(&self) -> i32 {
        self.id
    }

    fn collection_name() -> &'static str {
        "teams"
    }

    fn element_name() -> &'static str {
        "Team"
    }

    fn list_name() -> &'static str {
        "Teams"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let team: Team =
            serde_json::from_str(r#"{"id":1,"name":"U16 Hawks","sport":"basketball"}"#).unwrap();
        assert_eq!(team.max_players, 20);
        assert!(team.is_active);
        assert_eq!(team.sport, Sport::Basketball);
    }
}
