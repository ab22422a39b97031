use contracts::domain::team::aggregate::{Sport, Team};

pub fn teams() -> Vec<Team> {
    vec![
        Team {
            id: 1,
            name: "Lightning Bolts".to_string(),
            sport: Sport::Basketball,
            category: Some("U12".to_string()),
            max_players: 12,
            is_active: true,
            timestamps: None,
        },
        Team {
            id: 2,
            name: "Thunder Hawks".to_string(),
            sport: Sport::Baseball,
            category: Some("U14".to_string()),
            max_players: 18,
            is_active: true,
            timestamps: None,
        },
        Team {
            id: 3,
            name: "Volleyball Stars".to_string(),
            sport: Sport::Volleyball,
            category: Some("U16".to_string()),
            max_players: 14,
            is_active: true,
            timestamps: None,
        },
    ]
}
