use chrono::NaiveDate;
use contracts::domain::guardian::aggregate::Guardian;
use contracts::domain::player::aggregate::Player;

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn guardian(id: i32, first: &str, last: &str, email: &str, phone: &str, player_id: i32) -> Guardian {
    Guardian {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
        relationship: "Parent".to_string(),
        is_emergency_contact: true,
        player_id: Some(player_id),
        address: None,
        occupation: None,
        work_phone: None,
    }
}

pub fn players() -> Vec<Player> {
    vec![
        Player {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            jersey_number: Some(10),
            position: Some("Forward".to_string()),
            team_id: Some(1),
            date_of_birth: date(2010, 5, 15),
            guardians: vec![guardian(
                1,
                "Jane",
                "Smith",
                "jane.smith@email.com",
                "(555) 123-4567",
                1,
            )],
        },
        Player {
            id: 2,
            first_name: "Emma".to_string(),
            last_name: "Johnson".to_string(),
            jersey_number: Some(7),
            position: Some("Captain".to_string()),
            team_id: Some(1),
            date_of_birth: date(2009, 8, 22),
            guardians: vec![guardian(
                2,
                "Mike",
                "Johnson",
                "mike.j@email.com",
                "(555) 234-5678",
                2,
            )],
        },
        Player {
            id: 3,
            first_name: "Michael".to_string(),
            last_name: "Brown".to_string(),
            jersey_number: Some(23),
            position: Some("Defender".to_string()),
            team_id: Some(2),
            date_of_birth: date(2011, 3, 10),
            guardians: vec![guardian(
                3,
                "Sarah",
                "Brown",
                "sarah.brown@email.com",
                "(555) 345-6789",
                3,
            )],
        },
    ]
}
