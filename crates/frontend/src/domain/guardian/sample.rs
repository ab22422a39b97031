use contracts::domain::guardian::aggregate::Guardian;

pub fn guardians() -> Vec<Guardian> {
    vec![
        Guardian {
            id: 1,
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: Some("jane.smith@email.com".to_string()),
            phone: Some("(555) 123-4567".to_string()),
            relationship: "Mother".to_string(),
            is_emergency_contact: true,
            player_id: Some(1),
            address: Some("12 Oak Street".to_string()),
            occupation: Some("Teacher".to_string()),
            work_phone: None,
        },
        Guardian {
            id: 2,
            first_name: "Mike".to_string(),
            last_name: "Johnson".to_string(),
            email: Some("mike.j@email.com".to_string()),
            phone: Some("(555) 234-5678".to_string()),
            relationship: "Father".to_string(),
            is_emergency_contact: true,
            player_id: Some(2),
            address: None,
            occupation: Some("Engineer".to_string()),
            work_phone: Some("(555) 234-9000".to_string()),
        },
        Guardian {
            id: 3,
            first_name: "Sarah".to_string(),
            last_name: "Brown".to_string(),
            email: Some("sarah.brown@email.com".to_string()),
            phone: None,
            relationship: "Mother".to_string(),
            is_emergency_contact: false,
            player_id: Some(3),
            address: None,
            occupation: None,
            work_phone: None,
        },
        Guardian {
            id: 4,
            first_name: "Carlos".to_string(),
            last_name: "Rivera".to_string(),
            email: None,
            phone: Some("(555) 456-7890".to_string()),
            relationship: "Grandfather".to_string(),
            is_emergency_contact: false,
            player_id: Some(1),
            address: None,
            occupation: None,
            work_phone: None,
        },
    ]
}
