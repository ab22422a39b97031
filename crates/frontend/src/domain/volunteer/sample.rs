use contracts::domain::volunteer::aggregate::{Volunteer, VolunteerStatus};

fn volunteer(
    id: i32,
    name: &str,
    email: &str,
    skills: &[&str],
    status: VolunteerStatus,
    hours_logged: f64,
) -> Volunteer {
    Volunteer {
        id,
        name: name.to_string(),
        email: Some(email.to_string()),
        phone: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        status,
        hours_logged,
    }
}

pub fn volunteers() -> Vec<Volunteer> {
    vec![
        volunteer(
            1,
            "Pat Morgan",
            "pat.morgan@email.com",
            &["Scorekeeping", "First Aid"],
            VolunteerStatus::Active,
            42.5,
        ),
        volunteer(
            2,
            "Sam Castillo",
            "sam.c@email.com",
            &["Concessions"],
            VolunteerStatus::Active,
            18.0,
        ),
        volunteer(
            3,
            "Dana Whitfield",
            "dana.w@email.com",
            &["Transportation", "Event Setup"],
            VolunteerStatus::Pending,
            0.0,
        ),
        volunteer(
            4,
            "Chris Okafor",
            "chris.o@email.com",
            &["Coaching Assistant"],
            VolunteerStatus::Inactive,
            65.0,
        ),
    ]
}
