use contracts::domain::facility::aggregate::{Facility, FacilityStatus};

fn facility(
    id: i32,
    name: &str,
    facility_type: &str,
    location: &str,
    capacity: i32,
    hourly_rate: f64,
    status: FacilityStatus,
) -> Facility {
    Facility {
        id,
        name: name.to_string(),
        facility_type: facility_type.to_string(),
        location: Some(location.to_string()),
        address: None,
        capacity: Some(capacity),
        hourly_rate: Some(hourly_rate),
        status,
        timestamps: None,
    }
}

pub fn facilities() -> Vec<Facility> {
    vec![
        facility(
            1,
            "Main Soccer Field",
            "field",
            "123 Sports Complex Dr",
            50,
            75.0,
            FacilityStatus::Available,
        ),
        facility(
            2,
            "Indoor Basketball Court",
            "court",
            "456 Athletic Center",
            30,
            60.0,
            FacilityStatus::Booked,
        ),
        facility(
            3,
            "Community Pool",
            "pool",
            "789 Aquatic Center",
            40,
            100.0,
            FacilityStatus::Available,
        ),
        facility(
            4,
            "Training Gym",
            "gym",
            "321 Fitness Plaza",
            25,
            50.0,
            FacilityStatus::Maintenance,
        ),
    ]
}
