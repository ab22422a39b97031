use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, Timestamps};
use crate::shared::listview::{FormError, FormModel, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityStatus {
    Available,
    Booked,
    Maintenance,
}

impl FacilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityStatus::Available => "available",
            FacilityStatus::Booked => "booked",
            FacilityStatus::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FacilityStatus::Available => "Available",
            FacilityStatus::Booked => "Booked",
            FacilityStatus::Maintenance => "Maintenance",
        }
    }
}

/// Bookable venue (field, court, gym, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    pub status: FacilityStatus,
    #[serde(default)]
    pub timestamps: Option<Timestamps>,
}

impl Entity for Facility {
    fn id(&self) -> i32 {
        self.id
    }

    fn collection_name() -> &'static str {
        "facilities"
    }

    fn element_name() -> &'static str {
        "Facility"
    }

    fn list_name() -> &'static str {
        "Facilities"
    }
}

impl Searchable for Facility {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![
            Some(self.name.clone()),
            Some(self.facility_type.clone()),
            self.location.clone(),
        ]
    }

    fn facet_value(&self, facet: &str) -> Option<String> {
        match facet {
            "type" => Some(self.facility_type.clone()),
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }
}

/// Create form payload; the id is server-assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityDto {
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
}

impl FormModel for FacilityDto {
    fn validate(&self) -> Result<(), FormError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listview::{filter_records, ListFilter};

    fn facility(id: i32, name: &str, facility_type: &str) -> Facility {
        Facility {
            id,
            name: name.to_string(),
            facility_type: facility_type.to_string(),
            location: None,
            address: None,
            capacity: Some(200),
            hourly_rate: Some(45.0),
            status: FacilityStatus::Available,
            timestamps: None,
        }
    }

    #[test]
    fn name_search_selects_matching_facility_only() {
        let facilities = vec![
            facility(1, "Main Soccer Field", "field"),
            facility(2, "Indoor Basketball Court", "court"),
        ];

        let mut f = ListFilter::new();
        f.set_search("soccer");
        let visible = filter_records(&facilities, &f);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Main Soccer Field");
    }

    #[test]
    fn no_match_yields_empty_list_for_the_empty_state() {
        let facilities = vec![
            facility(1, "Main Soccer Field", "field"),
            facility(2, "Indoor Basketball Court", "court"),
        ];

        let mut f = ListFilter::new();
        f.set_search("xyz");
        let visible = filter_records(&facilities, &f);
        assert!(visible.is_empty());
        assert_eq!(Facility::empty_message(), "No Facilities Found");
    }

    #[test]
    fn type_field_is_searchable_and_renamed_in_json() {
        let court = facility(2, "Indoor Basketball Court", "court");
        let mut f = ListFilter::new();
        f.set_search("court");
        assert!(court.matches(&f));

        let json = serde_json::to_string(&court).unwrap();
        assert!(json.contains("\"type\":\"court\""));
    }
}
