use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;
use crate::shared::listview::{percentage, Searchable};

/// Inventory line for one kind of gear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    #[serde(default)]
    pub brand: Option<String>,
    /// Lowercase sport key ("basketball", "volleyball", ...).
    pub sport: String,
    pub quantity: i32,
    #[serde(default)]
    pub checked_out: i32,
}

impl Equipment {
    pub fn available(&self) -> i32 {
        (self.quantity - self.checked_out).max(0)
    }

    /// Share of stock still on the shelf, `0.0` when nothing is owned.
    pub fn stock_percent(&self) -> f64 {
        percentage(self.available() as f64, self.quantity as f64)
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock_percent() < 25.0
    }
}

impl Entity for Equipment {
    fn id(&self) -> i32 {
        self.id
    }

    fn collection_name() -> &'static str {
        "equipment"
    }

    fn element_name() -> &'static str {
        "Equipment Item"
    }

    fn list_name() -> &'static str {
        "Equipment"
    }
}

impl Searchable for Equipment {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![
            Some(self.name.clone()),
            Some(self.equipment_type.clone()),
            self.brand.clone(),
        ]
    }

    fn facet_value(&self, facet: &str) -> Option<String> {
        match facet {
            "sport" => Some(self.sport.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listview::{filter_records, ListFilter};

    fn item(id: i32, name: &str, sport: &str, quantity: i32, checked_out: i32) -> Equipment {
        Equipment {
            id,
            name: name.to_string(),
            equipment_type: "ball".to_string(),
            brand: None,
            sport: sport.to_string(),
            quantity,
            checked_out,
        }
    }

    #[test]
    fn stock_percent_degrades_to_zero_on_empty_inventory() {
        assert_eq!(item(1, "Game Balls", "basketball", 0, 0).stock_percent(), 0.0);
        assert_eq!(item(2, "Game Balls", "basketball", 20, 5).stock_percent(), 75.0);
        assert_eq!(item(3, "Pinnies", "basketball", 3, 2).stock_percent(), 33.3);
    }

    #[test]
    fn sport_facet_filters_inventory() {
        let inventory = vec![
            item(1, "Game Balls", "basketball", 20, 0),
            item(2, "Net", "volleyball", 2, 0),
        ];
        let mut f = ListFilter::new().with_facet("sport");
        f.set_facet("sport", "volleyball");
        let visible = filter_records(&inventory, &f);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Net");
    }
}
