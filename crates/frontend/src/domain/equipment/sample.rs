use contracts::domain::equipment::aggregate::Equipment;

fn item(
    id: i32,
    name: &str,
    equipment_type: &str,
    brand: Option<&str>,
    sport: &str,
    quantity: i32,
    checked_out: i32,
) -> Equipment {
    Equipment {
        id,
        name: name.to_string(),
        equipment_type: equipment_type.to_string(),
        brand: brand.map(str::to_string),
        sport: sport.to_string(),
        quantity,
        checked_out,
    }
}

pub fn equipment() -> Vec<Equipment> {
    vec![
        item(1, "Game Balls", "ball", Some("Wilson"), "basketball", 20, 5),
        item(2, "Practice Pinnies", "apparel", None, "basketball", 24, 20),
        item(3, "Volleyball Net", "net", Some("Tachikara"), "volleyball", 2, 1),
        item(4, "Batting Helmets", "protective", Some("Rawlings"), "baseball", 12, 3),
        item(5, "Bats", "bat", Some("Easton"), "baseball", 8, 8),
    ]
}
