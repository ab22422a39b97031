use contracts::domain::equipment::aggregate::Equipment;

use crate::shared::data;

use super::sample;

pub async fn load() -> Vec<Equipment> {
    data::load_or_fallback(data::fetch_list::<Equipment>(), sample::equipment).await
}
